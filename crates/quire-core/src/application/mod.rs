/// Workflow configuration resolver
pub mod resolver;
