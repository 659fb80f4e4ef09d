/// Workflow configuration domain models
pub mod workflow;

/// Collections and request context
pub mod collection;

/// Collection catalog interface
pub mod catalog;
