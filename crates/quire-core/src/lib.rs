//!
//! Quire Core - Workflow configuration model for the Quire service
//!
//! This crate defines the immutable workflow configuration, the collection
//! catalog interface, and the resolver that answers read-only queries
//! about which collections use a workflow and which steps it defines.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - configuration model, collections, catalog interface
pub mod domain;

/// Application services - query resolution over the domain
pub mod application;

/// Error types
pub mod error;

// Re-export key types
pub use error::{CoreError, CoreResult};

pub use application::resolver::WorkflowConfigResolver;
pub use domain::catalog::{memory::InMemoryCollectionCatalog, CollectionCatalog};
pub use domain::collection::{Collection, QueryContext};
pub use domain::workflow::{
    ActionDefinition, ResolvedWorkflow, StepDefinition, WorkflowConfiguration,
    WorkflowConfigurationBuilder, WorkflowDeclaration, WorkflowSummary,
};
