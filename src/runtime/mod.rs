//! Runtime orchestration and lifecycle management.
//!
//! - [`CatalogSystem`] - picks the gateway, starts the product store and wires
//!   the dialog to the catalog view
//! - [`CatalogConfig`] - defaults plus environment overrides
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use tracing::*;
