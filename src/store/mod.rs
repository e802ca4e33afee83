//! Generic in-memory record store built on a single tokio task.
//!
//! - [`StoreEntity`] - Trait that record types implement
//! - [`StoreActor`] - The task that owns the records
//! - [`StoreClient`] - Cloneable async handle used by everything else
//! - [`StoreError`] - Plumbing errors (closed actor, missing record, entity rejection)
//!
//! See [`mock`] for testing code that sits on top of a [`StoreClient`].

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
