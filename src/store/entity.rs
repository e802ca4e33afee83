//! # StoreEntity Trait
//!
//! The contract a record type implements to be kept by a [`StoreActor`](crate::store::StoreActor).
//! Associated types fix the id and the create/update payloads, so a store of products
//! only ever accepts product payloads.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`]
//! - [`StoreEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `StoreActor`.
///
/// Hooks are `#[async_trait]` so an entity can await other services while it
/// validates itself.
#[async_trait]
pub trait StoreEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier. Built from the store's `u64` counter, which starts at 1.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the new id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update. On error the record must be left unchanged.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
