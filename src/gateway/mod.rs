//! # Persistence Gateway
//!
//! [`ProductGateway`] is the seam between the dialog and wherever products live.
//!
//! - [`StoreGateway`] - backed by the in-memory [`product_store`](crate::product_store)
//! - [`RestGateway`] - backed by the product REST backend (`/products`)
//!
//! Both map their failures into [`GatewayError`].

pub mod error;
pub mod rest;
pub mod store;

pub use error::GatewayError;
pub use rest::RestGateway;
pub use store::StoreGateway;

use crate::model::{Product, ProductFields, ProductId};
use async_trait::async_trait;
use std::sync::Arc;

/// Create, update, delete and list operations on the remote product collection.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Stores a new product. The backend assigns the id.
    async fn create(&self, fields: ProductFields) -> Result<Product, GatewayError>;

    /// Replaces the product stored under `id`.
    async fn update(&self, id: ProductId, product: Product) -> Result<Product, GatewayError>;

    async fn delete(&self, id: ProductId) -> Result<(), GatewayError>;

    /// The whole collection, used to reload the catalog.
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
}

#[async_trait]
impl<G: ProductGateway + ?Sized> ProductGateway for Arc<G> {
    async fn create(&self, fields: ProductFields) -> Result<Product, GatewayError> {
        (**self).create(fields).await
    }

    async fn update(&self, id: ProductId, product: Product) -> Result<Product, GatewayError> {
        (**self).update(id, product).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), GatewayError> {
        (**self).delete(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        (**self).list().await
    }
}
