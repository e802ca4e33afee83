//! # Product Store
//!
//! The in-memory product collection: a [`StoreActor`] of [`Product`]s.
//!
//! - [`entity`] - [`StoreEntity`](crate::store::StoreEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] for rejected payloads
//! - [`new()`] - Factory that creates the actor and its client
//!
//! ```rust
//! use product_dialog::model::ProductFields;
//! use product_dialog::product_store;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = product_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let fields = ProductFields {
//!         title: "Shoe".into(),
//!         price: 20.0,
//!         description: "desc".into(),
//!         category: "cat".into(),
//!         image: "url".into(),
//!     };
//!     let stored = client.create(fields).await.unwrap();
//!     assert!(!stored.is_new());
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use crate::store::{StoreActor, StoreClient};

/// Creates a new Product store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Product>, StoreClient<Product>) {
    StoreActor::new(buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductFields, ProductId};
    use crate::store::StoreError;

    fn fields(title: &str, price: f64) -> ProductFields {
        ProductFields {
            title: title.to_string(),
            price,
            description: "desc".to_string(),
            category: "cat".to_string(),
            image: "url".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_full_lifecycle() {
        let (actor, client) = new(10);
        let handle = tokio::spawn(actor.run());

        // 1. Create
        let shoe = client.create(fields("Shoe", 20.0)).await.unwrap();
        assert_eq!(shoe.id, ProductId(1));
        let hat = client.create(fields("Hat", 5.0)).await.unwrap();
        assert_eq!(hat.id, ProductId(2));

        // 2. List, ordered by id
        let titles: Vec<_> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Shoe", "Hat"]);

        // 3. Update
        let updated = client.update(shoe.id, fields("Boot", 35.0)).await.unwrap();
        assert_eq!(updated.id, shoe.id);
        assert_eq!(updated.title, "Boot");
        assert_eq!(updated.price, 35.0);

        // 4. Delete
        client.delete(shoe.id).await.unwrap();
        assert!(client.get(shoe.id).await.unwrap().is_none());
        assert_eq!(client.list().await.unwrap().len(), 1);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_create_is_rejected_without_using_an_id() {
        let (actor, client) = new(10);
        tokio::spawn(actor.run());

        let result = client.create(fields("", 20.0)).await;
        assert!(matches!(result, Err(StoreError::EntityError(_))));

        let stored = client.create(fields("Shoe", 20.0)).await.unwrap();
        assert_eq!(stored.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_product_unchanged() {
        let (actor, client) = new(10);
        tokio::spawn(actor.run());

        let shoe = client.create(fields("Shoe", 20.0)).await.unwrap();
        let result = client.update(shoe.id, fields("Shoe", -1.0)).await;
        assert!(matches!(result, Err(StoreError::EntityError(_))));

        let current = client.get(shoe.id).await.unwrap().unwrap();
        assert_eq!(current.price, 20.0);
    }

    #[tokio::test]
    async fn test_missing_product() {
        let (actor, client) = new(10);
        tokio::spawn(actor.run());

        let result = client.delete(ProductId(99)).await;
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "99"));

        let result = client.update(ProductId(99), fields("Shoe", 1.0)).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
