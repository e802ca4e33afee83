//! # Store Gateway
//!
//! A [`ProductGateway`] over a [`StoreClient<Product>`], used for the in-memory
//! catalog and for tests driven by [`MockStore`](crate::store::mock::MockStore).

use super::{GatewayError, ProductGateway};
use crate::model::{Product, ProductFields, ProductId};
use crate::store::StoreClient;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Gateway that talks to the product store actor.
#[derive(Clone)]
pub struct StoreGateway {
    inner: StoreClient<Product>,
}

impl StoreGateway {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ProductGateway for StoreGateway {
    #[instrument(skip(self))]
    async fn create(&self, fields: ProductFields) -> Result<Product, GatewayError> {
        debug!("Sending request");
        Ok(self.inner.create(fields).await?)
    }

    #[instrument(skip(self, product))]
    async fn update(&self, id: ProductId, product: Product) -> Result<Product, GatewayError> {
        debug!(?product, "Sending request");
        Ok(self.inner.update(id, product.fields()).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<(), GatewayError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::{create_mock_store, next_create, next_delete, next_update};
    use crate::store::StoreError;

    fn shoe(id: u64) -> Product {
        Product::new(id, "Shoe", 20.0, "desc", "cat", "url")
    }

    #[tokio::test]
    async fn test_create_sends_fields_without_id() {
        let (client, mut receiver) = create_mock_store::<Product>(10);
        let gateway = StoreGateway::new(client);

        let task = tokio::spawn(async move { gateway.create(shoe(0).fields()).await });

        let (params, responder) = next_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.title, "Shoe");
        responder.send(Ok(shoe(1))).unwrap();

        let stored = task.await.unwrap().unwrap();
        assert_eq!(stored.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_update_is_keyed_by_id() {
        let (client, mut receiver) = create_mock_store::<Product>(10);
        let gateway = StoreGateway::new(client);

        let mut edited = shoe(4);
        edited.title = "Boot".into();
        let task = tokio::spawn(async move { gateway.update(ProductId(4), edited).await });

        let (id, update, responder) = next_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ProductId(4));
        assert_eq!(update.title, "Boot");
        responder
            .send(Ok(Product::from_fields(id, update)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().title, "Boot");
    }

    #[tokio::test]
    async fn test_delete_error_is_mapped() {
        let (client, mut receiver) = create_mock_store::<Product>(10);
        let gateway = StoreGateway::new(client);

        let task = tokio::spawn(async move { gateway.delete(ProductId(5)).await });

        let (id, responder) = next_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, ProductId(5));
        responder
            .send(Err(StoreError::NotFound(id.to_string())))
            .unwrap();

        let result = task.await.unwrap();
        assert!(matches!(result, Err(GatewayError::NotFound(id)) if id == "5"));
    }

    #[tokio::test]
    async fn test_closed_store_is_unavailable() {
        let (client, receiver) = create_mock_store::<Product>(10);
        drop(receiver);
        let gateway = StoreGateway::new(client);

        let result = gateway.list().await;
        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
    }
}
