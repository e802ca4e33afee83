//! # REST Gateway
//!
//! A [`ProductGateway`] for the product REST backend:
//!
//! | operation | request |
//! |---|---|
//! | list | `GET {base}/products` |
//! | create | `POST {base}/products` with the product fields |
//! | update | `PUT {base}/products/{id}` with the full product |
//! | delete | `DELETE {base}/products/{id}` |

use super::{GatewayError, ProductGateway};
use crate::model::{Product, ProductFields, ProductId};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Gateway that talks to the product backend over HTTP.
#[derive(Clone)]
pub struct RestGateway {
    url: String,
    client: reqwest::Client,
}

impl RestGateway {
    /// Creates a gateway for the backend at `base_url` (e.g. `https://fakestoreapi.com`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Creates a gateway sharing an existing HTTP client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let url = base_url.into().trim_end_matches('/').to_string();
        Self { url, client }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.url)
    }

    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.url, id)
    }
}

#[async_trait]
impl ProductGateway for RestGateway {
    #[instrument(skip(self))]
    async fn create(&self, fields: ProductFields) -> Result<Product, GatewayError> {
        debug!("Sending request");
        let response = self
            .client
            .post(self.products_url())
            .json(&fields)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response).await?, "create").await
    }

    #[instrument(skip(self, product))]
    async fn update(&self, id: ProductId, product: Product) -> Result<Product, GatewayError> {
        debug!(?product, "Sending request");
        let response = self
            .client
            .put(self.product_url(id))
            .json(&product)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response).await?, "update").await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<(), GatewayError> {
        debug!("Sending request");
        let response = self
            .client
            .delete(self.product_url(id))
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        debug!("Sending request");
        let response = self
            .client
            .get(self.products_url())
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response).await?, "list").await
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

async fn check_status(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound(message));
    }
    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    operation: &str,
) -> Result<T, GatewayError> {
    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|e| {
        GatewayError::Decode(format!("unable to parse response from {operation}: {e}"))
    })
}
