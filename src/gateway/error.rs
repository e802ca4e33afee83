//! Error types for the persistence gateways.

use crate::store::StoreError;
use thiserror::Error;

/// Any failure of a create, update, delete or list call.
///
/// The dialog does not tell these apart; the variants exist for logs and for
/// hosts that want to.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never got a response (connection refused, reset, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("server error: {status} {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("unable to decode response: {0}")]
    Decode(String),

    /// The product does not exist.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The store refused the payload.
    #[error("product rejected: {0}")]
    Rejected(String),

    /// The store is not running.
    #[error("product store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for GatewayError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => GatewayError::NotFound(id),
            StoreError::EntityError(inner) => GatewayError::Rejected(inner.to_string()),
            other @ (StoreError::ActorClosed | StoreError::ActorDropped) => {
                GatewayError::Unavailable(other.to_string())
            }
        }
    }
}
