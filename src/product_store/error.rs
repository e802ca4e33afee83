//! Error types for the product store.

use crate::validation::FieldErrors;
use thiserror::Error;

/// Errors raised by [`Product`](crate::model::Product) inside the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The payload breaks the product field rules.
    #[error("Invalid product: {0}")]
    Invalid(FieldErrors),
}
