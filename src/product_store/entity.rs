//! StoreEntity implementation for the Product model.
//!
//! The store applies the same field rules as the dialog form, so a product that
//! the form would reject can't be written by any other path either.

use super::error::ProductError;
use crate::model::{Product, ProductFields, ProductId};
use crate::store::StoreEntity;
use crate::validation::validate_product;
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductFields;
    type Update = ProductFields;
    type Error = ProductError;

    /// Builds the stored product, rejecting payloads that fail validation.
    fn from_create_params(id: ProductId, params: ProductFields) -> Result<Self, Self::Error> {
        let product = Product::from_fields(id, params);
        check(&product)?;
        Ok(product)
    }

    /// Replaces every field. The stored product is untouched when the new fields are invalid.
    async fn on_update(&mut self, update: ProductFields) -> Result<(), Self::Error> {
        let candidate = Product::from_fields(self.id, update);
        check(&candidate)?;
        *self = candidate;
        Ok(())
    }
}

fn check(product: &Product) -> Result<(), ProductError> {
    let errors = validate_product(product);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ProductError::Invalid(errors))
    }
}
