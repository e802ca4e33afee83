use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// `0` is the sentinel for a product that has not been persisted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Identifier carried by drafts that were never stored.
    pub const NEW: ProductId = ProductId(0);

    /// Returns `true` for the "not yet persisted" sentinel.
    pub fn is_new(self) -> bool {
        self == Self::NEW
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Product Store
/// This struct implements the [`StoreEntity`](crate::store::StoreEntity) trait,
/// allowing it to be managed by a [`StoreActor`](crate::store::StoreActor).
///
/// See [`impl StoreEntity for Product`](#impl-StoreEntity-for-Product) for details on:
/// - Creation parameters ([`ProductFields`])
/// - Update parameters ([`ProductFields`])
///
/// The serde shape matches the JSON served by the product backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, [`ProductId::NEW`] for drafts
    /// * `title` - Product title
    /// * `price` - Unit price
    /// * `description` - Free text description
    /// * `category` - Catalog category
    /// * `image` - Image URL
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: description.into(),
            category: category.into(),
            image: image.into(),
        }
    }

    /// An empty draft for the "new product" dialog.
    pub fn draft() -> Self {
        Self::new(ProductId::NEW, "", 0.0, "", "", "")
    }

    /// Builds a product from a stored identifier and its payload.
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            title: fields.title,
            price: fields.price,
            description: fields.description,
            category: fields.category,
            image: fields.image,
        }
    }

    /// The payload of this product without its identifier.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_new()
    }
}

/// Product payload without the identifier.
///
/// Sent on create (the backend assigns the id) and applied by the store on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}
