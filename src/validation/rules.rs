//! Field rules for the product form.
//!
//! [`validate`] is a pure function from raw input values to a [`FieldErrors`] map.
//! It is re-run on every change and blur, so it must stay cheap and side-effect free.

use crate::model::{Field, Product, ProductId};
use std::collections::BTreeMap;
use std::fmt::Display;

pub const ID_INVALID: &str = "El identificador debe ser un entero mayor o igual a 0";
pub const TITLE_REQUIRED: &str = "El titulo es requerido";
pub const PRICE_REQUIRED: &str = "El precio es requerido";
pub const PRICE_NOT_A_NUMBER: &str = "El precio debe ser un numero";
pub const PRICE_NEGATIVE: &str = "El precio debe ser mayor o igual a 0";
pub const DESCRIPTION_REQUIRED: &str = "La descripcion es requerida";
pub const CATEGORY_REQUIRED: &str = "La categoria es requerida";
pub const IMAGE_REQUIRED: &str = "La URL de la imagen es requerida";

/// Raw form values, as typed into the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub id: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Title => &self.title,
            Field::Price => &self.price,
            Field::Description => &self.description,
            Field::Category => &self.category,
            Field::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Id => self.id = value,
            Field::Title => self.title = value,
            Field::Price => self.price = value,
            Field::Description => self.description = value,
            Field::Category => self.category = value,
            Field::Image => self.image = value,
        }
    }

    /// Converts valid values back into a typed product.
    pub fn to_product(&self) -> Result<Product, FieldErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        // Both parses were just checked by `validate`.
        let id = parse_id(&self.id).ok_or_else(|| FieldErrors::single(Field::Id, ID_INVALID))?;
        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(message) => return Err(FieldErrors::single(Field::Price, message)),
        };
        Ok(Product {
            id,
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        })
    }
}

impl From<&Product> for FormValues {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Error message per field. A field absent from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    fn single(field: Field, message: &str) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Validates raw form values.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if parse_id(&values.id).is_none() {
        errors.insert(Field::Id, ID_INVALID);
    }
    require(&mut errors, Field::Title, &values.title, TITLE_REQUIRED);
    if let Err(message) = parse_price(&values.price) {
        errors.insert(Field::Price, message);
    }
    require(&mut errors, Field::Description, &values.description, DESCRIPTION_REQUIRED);
    require(&mut errors, Field::Category, &values.category, CATEGORY_REQUIRED);
    require(&mut errors, Field::Image, &values.image, IMAGE_REQUIRED);

    errors
}

/// Validates a typed product with the same rules as the form.
pub fn validate_product(product: &Product) -> FieldErrors {
    validate(&FormValues::from(product))
}

fn require(errors: &mut FieldErrors, field: Field, value: &str, message: &str) {
    if value.is_empty() {
        errors.insert(field, message);
    }
}

// An absent id means "new product".
fn parse_id(raw: &str) -> Option<ProductId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(ProductId::NEW);
    }
    raw.parse::<u64>().ok().map(ProductId)
}

fn parse_price(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PRICE_REQUIRED);
    }
    match raw.parse::<f64>() {
        Ok(price) if !price.is_finite() => Err(PRICE_NOT_A_NUMBER),
        Ok(price) if price < 0.0 => Err(PRICE_NEGATIVE),
        Ok(price) => Ok(price),
        Err(_) => Err(PRICE_NOT_A_NUMBER),
    }
}
