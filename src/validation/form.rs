//! Explicit form state for one open dialog.
//!
//! Every mutation returns a new [`FormState`] snapshot with errors recomputed,
//! so a renderer can hold on to the previous one without it changing underneath.

use super::rules::{validate, FieldErrors, FormValues};
use crate::model::{Field, Product};
use std::collections::BTreeSet;

/// Values, errors and touched flags of the product form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
}

impl FormState {
    /// Starts a form from a draft product. Nothing is touched yet.
    pub fn new(product: &Product) -> Self {
        Self::from_values(FormValues::from(product))
    }

    pub fn from_values(values: FormValues) -> Self {
        let errors = validate(&values);
        Self {
            values,
            errors,
            touched: BTreeSet::new(),
        }
    }

    /// Applies a value change and re-validates.
    #[must_use]
    pub fn change(&self, field: Field, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.set(field, value);
        Self {
            errors: validate(&values),
            values,
            touched: self.touched.clone(),
        }
    }

    /// Marks the field as touched and re-validates.
    #[must_use]
    pub fn blur(&self, field: Field) -> Self {
        let mut touched = self.touched.clone();
        touched.insert(field);
        Self {
            values: self.values.clone(),
            errors: validate(&self.values),
            touched,
        }
    }

    /// Marks every field as touched, as a submit attempt does.
    #[must_use]
    pub fn touch_all(&self) -> Self {
        Self {
            values: self.values.clone(),
            errors: validate(&self.values),
            touched: Field::ALL.into_iter().collect(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The current error for a field, touched or not.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// The error to render under the field's input: only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the save control is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid()
    }

    pub fn to_product(&self) -> Result<Product, FieldErrors> {
        self.values.to_product()
    }
}
