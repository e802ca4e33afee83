//! Product form validation.
//!
//! - [`rules`] - the pure [`validate`] function and its messages
//! - [`form`] - [`FormState`], the per-dialog snapshot of values, errors and touched flags

pub mod form;
pub mod rules;

pub use form::FormState;
pub use rules::{validate, validate_product, FieldErrors, FormValues};
