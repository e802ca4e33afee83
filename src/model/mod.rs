//! Pure data structures shared by the dialog, the gateways and the product store.
//!
//! [`Product`] implements the [`StoreEntity`](crate::store::StoreEntity) trait (see
//! [`product_store`](crate::product_store)), so the same type travels through the
//! in-memory store, the REST gateway and the dialog draft.

pub mod field;
pub mod mode;
pub mod product;

pub use field::*;
pub use mode::*;
pub use product::*;
