//! # Product Dialog
//!
//! > **The create/update/delete dialog of a product catalog, without the pixels.**
//!
//! A catalog screen lists products. Opening a product shows a modal dialog that
//! edits it or confirms its deletion. On success the dialog closes, shows a toast
//! and asks the catalog to reload. On failure it stays open and shows a generic error.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`validation`])
//! - [`Product`](model::Product), its [`ProductId`](model::ProductId) (`0` means "not stored yet")
//!   and the editable [`Field`](model::Field)s.
//! - [`validate`](validation::validate) turns raw form text into field errors;
//!   [`FormState`](validation::FormState) tracks values, errors and touched fields.
//!
//! ### 2. The Workflow ([`dialog`], [`catalog`])
//! - [`ProductDialog`](dialog::ProductDialog) owns the open/closed state, the mode and
//!   the draft, and turns submit into create, update or delete calls.
//! - [`CatalogView`](catalog::CatalogView) holds the product list and reloads it once
//!   per [`CatalogEvent::ReloadRequested`](catalog::CatalogEvent).
//!
//! ### 3. The Seams ([`gateway`], [`notify`])
//! - [`ProductGateway`](gateway::ProductGateway) with a REST and an in-memory implementation.
//! - [`Notifier`](notify::Notifier) for success and error toasts.
//!
//! ### 4. The Store ([`store`], [`product_store`])
//! A generic actor over a [`StoreEntity`](store::StoreEntity): one Tokio task owns the
//! collection and handles requests in order, so no locks are needed. See
//! [`store::mock`] for testing against scripted responses.
//!
//! ### 5. The Orchestrator ([`runtime`])
//! [`CatalogSystem`](runtime::CatalogSystem) picks the gateway from
//! [`CatalogConfig`](runtime::CatalogConfig) and wires a dialog to a catalog view.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # In-memory store
//! RUST_LOG=info cargo run
//!
//! # Against a REST backend
//! PRODUCT_API_URL=https://fakestoreapi.com RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod dialog;
pub mod gateway;
pub mod model;
pub mod notify;
pub mod product_store;
pub mod runtime;
pub mod store;
pub mod validation;
