//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown and final size (`entity_type="Product"`)
//! - **Store operations**: Create, Get, List, Update, Delete with product ids
//! - **Dialog**: open/close at `debug`, create/update/delete at `info`,
//!   failed mutations at `error`
//! - **Gateways**: one span per call (`create`, `update`, `delete`, `list`)
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Payloads and dialog transitions
//! RUST_LOG=debug cargo run
//!
//! # Only the dialog
//! RUST_LOG=product_dialog::dialog=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! ```text
//! INFO Store started entity_type="Product"
//! INFO submit: Creating product
//! INFO submit:create: Created entity_type="Product" id=1 size=1
//! INFO submit: Producto Creado placement=TopCenter
//! INFO reload: Catalog reloaded count=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
