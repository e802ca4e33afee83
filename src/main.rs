//! Demo host: drives one create, update and delete through the dialog and lets
//! the catalog reload after each.
//!
//! Uses the in-memory store unless `PRODUCT_API_URL` is set.

use product_dialog::dialog::SubmitOutcome;
use product_dialog::model::{DialogMode, Field, Product};
use product_dialog::notify::TracingNotifier;
use product_dialog::runtime::{setup_tracing, CatalogSystem};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting product dialog demo");

    let system = CatalogSystem::from_env()?;
    let (mut view, mut dialog) = system.screen(TracingNotifier);

    view.reload().await?;
    info!(count = view.products().len(), "Catalog loaded");

    // Create
    let created = async {
        dialog.open(Product::draft(), DialogMode::CreateOrUpdate, Some("Nuevo Producto".into()));
        dialog.change(Field::Title, "Shoe");
        dialog.change(Field::Price, "20");
        dialog.change(Field::Description, "Running shoe");
        dialog.change(Field::Category, "footwear");
        dialog.change(Field::Image, "https://example.com/shoe.png");
        dialog.submit().await
    }
    .instrument(tracing::info_span!("create_product"))
    .await;
    view.process_pending().await;

    let product = match created {
        SubmitOutcome::Created(product) => product,
        other => {
            warn!(outcome = ?other, "Create did not succeed, stopping");
            drop((view, dialog));
            return finish(system).await;
        }
    };

    // Update
    let updated = async {
        dialog.open(product.clone(), DialogMode::CreateOrUpdate, Some("Editar Producto".into()));
        dialog.change(Field::Price, "35.5");
        dialog.submit().await
    }
    .instrument(tracing::info_span!("update_product", id = %product.id))
    .await;
    info!(success = updated.is_success(), "Update finished");
    view.process_pending().await;

    // Delete
    let deleted = async {
        dialog.open(product.clone(), DialogMode::Delete, Some("Borrar Producto".into()));
        if let Some(prompt) = dialog.delete_prompt() {
            info!("{prompt}");
        }
        dialog.confirm_delete().await
    }
    .instrument(tracing::info_span!("delete_product", id = %product.id))
    .await;
    info!(success = deleted.is_success(), "Delete finished");
    view.process_pending().await;

    info!(
        count = view.products().len(),
        reloads = view.reload_count(),
        "Catalog after demo"
    );

    drop((view, dialog));
    finish(system).await
}

/// Stops the store. Views and dialogs must be dropped first.
async fn finish(system: CatalogSystem) -> Result<(), Box<dyn std::error::Error>> {
    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
