//! # Catalog System
//!
//! Starts whatever backs the product screen and hands out a linked
//! [`CatalogView`]/[`ProductDialog`] pair.

use super::config::{CatalogConfig, ConfigError};
use crate::catalog::{refresh_channel, CatalogView};
use crate::dialog::ProductDialog;
use crate::gateway::{GatewayError, ProductGateway, RestGateway, StoreGateway};
use crate::notify::Notifier;
use crate::product_store;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Shared handle to whichever gateway the system was started with.
pub type SharedGateway = Arc<dyn ProductGateway>;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("store task failed: {0}")]
    TaskFailed(String),
}

/// The runtime behind the product screen.
///
/// With an `api_url` the gateway is a [`RestGateway`]; otherwise a product
/// store actor is spawned and the gateway is a [`StoreGateway`] in front of it.
///
/// # Example
///
/// ```rust
/// use product_dialog::model::{DialogMode, Product};
/// use product_dialog::notify::RecordingNotifier;
/// use product_dialog::runtime::{CatalogConfig, CatalogSystem};
///
/// #[tokio::main]
/// async fn main() {
///     let system = CatalogSystem::start(CatalogConfig::default()).unwrap();
///     let (mut view, mut dialog) = system.screen(RecordingNotifier::new());
///
///     let draft = Product::new(0u64, "Shoe", 20.0, "d", "c", "i");
///     dialog.open(draft, DialogMode::CreateOrUpdate, None);
///     assert!(dialog.submit().await.is_success());
///
///     view.process_pending().await;
///     assert_eq!(view.products().len(), 1);
///
///     drop((view, dialog));
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CatalogSystem {
    pub gateway: SharedGateway,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts the system. Must be called inside a tokio runtime when no
    /// `api_url` is configured, since the store actor is spawned.
    pub fn start(config: CatalogConfig) -> Result<Self, SystemError> {
        match config.api_url {
            Some(url) => {
                info!(%url, "Using REST backend");
                let gateway = RestGateway::new(url)?;
                Ok(Self {
                    gateway: Arc::new(gateway),
                    handles: Vec::new(),
                })
            }
            None => {
                info!(buffer = config.store_buffer, "Using in-memory product store");
                let (actor, client) = product_store::new(config.store_buffer);
                let handle = tokio::spawn(actor.run());
                Ok(Self {
                    gateway: Arc::new(StoreGateway::new(client)),
                    handles: vec![handle],
                })
            }
        }
    }

    /// Reads [`CatalogConfig::from_env`] and starts the system.
    pub fn from_env() -> Result<Self, SystemError> {
        Self::start(CatalogConfig::from_env()?)
    }

    /// A catalog view and a dialog sharing the gateway, linked by one refresh channel.
    pub fn screen<N: Notifier + Clone>(
        &self,
        notifier: N,
    ) -> (
        CatalogView<SharedGateway, N>,
        ProductDialog<SharedGateway, N>,
    ) {
        let (signal, receiver) = refresh_channel();
        let view = CatalogView::new(self.gateway.clone(), notifier.clone(), receiver);
        let dialog = ProductDialog::new(self.gateway.clone(), notifier, signal);
        (view, dialog)
    }

    /// Drops the gateway and waits for the store actor to finish.
    ///
    /// Views and dialogs returned by [`screen`](Self::screen) hold gateway
    /// clones; the store only stops once they are dropped too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog system...");
        drop(self.gateway);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DialogMode, Product};
    use crate::notify::RecordingNotifier;

    #[tokio::test]
    async fn test_in_memory_screen_round_trip() {
        let system = CatalogSystem::start(CatalogConfig::default()).unwrap();
        let notifier = RecordingNotifier::new();
        let (mut view, mut dialog) = system.screen(notifier.clone());

        dialog.open(
            Product::new(0u64, "Shoe", 20.0, "d", "c", "i"),
            DialogMode::CreateOrUpdate,
            None,
        );
        assert!(dialog.submit().await.is_success());
        assert_eq!(view.process_pending().await, 1);
        assert_eq!(view.products()[0].title, "Shoe");
        assert_eq!(notifier.notifications().len(), 1);

        drop((view, dialog));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rest_backend_has_no_tasks() {
        let config = CatalogConfig {
            api_url: Some("http://127.0.0.1:1".into()),
            ..CatalogConfig::default()
        };
        let system = CatalogSystem::start(config).unwrap();
        assert!(system.handles.is_empty());
        system.shutdown().await.unwrap();
    }
}
