//! # Catalog View
//!
//! The parent of the product dialog: it owns the product collection and reloads
//! it whenever a [`CatalogEvent::ReloadRequested`] arrives.
//!
//! Reload requests are events, not a flag. Each event queued on the channel causes
//! exactly one reload, however many arrive before the view gets to them.
//!
//! ```rust
//! use product_dialog::catalog::{refresh_channel, CatalogView};
//! use product_dialog::gateway::StoreGateway;
//! use product_dialog::notify::TracingNotifier;
//! use product_dialog::product_store;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = product_store::new(8);
//!     tokio::spawn(actor.run());
//!
//!     let (signal, receiver) = refresh_channel();
//!     let mut view = CatalogView::new(StoreGateway::new(client), TracingNotifier, receiver);
//!
//!     signal.request_reload();
//!     signal.request_reload();
//!     assert_eq!(view.process_pending().await, 2);
//!     assert_eq!(view.reload_count(), 2);
//! }
//! ```

use crate::dialog::GENERIC_ERROR;
use crate::gateway::{GatewayError, ProductGateway};
use crate::model::Product;
use crate::notify::Notifier;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Events the catalog view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A mutation succeeded; the collection must be fetched again.
    ReloadRequested,
}

/// Sending half handed to the dialog. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    sender: mpsc::UnboundedSender<CatalogEvent>,
}

impl RefreshSignal {
    /// Queues one reload. Returns `false` when the view is gone.
    pub fn request_reload(&self) -> bool {
        let delivered = self.sender.send(CatalogEvent::ReloadRequested).is_ok();
        if !delivered {
            debug!("Catalog view dropped, reload request ignored");
        }
        delivered
    }
}

/// Receiving half owned by the catalog view.
#[derive(Debug)]
pub struct RefreshReceiver {
    receiver: mpsc::UnboundedReceiver<CatalogEvent>,
}

impl RefreshReceiver {
    /// Waits for the next event. `None` once every signal is dropped.
    pub async fn recv(&mut self) -> Option<CatalogEvent> {
        self.receiver.recv().await
    }

    /// The next queued event, without waiting.
    pub fn try_recv(&mut self) -> Option<CatalogEvent> {
        self.receiver.try_recv().ok()
    }
}

/// Creates a linked signal/receiver pair.
pub fn refresh_channel() -> (RefreshSignal, RefreshReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (RefreshSignal { sender }, RefreshReceiver { receiver })
}

/// The product list screen.
pub struct CatalogView<G, N> {
    gateway: G,
    notifier: N,
    events: RefreshReceiver,
    products: Vec<Product>,
    reloads: u64,
}

impl<G: ProductGateway, N: Notifier> CatalogView<G, N> {
    pub fn new(gateway: G, notifier: N, events: RefreshReceiver) -> Self {
        Self {
            gateway,
            notifier,
            events,
            products: Vec::new(),
            reloads: 0,
        }
    }

    /// The products from the last successful reload.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// How many reloads have been attempted.
    pub fn reload_count(&self) -> u64 {
        self.reloads
    }

    /// Fetches the collection. On failure the previous list is kept and the
    /// generic error is shown.
    #[instrument(skip(self))]
    pub async fn reload(&mut self) -> Result<(), GatewayError> {
        self.reloads += 1;
        match self.gateway.list().await {
            Ok(products) => {
                info!(count = products.len(), "Catalog reloaded");
                self.products = products;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Catalog reload failed");
                self.notifier.notify_error(GENERIC_ERROR);
                Err(e)
            }
        }
    }

    /// Runs one reload per queued event, without waiting for new ones.
    /// Returns the number of reloads run.
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.events.try_recv() {
            self.handle(event).await;
            handled += 1;
        }
        handled
    }

    /// Handles events until every [`RefreshSignal`] is dropped, then returns the view.
    pub async fn run(mut self) -> Self {
        while let Some(event) = self.events.recv().await {
            self.handle(event).await;
        }
        debug!(reloads = self.reloads, "Catalog event loop finished");
        self
    }

    async fn handle(&mut self, event: CatalogEvent) {
        match event {
            // The error was already logged and shown by `reload`.
            CatalogEvent::ReloadRequested => {
                let _ = self.reload().await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::StoreGateway;
    use crate::model::ProductId;
    use crate::notify::RecordingNotifier;
    use crate::store::mock::MockStore;
    use crate::store::StoreError;

    fn shoe() -> Product {
        Product::new(1u64, "Shoe", 20.0, "desc", "cat", "url")
    }

    #[tokio::test]
    async fn test_each_event_reloads_once() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_list().return_ok(vec![shoe()]);
        mock.expect_list().return_ok(vec![shoe()]);

        let (signal, receiver) = refresh_channel();
        let mut view = CatalogView::new(
            StoreGateway::new(mock.client()),
            RecordingNotifier::new(),
            receiver,
        );

        signal.request_reload();
        signal.request_reload();
        signal.request_reload();
        assert_eq!(view.process_pending().await, 3);
        assert_eq!(view.reload_count(), 3);
        assert_eq!(view.products()[0].id, ProductId(1));

        assert_eq!(view.process_pending().await, 0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_products() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_list().return_ok(vec![shoe()]);
        mock.expect_list().return_err(StoreError::ActorClosed);

        let notifier = RecordingNotifier::new();
        let (_signal, receiver) = refresh_channel();
        let mut view =
            CatalogView::new(StoreGateway::new(mock.client()), notifier.clone(), receiver);

        view.reload().await.unwrap();
        assert!(view.reload().await.is_err());

        assert_eq!(view.products().len(), 1);
        assert_eq!(notifier.last().unwrap().message(), GENERIC_ERROR);
        mock.verify();
    }

    #[tokio::test]
    async fn test_run_stops_when_signals_dropped() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_list().return_ok(vec![shoe()]);

        let (signal, receiver) = refresh_channel();
        let view = CatalogView::new(
            StoreGateway::new(mock.client()),
            RecordingNotifier::new(),
            receiver,
        );

        signal.request_reload();
        drop(signal);
        let view = view.run().await;
        assert_eq!(view.reload_count(), 1);
        mock.verify();
    }

    #[test]
    fn test_signal_without_view() {
        let (signal, receiver) = refresh_channel();
        drop(receiver);
        assert!(!signal.request_reload());
    }
}
