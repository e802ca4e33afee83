//! # Product Dialog
//!
//! The create/update/delete modal for a single product, without any rendering.
//!
//! ## Lifecycle
//!
//! ```text
//! Closed --open(product, mode, title)--> Open(mode)
//! Open   --close(Cancel | HeaderClose)--> Closed      (edits are discarded)
//! Open   --submit / confirm_delete ok--> Closed      (success toast, reload event)
//! Open   --submit / confirm_delete err--> Open        (error toast, error logged)
//! ```
//!
//! In [`DialogMode::CreateOrUpdate`] the draft id decides the call: `0` creates,
//! anything else updates that id. In [`DialogMode::Delete`] only
//! [`ProductDialog::confirm_delete`] does anything.
//!
//! Every operation takes `&mut self`, so a second submit can't start while the
//! first gateway call is still pending.

mod outcome;

pub use outcome::{CloseReason, RejectReason, SubmitOutcome};

use crate::catalog::RefreshSignal;
use crate::gateway::{GatewayError, ProductGateway};
use crate::model::{DialogMode, Field, Product};
use crate::notify::{Notifier, Placement};
use crate::validation::FormState;
use tracing::{debug, error, info, instrument};

pub const CREATED: &str = "Producto Creado";
pub const UPDATED: &str = "Producto Actualizado";
pub const DELETED: &str = "Producto Borrado";
pub const GENERIC_ERROR: &str = "A ocurrido un Error";

/// Dialog controller.
///
/// `G` is the persistence gateway and `N` the notification sink; the
/// [`RefreshSignal`] tells the parent catalog to reload after a mutation.
pub struct ProductDialog<G, N> {
    gateway: G,
    notifier: N,
    refresh: RefreshSignal,
    visible: bool,
    mode: DialogMode,
    title: Option<String>,
    draft: Option<Product>,
    form: Option<FormState>,
}

impl<G: ProductGateway, N: Notifier> ProductDialog<G, N> {
    /// Creates a closed dialog.
    pub fn new(gateway: G, notifier: N, refresh: RefreshSignal) -> Self {
        Self {
            gateway,
            notifier,
            refresh,
            visible: false,
            mode: DialogMode::default(),
            title: None,
            draft: None,
            form: None,
        }
    }

    /// Shows the dialog for `product`. No network call is made.
    ///
    /// Opening an already open dialog replaces its draft.
    pub fn open(&mut self, product: Product, mode: DialogMode, title: Option<String>) {
        debug!(id = %product.id, ?mode, "Dialog opened");
        self.form = Some(FormState::new(&product));
        self.draft = Some(product);
        self.mode = mode;
        self.title = title;
        self.visible = true;
    }

    /// Hides the dialog and discards the draft and any edits.
    pub fn close(&mut self, reason: CloseReason) {
        debug!(?reason, "Dialog closed");
        self.visible = false;
        self.title = None;
        self.draft = None;
        self.form = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The product the dialog was opened with.
    pub fn draft(&self) -> Option<&Product> {
        self.draft.as_ref()
    }

    /// The current form snapshot, `None` while closed.
    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    /// The confirmation text of the delete prompt.
    pub fn delete_prompt(&self) -> Option<String> {
        match (&self.draft, self.mode) {
            (Some(product), DialogMode::Delete) => Some(format!(
                "¿Está seguro que desea eliminar el Producto? {}?",
                product.title
            )),
            _ => None,
        }
    }

    /// Updates a field value. Returns `false` when the dialog is closed or the
    /// field is [`Field::Id`], which only [`open`](Self::open) sets.
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> bool {
        if field == Field::Id {
            debug!("Id is not editable, change ignored");
            return false;
        }
        match &self.form {
            Some(form) => {
                self.form = Some(form.change(field, value));
                true
            }
            None => false,
        }
    }

    /// Marks a field as touched. Returns `false` when the dialog is closed.
    pub fn blur(&mut self, field: Field) -> bool {
        match &self.form {
            Some(form) => {
                self.form = Some(form.blur(field));
                true
            }
            None => false,
        }
    }

    /// Whether the save control is enabled.
    pub fn can_submit(&self) -> bool {
        self.visible
            && self.mode == DialogMode::CreateOrUpdate
            && self.form.as_ref().is_some_and(FormState::can_submit)
    }

    /// Saves the draft: create when its id is `0`, update otherwise.
    ///
    /// An invalid form is not sent; every field is marked touched so all errors show.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.visible {
            return SubmitOutcome::Rejected(RejectReason::Closed);
        }
        if self.mode != DialogMode::CreateOrUpdate {
            return SubmitOutcome::Rejected(RejectReason::WrongMode);
        }
        let Some(id) = self.draft.as_ref().map(|product| product.id) else {
            return SubmitOutcome::Rejected(RejectReason::Closed);
        };
        let Some(form) = self.form.take() else {
            return SubmitOutcome::Rejected(RejectReason::Closed);
        };
        let form = form.touch_all();
        let product = form.to_product();
        self.form = Some(form);

        // The opened product decides create vs update, whatever the form holds.
        let product = match product {
            Ok(product) => Product { id, ..product },
            Err(errors) => {
                debug!(%errors, "Submit blocked by validation");
                return SubmitOutcome::Rejected(RejectReason::Invalid(errors));
            }
        };

        if product.is_new() {
            info!("Creating product");
            match self.gateway.create(product.fields()).await {
                Ok(stored) => {
                    self.succeed(CREATED);
                    SubmitOutcome::Created(stored)
                }
                Err(e) => self.fail("create", e),
            }
        } else {
            info!(id = %product.id, "Updating product");
            match self.gateway.update(product.id, product).await {
                Ok(stored) => {
                    self.succeed(UPDATED);
                    SubmitOutcome::Updated(stored)
                }
                Err(e) => self.fail("update", e),
            }
        }
    }

    /// Deletes the draft's product.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> SubmitOutcome {
        if !self.visible {
            return SubmitOutcome::Rejected(RejectReason::Closed);
        }
        if self.mode != DialogMode::Delete {
            return SubmitOutcome::Rejected(RejectReason::WrongMode);
        }
        let Some(id) = self.draft.as_ref().map(|product| product.id) else {
            return SubmitOutcome::Rejected(RejectReason::Closed);
        };

        info!(%id, "Deleting product");
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.succeed(DELETED);
                SubmitOutcome::Deleted(id)
            }
            Err(e) => self.fail("delete", e),
        }
    }

    fn succeed(&mut self, message: &str) {
        self.notifier.notify_success(message, Placement::TopCenter);
        self.close(CloseReason::Completed);
        self.refresh.request_reload();
    }

    fn fail(&self, operation: &str, e: GatewayError) -> SubmitOutcome {
        error!(operation, error = %e, "Product mutation failed");
        self.notifier.notify_error(GENERIC_ERROR);
        SubmitOutcome::Failed
    }
}
