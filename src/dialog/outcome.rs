use crate::model::{Product, ProductId};
use crate::validation::FieldErrors;

/// What a submit or delete confirmation ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The gateway stored a new product. The dialog is closed.
    Created(Product),
    /// The gateway replaced an existing product. The dialog is closed.
    Updated(Product),
    /// The gateway removed the product. The dialog is closed.
    Deleted(ProductId),
    /// The gateway call failed. The dialog is still open with the same draft.
    Failed,
    /// Nothing was sent.
    Rejected(RejectReason),
}

impl SubmitOutcome {
    /// `true` when the gateway call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Created(_) | SubmitOutcome::Updated(_) | SubmitOutcome::Deleted(_)
        )
    }
}

/// Why a submit was a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The dialog is not open.
    Closed,
    /// Save was requested in delete mode, or delete in save mode.
    WrongMode,
    /// The form has field errors.
    Invalid(FieldErrors),
}

/// How the dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The "Cancelar" button.
    Cancel,
    /// The close control in the dialog header.
    HeaderClose,
    /// A mutation succeeded.
    Completed,
}
