/// Which workflow the product dialog runs.
///
/// The mode is chosen by whoever opens the dialog; it is never derived from the product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogMode {
    /// Edit form with a save button. Creates when the draft id is `0`, updates otherwise.
    #[default]
    CreateOrUpdate,
    /// Confirmation prompt with a delete button.
    Delete,
}
