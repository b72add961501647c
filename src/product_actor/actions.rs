/// Custom actions for Product entities.
///
/// These are the admin operations that go beyond replacing the whole record.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Flips the in-stock flag.
    ToggleStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The in-stock flag after toggling.
    ToggleStock(bool),
}
