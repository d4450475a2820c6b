use crate::catalog::record::Coffee;
use crate::ui::mvi::Intent;

/// Fetch-lifecycle events and user actions feeding the loader reducer.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// User retry from `Error` or `Empty`; re-enters `Loading`.
    Retry,
    /// User refresh from `Ready`; keeps the current list rendered
    /// underneath until the new result supersedes it.
    Refresh,
    /// A fetch completed with a decoded collection.
    Loaded { coffees: Vec<Coffee> },
    /// A fetch failed. `message` is the fixed user-facing string.
    Failed { message: &'static str },
}

impl Intent for CatalogIntent {}
