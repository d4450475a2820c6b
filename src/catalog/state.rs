use crate::catalog::record::Coffee;
use crate::ui::mvi::UiState;

/// Phase of the catalog fetch lifecycle. Exactly one is active at a time;
/// transitions are driven solely by fetch outcomes and user retry/refresh
/// actions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Initial fetch or retry in flight; nothing to show yet.
    #[default]
    Loading,
    /// Last completed fetch failed. `message` is the fixed localized string,
    /// never the raw transport error.
    Error { message: &'static str },
    /// Last completed fetch returned an empty collection.
    Empty,
    /// Records to render, in response order. `refreshing` keeps the list
    /// visible underneath while a new fetch is outstanding.
    Ready {
        coffees: Vec<Coffee>,
        refreshing: bool,
    },
}

impl UiState for CatalogState {}

impl CatalogState {
    /// Records when the list is showing.
    pub fn coffees(&self) -> Option<&[Coffee]> {
        match self {
            Self::Ready { coffees, .. } => Some(coffees),
            _ => None,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self, Self::Ready { refreshing: true, .. })
    }
}
