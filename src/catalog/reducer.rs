use crate::catalog::intent::CatalogIntent;
use crate::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

/// Pure loader state machine.
///
/// Every completion intent overwrites the state unconditionally, which is
/// what gives overlapping fetches their last-completed-wins semantics
/// without any request fencing.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Retry => CatalogState::Loading,
            CatalogIntent::Refresh => match state {
                CatalogState::Ready { coffees, .. } => CatalogState::Ready {
                    coffees,
                    refreshing: true,
                },
                // Refresh outside Ready behaves like a retry.
                _ => CatalogState::Loading,
            },
            CatalogIntent::Loaded { coffees } => {
                if coffees.is_empty() {
                    CatalogState::Empty
                } else {
                    CatalogState::Ready {
                        coffees,
                        refreshing: false,
                    }
                }
            }
            CatalogIntent::Failed { message } => CatalogState::Error { message },
        }
    }
}
