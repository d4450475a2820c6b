//! Unidirectional data flow primitives for the UI layer.
//!
//! Intents (user actions, fetch outcomes) run through a pure reducer to
//! produce the next state; views render from state alone.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for intent objects: user actions, fetch outcomes,
/// navigation events.
pub trait Intent: Send + 'static {}

/// Marker trait for UI state objects.
///
/// States are cloned to produce successors and compared to detect changes;
/// `Default` is the state before anything happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
///
/// The reducer is the only place where state transitions happen.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
