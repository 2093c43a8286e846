//! Unidirectional state primitives.
//!
//! A `Reducer` folds an `Intent` into a `UiState`. The controller is the
//! only caller; everything downstream sees the resulting state read-only.

/// Marker for values that fully describe what a view shows.
///
/// Must be cheap to clone and comparable so observers can tell whether
/// anything changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for events that may move a state forward.
///
/// Intents are produced off the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` mapping.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
