use super::intent::Intent;
use super::state::UiState;

/// The only place a feature's state changes.
///
/// `reduce` is a pure function `(State, Intent) -> State`; side effects such
/// as network calls are started by the caller after inspecting the result.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
