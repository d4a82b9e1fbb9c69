//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place a state type transitions: a pure function from the
/// current state and one intent to the next state. No clock, no I/O;
/// anything time- or network-dependent arrives inside the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
