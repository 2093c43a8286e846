//! Event to state mapping for the content load.

use super::intent::{clamp_fraction, LoadEvent};
use super::mvi::Reducer;
use super::state::LoadState;

/// Maps each lifecycle event onto the state it reports.
///
/// The mapping ignores the previous state: whatever the loader says wins.
/// Lifecycle checking lives in `TransitionPolicy`.
pub struct LoadReducer;

impl Reducer for LoadReducer {
    type State = LoadState;
    type Intent = LoadEvent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadEvent::Started => LoadState::Progressing { percent: 0.0 },

            LoadEvent::Progress { fraction } => LoadState::Progressing {
                percent: clamp_fraction(fraction),
            },

            LoadEvent::Finished => LoadState::Finished,

            LoadEvent::Failed { message } => LoadState::Failure { message },

            LoadEvent::ConnectionLost => LoadState::NoConnection,

            LoadEvent::Reset => LoadState::Idle,
        }
    }
}
