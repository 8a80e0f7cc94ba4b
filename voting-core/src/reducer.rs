//! Action dispatcher.
//!
//! Maps an [`Action`] plus the current [`AppState`] to the next state by
//! delegating to the transitions in [`crate::transition`]. The initial state is
//! [`AppState::default()`].

use voting_types::{Action, AppState};

use crate::transition::{advance_round, cast_ballot, initialize};

/// Compute the next state for `action`.
///
/// - `SET_ENTRIES` loads the pool. On a concluded contest it starts over
///   from the empty state, so the old winner is cleared.
/// - `NEXT` decides the current round and draws the next one.
/// - `VOTE` records a ballot in the round in progress; with no round in
///   progress it does nothing.
/// - Unknown actions return the state unchanged.
pub fn dispatch(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::SetEntries { entries } if state.is_concluded() => {
            initialize(&AppState::default(), entries.iter().cloned())
        }
        Action::SetEntries { entries } => initialize(state, entries.iter().cloned()),
        Action::Next => advance_round(state),
        Action::Vote { entry } => match &state.vote {
            Some(round) => AppState {
                entries: state.entries.clone(),
                vote: Some(cast_ballot(round, entry)),
                winner: state.winner.clone(),
            },
            None => state.clone(),
        },
        Action::Unknown => state.clone(),
    }
}

/// Fold a sequence of actions over the initial state.
pub fn replay<'a, I>(actions: I) -> AppState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(AppState::default(), |state, action| dispatch(&state, action))
}
