//! State transitions for the voting contest.
//!
//! Three operations move the contest forward:
//! - [`initialize`] loads the pool of entries
//! - [`advance_round`] decides the current round and draws the next pair
//!   (or declares the winner)
//! - [`cast_ballot`] records one ballot in a round
//!
//! None of them mutate their input.

use voting_types::{AppState, Entry, Outcome, Round, Tally};

/// Replace the pool of entries, keeping every other field.
///
/// Duplicates are allowed and occupy separate slots.
pub fn initialize<I, E>(state: &AppState, entries: I) -> AppState
where
    I: IntoIterator<Item = E>,
    E: Into<Entry>,
{
    AppState {
        entries: Some(entries.into_iter().map(Into::into).collect()),
        vote: state.vote.clone(),
        winner: state.winner.clone(),
    }
}

/// Decide the round in progress and draw the next pair.
///
/// Survivors of the previous round are appended after the waiting entries:
/// the winner alone on a decisive tally, both contestants (in pair order) on
/// a tie or when no ballot was cast.
///
/// A decisive round with no waiting entries ends the contest: the result
/// holds only the winner. If the pool cannot form a pair and there is no
/// decisive round to resolve, the state is returned unchanged.
pub fn advance_round(state: &AppState) -> AppState {
    let waiting = state.entries();
    let mut pool: Vec<Entry> = waiting.to_vec();
    let mut round_number = 1;

    if let Some(round) = &state.vote {
        round_number = round.round.saturating_add(1);

        match round.outcome() {
            Outcome::Decided { winner, .. } => {
                if waiting.is_empty() {
                    return AppState {
                        winner: Some(winner),
                        ..AppState::default()
                    };
                }
                pool.push(winner);
            }
            Outcome::Tied | Outcome::Untallied => pool.extend(round.pair.iter().cloned()),
        }
    }

    let mut pool = pool.into_iter();
    match (pool.next(), pool.next()) {
        (Some(first), Some(second)) => AppState {
            entries: Some(pool.collect()),
            vote: Some(Round::new(round_number, [first, second])),
            winner: state.winner.clone(),
        },
        // Fewer than two entries and nothing to decide
        _ => state.clone(),
    }
}

/// Record one ballot for `entry`.
///
/// Ballots for an entry outside the round's pair are ignored.
pub fn cast_ballot(round: &Round, entry: &Entry) -> Round {
    if !round.contains(entry) {
        return round.clone();
    }

    let tally = match &round.tally {
        Some(tally) => tally.record(entry),
        None => Tally::new().record(entry),
    };

    Round {
        round: round.round,
        pair: round.pair.clone(),
        tally: Some(tally),
    }
}
