//! Application state for the voting engine.
//!
//! [`AppState`] is a plain value. Transitions never mutate a state they were
//! given; they build a new one, so any snapshot handed out earlier stays valid
//! and can be shared between readers without copying.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Entry, VoteError};

/// Running vote counts for the two entries of a round.
///
/// Entries that have not received a ballot are absent and count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<Entry, u64>);

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of ballots cast for `entry` (0 if none).
    pub fn count(&self, entry: &Entry) -> u64 {
        self.0.get(entry).copied().unwrap_or(0)
    }

    /// Return a new tally with one more ballot for `entry`.
    pub fn record(&self, entry: &Entry) -> Self {
        let mut next = self.clone();
        *next.0.entry(entry.clone()).or_insert(0) += 1;
        next
    }

    /// Total ballots across all entries.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of entries with at least one ballot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no ballots have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Entry, u64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (Entry, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of a round, read from its tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No ballot has been cast.
    Untallied,
    /// Both entries have the same count.
    Tied,
    /// One entry has strictly more ballots than the other.
    Decided {
        /// Entry with the higher count.
        winner: Entry,
        /// Entry with the lower count.
        loser: Entry,
    },
}

/// One head-to-head contest between two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Contest-wide round counter, starting at 1.
    pub round: u32,
    /// The two contestants, in draw order.
    pub pair: [Entry; 2],
    /// Ballots cast so far. Absent until the first ballot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tally: Option<Tally>,
}

impl Round {
    /// Create a round with no ballots.
    pub fn new(round: u32, pair: [Entry; 2]) -> Self {
        Self {
            round,
            pair,
            tally: None,
        }
    }

    /// Check if `entry` is one of the contestants.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.pair.contains(entry)
    }

    /// Decide the round from its tally.
    pub fn outcome(&self) -> Outcome {
        let Some(tally) = &self.tally else {
            return Outcome::Untallied;
        };

        let [a, b] = &self.pair;
        let (votes_a, votes_b) = (tally.count(a), tally.count(b));

        if votes_a > votes_b {
            Outcome::Decided {
                winner: a.clone(),
                loser: b.clone(),
            }
        } else if votes_b > votes_a {
            Outcome::Decided {
                winner: b.clone(),
                loser: a.clone(),
            }
        } else {
            Outcome::Tied
        }
    }
}

/// Coarse view of where the contest is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing loaded yet.
    Empty,
    /// Entries loaded, no round drawn.
    Collecting,
    /// A round is in progress.
    Voting,
    /// A winner has been declared.
    Concluded,
}

/// The single value threaded through every transition.
///
/// All fields are optional. Absent fields are omitted from JSON, so a
/// concluded contest serializes as exactly `{"winner": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Pool of entries waiting to be drawn, in pairing order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Entry>>,
    /// The round in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<Round>,
    /// The overall winner, once decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Entry>,
}

impl AppState {
    /// Create the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pool of waiting entries (empty slice if absent).
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_deref().unwrap_or_default()
    }

    /// Where the contest currently is.
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Concluded
        } else if self.vote.is_some() {
            Phase::Voting
        } else if self.entries.is_some() {
            Phase::Collecting
        } else {
            Phase::Empty
        }
    }

    /// Check if a winner has been declared.
    pub fn is_concluded(&self) -> bool {
        self.winner.is_some()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, VoteError> {
        serde_json::to_string(self).map_err(VoteError::Serialization)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, VoteError> {
        serde_json::from_str(json).map_err(VoteError::Deserialization)
    }
}
