//! Action descriptors for the dispatcher.
//!
//! On the wire an action is a JSON object tagged by its `type` field:
//!
//! ```json
//! {"type": "SET_ENTRIES", "entries": ["Trainspotting", "28 Days Later"]}
//! {"type": "NEXT"}
//! {"type": "VOTE", "entry": "Trainspotting"}
//! ```
//!
//! Any other tag decodes to [`Action::Unknown`], which the dispatcher treats
//! as a no-op.

use serde::{Deserialize, Serialize};

use crate::{Entry, VoteError};

/// All actions understood by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the pool of entries
    SetEntries {
        /// Entries in pairing order
        entries: Vec<Entry>,
    },
    /// Decide the current round and draw the next one
    Next,
    /// Cast one ballot in the current round
    Vote {
        /// The chosen contestant
        entry: Entry,
    },
    /// Any unrecognized tag
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Build a `SET_ENTRIES` action from any sequence of entry-like values.
    pub fn set_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Self::SetEntries {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a `VOTE` action.
    pub fn vote(entry: impl Into<Entry>) -> Self {
        Self::Vote {
            entry: entry.into(),
        }
    }

    /// The wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetEntries { .. } => "SET_ENTRIES",
            Self::Next => "NEXT",
            Self::Vote { .. } => "VOTE",
            Self::Unknown => "UNKNOWN",
        }
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
