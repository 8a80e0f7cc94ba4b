//! # voting-core
//!
//! Pure logic for the pairwise voting engine (no I/O, instant tests).
//!
//! This crate implements the single-elimination contest as state transitions:
//! two entries are drawn for a head-to-head vote, ballots are tallied, and the
//! survivor (or both, on a tie) goes back into the pool until one entry is
//! left standing.
//!
//! ## Design Philosophy
//!
//! Every function here is **pure** - it borrows the current state and returns
//! a new one without side effects. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic replay (same actions → same final state)
//! - Snapshots that stay valid after later transitions
//!
//! Serializing dispatches and publishing the resulting states is the job of
//! `voting-server`, which calls [`dispatch`] once per incoming action.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod reducer;
pub mod transition;

pub use reducer::{dispatch, replay};
pub use transition::{advance_round, cast_ballot, initialize};
