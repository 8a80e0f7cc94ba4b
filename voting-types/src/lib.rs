//! # voting-types
//!
//! State and action types for the pairwise voting engine.
//!
//! This crate provides the values threaded through every transition:
//! - [`Entry`] - An opaque candidate identifier
//! - [`Round`], [`Tally`] - One head-to-head contest and its running counts
//! - [`AppState`] - The whole application state
//! - [`Action`] - The descriptor consumed by the dispatcher
//! - [`VoteError`] - Error types for the JSON wire format

#![warn(missing_docs)]
#![warn(clippy::all)]

mod action;
mod entry;
mod error;
mod state;

pub use action::Action;
pub use entry::Entry;
pub use error::VoteError;
pub use state::{AppState, Outcome, Phase, Round, Tally};
