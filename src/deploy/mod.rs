// ABOUTME: Deployment sequencing: rewindable actions, push strategies, and the put step.
// ABOUTME: Exports the sequencer types and the zero-downtime planner.

mod action;
mod error;
pub mod put;
mod rewind;
mod strategy;
pub mod zero_downtime;

pub use action::{Action, Operation};
pub use error::RewindError;
pub use rewind::{Outcome, Rewind};
pub use strategy::PushStrategy;
