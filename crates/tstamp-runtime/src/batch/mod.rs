//! Batched verify and add-timestamp requests with progress counting.

mod counter;
mod runner;

pub use counter::{BatchCounter, Tally};
pub use runner::{BatchOutcome, BatchRunner};
