//! Progress simulator.
//!
//! Plays random sessions for many players through the same
//! `record_and_evaluate` flow the CLI uses, to check:
//! - How quickly ranks, badges and achievements unlock
//! - That replaying stale plans never creates duplicate rows

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport, UnlockEvent};
pub use runner::{random_outcome, run_simulation};
