//! Arcade Progress - player progress evaluation library
//!
//! Tracks mini-game statistics per player and works out which ranks,
//! badges, achievements and daily challenges they have earned. Evaluation
//! is pure; persistence sits behind [`store::ProgressStore`].

pub mod achievements;
pub mod badges;
pub mod build_info;
pub mod challenges;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod leaderboard;
pub mod ranks;
pub mod shop;
pub mod simulator;
pub mod stats;
pub mod store;
pub mod utils;

pub use error::{ProgressError, Result};
pub use evaluator::{apply, evaluate, record_and_evaluate, EvaluationPlan, ProgressSnapshot};
pub use stats::{GameType, PlayerId, PlayerStats, SessionOutcome};
pub use store::{ProgressStore, WriteOutcome};
