//! Progress evaluator.
//!
//! Evaluation is a pure function over a [`ProgressSnapshot`]; persistence
//! goes through [`crate::store::ProgressStore`] in a separate step.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::{apply, apply_write, apply_writes, evaluate, evaluate_at, stage_completions};
pub use session::{evaluate_player, record_and_evaluate, SessionReport};
pub use types::{ApplyReport, EvaluationPlan, ProgressSnapshot, StagedWrite};
