//! Daily challenges: per-day score targets that pay out bonus points once.

pub mod logic;
pub mod types;

pub use logic::qualifying_challenges;
pub use types::{ChallengeCompletion, DailyChallenge};
