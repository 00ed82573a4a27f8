//! Per-player aggregate counters and the session outcomes that feed them.

pub mod logic;
pub mod types;

pub use logic::{credit_points, record_session, StatRule};
pub use types::{GameType, PlayerId, PlayerStats, SessionOutcome, StatField};
