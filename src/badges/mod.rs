//! Badges: one-time flags granted by fixed stat thresholds.

pub mod data;
pub mod types;

pub use data::{get_badge_def, ALL_BADGES};
pub use types::{BadgeDef, EarnedBadge};
