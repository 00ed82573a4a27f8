//! Rank ladder. Ranks are derived from `total_points` on every evaluation
//! and recorded the first time they are reached.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_rank, RANK_THRESHOLDS};
pub use logic::{current_rank, next_rank, points_to_next, progress_to_next, rank_index};
pub use types::{RankThreshold, RankingRecord};
