use crate::stats::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rung of the rank ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankThreshold {
    pub name: &'static str,
    pub icon: &'static str,
    pub min_points: u64,
}

/// A rank a player has reached at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRecord {
    #[serde(rename = "user_id")]
    pub player_id: PlayerId,
    pub rank_name: String,
    pub rank_icon: String,
    pub min_points: u64,
    pub achieved_at: DateTime<Utc>,
}

impl RankingRecord {
    pub fn new(player_id: PlayerId, rank: &RankThreshold, achieved_at: DateTime<Utc>) -> Self {
        Self {
            player_id,
            rank_name: rank.name.to_string(),
            rank_icon: rank.icon.to_string(),
            min_points: rank.min_points,
            achieved_at,
        }
    }
}
