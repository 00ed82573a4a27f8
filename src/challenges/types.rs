use crate::stats::{GameType, PlayerId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A per-day scoring target for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: String,
    pub challenge_date: NaiveDate,
    pub game_type: GameType,
    pub title: String,
    pub description: String,
    pub target_score: u64,
    pub bonus_points: u64,
}

/// A player's completion of a daily challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeCompletion {
    #[serde(rename = "user_id")]
    pub player_id: PlayerId,
    pub challenge_id: String,
    pub score_achieved: u64,
    pub completed_at: DateTime<Utc>,
}
