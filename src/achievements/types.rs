//! Achievement definitions and unlock records.

use crate::stats::{PlayerId, PlayerStats, StatField, StatRule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference data describing one achievement.
///
/// `requirement_type` names a [`StatField`] column. Definitions come from
/// the store, so an unrecognised column is possible and simply never
/// unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub requirement_type: String,
    pub requirement_value: u64,
    pub points_reward: u64,
}

impl AchievementDefinition {
    /// The rule this definition encodes, if its requirement column is known.
    pub fn rule(&self) -> Option<StatRule> {
        let stat: StatField = self.requirement_type.parse().ok()?;
        Some(StatRule::new(stat, self.requirement_value))
    }

    pub fn qualifies(&self, stats: &PlayerStats) -> bool {
        self.rule().is_some_and(|rule| rule.holds(stats))
    }

    /// Progress toward this achievement (0.0 - 100.0).
    pub fn progress(&self, stats: &PlayerStats) -> f64 {
        self.rule().map_or(0.0, |rule| rule.progress(stats))
    }
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    #[serde(rename = "user_id")]
    pub player_id: PlayerId,
    pub achievement_id: String,
    pub unlocked_at: DateTime<Utc>,
}

/// Unlocked/total counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementSummary {
    pub unlocked: usize,
    pub total: usize,
}

impl AchievementSummary {
    /// Unlock percentage (0.0 - 100.0).
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.unlocked as f32 / self.total as f32) * 100.0
    }
}
