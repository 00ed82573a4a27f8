use crate::stats::{PlayerId, PlayerStats, StatRule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static definition of a badge and the rule that grants it.
#[derive(Debug, Clone, Copy)]
pub struct BadgeDef {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub rule: StatRule,
}

impl BadgeDef {
    pub fn qualifies(&self, stats: &PlayerStats) -> bool {
        self.rule.holds(stats)
    }
}

/// A badge held by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedBadge {
    #[serde(rename = "user_id")]
    pub player_id: PlayerId,
    pub badge_name: String,
    pub badge_icon: String,
    pub badge_description: String,
    pub earned_at: DateTime<Utc>,
}

impl EarnedBadge {
    pub fn new(player_id: PlayerId, def: &BadgeDef, earned_at: DateTime<Utc>) -> Self {
        Self {
            player_id,
            badge_name: def.name.to_string(),
            badge_icon: def.icon.to_string(),
            badge_description: def.description.to_string(),
            earned_at,
        }
    }
}
