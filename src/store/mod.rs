//! Persistence seam for player progress.
//!
//! Every store gives insert-or-ignore semantics on unlock-style rows: the
//! row id is derived from `(player, table, natural key)`, so replaying a
//! write from a second session reports [`WriteOutcome::AlreadyPresent`]
//! instead of creating a duplicate.

pub mod file;
pub mod memory;
pub mod rest;

pub use file::JsonFileStore;
pub use memory::{MemoryStore, StoreState};
pub use rest::RestStore;

use crate::achievements::{AchievementDefinition, UnlockedAchievement};
use crate::badges::EarnedBadge;
use crate::challenges::{ChallengeCompletion, DailyChallenge};
use crate::error::Result;
use crate::evaluator::ProgressSnapshot;
use crate::leaderboard::{leaderboard, LeaderboardEntry};
use crate::ranks::RankingRecord;
use crate::shop::{Inventory, PowerUp};
use crate::stats::{PlayerId, PlayerStats};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Tables of the hosted relational store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    PlayerStats,
    Achievements,
    PlayerAchievements,
    PlayerBadges,
    PlayerRankings,
    DailyChallenges,
    ChallengeCompletions,
    PowerUps,
    PlayerItems,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::PlayerStats => "player_stats",
            Table::Achievements => "achievements",
            Table::PlayerAchievements => "player_achievements",
            Table::PlayerBadges => "player_badges",
            Table::PlayerRankings => "player_rankings",
            Table::DailyChallenges => "daily_challenges",
            Table::ChallengeCompletions => "challenge_completions",
            Table::PowerUps => "power_ups",
            Table::PlayerItems => "player_items",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an insert-or-ignore write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Inserted,
    AlreadyPresent,
}

/// Deterministic row id for a unique `(player, table, key)` triple.
pub fn row_key(player: PlayerId, table: Table, natural_key: &str) -> Uuid {
    let mut hasher = Sha256::new();
    hasher.update(player.as_bytes());
    hasher.update(table.name().as_bytes());
    hasher.update([0u8]);
    hasher.update(natural_key.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes(bytes)
}

/// Read and write access to everything the evaluator needs.
pub trait ProgressStore {
    fn load_stats(&self, player: PlayerId) -> Result<Option<PlayerStats>>;
    fn save_stats(&mut self, player: PlayerId, stats: &PlayerStats) -> Result<()>;
    fn all_stats(&self) -> Result<Vec<(PlayerId, PlayerStats)>>;

    fn achievement_catalog(&self) -> Result<Vec<AchievementDefinition>>;
    fn unlocked_achievements(&self, player: PlayerId) -> Result<BTreeSet<String>>;
    fn held_badges(&self, player: PlayerId) -> Result<BTreeSet<String>>;
    fn held_ranks(&self, player: PlayerId) -> Result<BTreeSet<String>>;

    fn insert_achievement(&mut self, record: &UnlockedAchievement) -> Result<WriteOutcome>;
    fn insert_badge(&mut self, record: &EarnedBadge) -> Result<WriteOutcome>;
    fn insert_ranking(&mut self, record: &RankingRecord) -> Result<WriteOutcome>;

    fn challenges_for(&self, date: NaiveDate) -> Result<Vec<DailyChallenge>>;
    fn completed_challenges(&self, player: PlayerId) -> Result<BTreeSet<String>>;
    fn insert_completion(&mut self, record: &ChallengeCompletion) -> Result<WriteOutcome>;

    fn power_ups(&self) -> Result<Vec<PowerUp>>;
    fn inventory(&self, player: PlayerId) -> Result<Inventory>;
    fn save_inventory(&mut self, player: PlayerId, inventory: &Inventory) -> Result<()>;

    /// The top `limit` players in leaderboard order.
    fn top_players(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        Ok(leaderboard(self.all_stats()?, limit))
    }

    /// Everything [`crate::evaluator::evaluate`] needs for one player.
    /// A player with no stats row evaluates as all zeroes.
    fn snapshot(&self, player: PlayerId) -> Result<ProgressSnapshot> {
        Ok(ProgressSnapshot {
            player_id: player,
            stats: self.load_stats(player)?.unwrap_or_default(),
            catalog: self.achievement_catalog()?,
            unlocked_achievements: self.unlocked_achievements(player)?,
            held_badges: self.held_badges(player)?,
            held_ranks: self.held_ranks(player)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_is_deterministic() {
        let player = Uuid::from_u128(42);
        let a = row_key(player, Table::PlayerBadges, "Veteran");
        let b = row_key(player, Table::PlayerBadges, "Veteran");
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_key_separates_players_tables_and_keys() {
        let p1 = Uuid::from_u128(1);
        let p2 = Uuid::from_u128(2);
        let base = row_key(p1, Table::PlayerBadges, "Veteran");
        assert_ne!(base, row_key(p2, Table::PlayerBadges, "Veteran"));
        assert_ne!(base, row_key(p1, Table::PlayerRankings, "Veteran"));
        assert_ne!(base, row_key(p1, Table::PlayerBadges, "Combo Master"));
    }
}
