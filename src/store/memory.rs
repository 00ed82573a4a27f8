//! In-process store. Also the backing state for [`super::JsonFileStore`].

use super::{row_key, ProgressStore, Table, WriteOutcome};
use crate::achievements::{default_catalog, AchievementDefinition, UnlockedAchievement};
use crate::badges::EarnedBadge;
use crate::challenges::{ChallengeCompletion, DailyChallenge};
use crate::error::{ProgressError, Result};
use crate::ranks::RankingRecord;
use crate::shop::{default_power_ups, Inventory, PowerUp};
use crate::stats::{PlayerId, PlayerStats};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// All persisted rows. Unlock-style rows are keyed by [`row_key`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreState {
    pub stats: BTreeMap<PlayerId, PlayerStats>,
    pub catalog: Vec<AchievementDefinition>,
    pub achievements: BTreeMap<Uuid, UnlockedAchievement>,
    pub badges: BTreeMap<Uuid, EarnedBadge>,
    pub rankings: BTreeMap<Uuid, RankingRecord>,
    pub challenges: Vec<DailyChallenge>,
    pub completions: BTreeMap<Uuid, ChallengeCompletion>,
    pub power_ups: Vec<PowerUp>,
    pub inventories: BTreeMap<PlayerId, Inventory>,
}

impl StoreState {
    /// State with the built-in achievement and power-up catalogs.
    pub fn seeded() -> Self {
        Self {
            catalog: default_catalog(),
            power_ups: default_power_ups(),
            ..Default::default()
        }
    }
}

fn insert_unique<T>(rows: &mut BTreeMap<Uuid, T>, key: Uuid, record: &T) -> WriteOutcome
where
    T: Clone,
{
    if rows.contains_key(&key) {
        return WriteOutcome::AlreadyPresent;
    }
    rows.insert(key, record.clone());
    WriteOutcome::Inserted
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: StoreState,
    failing: BTreeSet<Table>,
}

impl MemoryStore {
    /// A store seeded with the built-in catalogs.
    pub fn new() -> Self {
        Self::with_state(StoreState::seeded())
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state,
            failing: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StoreState {
        &mut self.state
    }

    pub fn add_challenge(&mut self, challenge: DailyChallenge) {
        self.state.challenges.push(challenge);
    }

    /// Make every subsequent write to `table` fail.
    pub fn fail_writes_to(&mut self, table: Table) {
        self.failing.insert(table);
    }

    pub fn heal(&mut self, table: Table) {
        self.failing.remove(&table);
    }

    fn check_writable(&self, table: Table) -> Result<()> {
        if self.failing.contains(&table) {
            return Err(ProgressError::InjectedFailure(table.name()));
        }
        Ok(())
    }
}

impl ProgressStore for MemoryStore {
    fn load_stats(&self, player: PlayerId) -> Result<Option<PlayerStats>> {
        Ok(self.state.stats.get(&player).copied())
    }

    fn save_stats(&mut self, player: PlayerId, stats: &PlayerStats) -> Result<()> {
        self.check_writable(Table::PlayerStats)?;
        self.state.stats.insert(player, *stats);
        Ok(())
    }

    fn all_stats(&self) -> Result<Vec<(PlayerId, PlayerStats)>> {
        Ok(self.state.stats.iter().map(|(id, s)| (*id, *s)).collect())
    }

    fn achievement_catalog(&self) -> Result<Vec<AchievementDefinition>> {
        let mut catalog = self.state.catalog.clone();
        catalog.sort_by_key(|a| a.requirement_value);
        Ok(catalog)
    }

    fn unlocked_achievements(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        Ok(self
            .state
            .achievements
            .values()
            .filter(|r| r.player_id == player)
            .map(|r| r.achievement_id.clone())
            .collect())
    }

    fn held_badges(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        Ok(self
            .state
            .badges
            .values()
            .filter(|r| r.player_id == player)
            .map(|r| r.badge_name.clone())
            .collect())
    }

    fn held_ranks(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        Ok(self
            .state
            .rankings
            .values()
            .filter(|r| r.player_id == player)
            .map(|r| r.rank_name.clone())
            .collect())
    }

    fn insert_achievement(&mut self, record: &UnlockedAchievement) -> Result<WriteOutcome> {
        self.check_writable(Table::PlayerAchievements)?;
        let key = row_key(record.player_id, Table::PlayerAchievements, &record.achievement_id);
        Ok(insert_unique(&mut self.state.achievements, key, record))
    }

    fn insert_badge(&mut self, record: &EarnedBadge) -> Result<WriteOutcome> {
        self.check_writable(Table::PlayerBadges)?;
        let key = row_key(record.player_id, Table::PlayerBadges, &record.badge_name);
        Ok(insert_unique(&mut self.state.badges, key, record))
    }

    fn insert_ranking(&mut self, record: &RankingRecord) -> Result<WriteOutcome> {
        self.check_writable(Table::PlayerRankings)?;
        let key = row_key(record.player_id, Table::PlayerRankings, &record.rank_name);
        Ok(insert_unique(&mut self.state.rankings, key, record))
    }

    fn challenges_for(&self, date: NaiveDate) -> Result<Vec<DailyChallenge>> {
        Ok(self
            .state
            .challenges
            .iter()
            .filter(|c| c.challenge_date == date)
            .cloned()
            .collect())
    }

    fn completed_challenges(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        Ok(self
            .state
            .completions
            .values()
            .filter(|c| c.player_id == player)
            .map(|c| c.challenge_id.clone())
            .collect())
    }

    fn insert_completion(&mut self, record: &ChallengeCompletion) -> Result<WriteOutcome> {
        self.check_writable(Table::ChallengeCompletions)?;
        let key = row_key(record.player_id, Table::ChallengeCompletions, &record.challenge_id);
        Ok(insert_unique(&mut self.state.completions, key, record))
    }

    fn power_ups(&self) -> Result<Vec<PowerUp>> {
        let mut power_ups = self.state.power_ups.clone();
        power_ups.sort_by_key(|p| p.cost);
        Ok(power_ups)
    }

    fn inventory(&self, player: PlayerId) -> Result<Inventory> {
        Ok(self.state.inventories.get(&player).cloned().unwrap_or_default())
    }

    fn save_inventory(&mut self, player: PlayerId, inventory: &Inventory) -> Result<()> {
        self.check_writable(Table::PlayerItems)?;
        self.state.inventories.insert(player, inventory.clone());
        Ok(())
    }
}
