//! Single-file JSON store for offline use.
//!
//! Several processes may share one file. Every read loads the current
//! document, and every write holds an exclusive lock on a sidecar
//! `.lock` file while it re-reads the document, merges its one change and
//! writes the result back. Unlock-style rows merge by [`super::row_key`],
//! so rows written by another process are never dropped.

use super::memory::{MemoryStore, StoreState};
use super::{ProgressStore, WriteOutcome};
use crate::achievements::{AchievementDefinition, UnlockedAchievement};
use crate::badges::EarnedBadge;
use crate::challenges::{ChallengeCompletion, DailyChallenge};
use crate::error::Result;
use crate::ranks::RankingRecord;
use crate::shop::{Inventory, PowerUp};
use crate::stats::{PlayerId, PlayerStats};
use crate::utils::persistence::{load_json, save_json};
use chrono::NaiveDate;
use fs2::FileExt;
use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// A JSON document holding a [`StoreState`].
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open `path`. A missing file reads as a freshly seeded store and is
    /// created on the first change. A file that exists but does not parse
    /// is an error, not a reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        if store.load_state()?.is_none() {
            log::info!("creating new progress file at {}", store.path.display());
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_challenge(&mut self, challenge: DailyChallenge) -> Result<()> {
        self.update(|store| {
            store.add_challenge(challenge);
            Ok(((), true))
        })
    }

    fn load_state(&self) -> Result<Option<StoreState>> {
        load_json::<StoreState>(&self.path)
    }

    /// The document as it is on disk right now.
    fn current(&self) -> Result<MemoryStore> {
        let state = self.load_state()?.unwrap_or_else(StoreState::seeded);
        Ok(MemoryStore::with_state(state))
    }

    fn lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.path.with_extension("json.lock"))?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    /// Apply one change to the latest document under the lock. The change
    /// reports whether anything needs writing back.
    fn update<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut MemoryStore) -> Result<(T, bool)>,
    {
        // Released when dropped.
        let _lock = self.lock()?;
        let mut store = self.current()?;
        let (value, dirty) = change(&mut store)?;
        if dirty {
            save_json(&self.path, store.state())?;
        }
        Ok(value)
    }

    fn insert<F>(&self, insert: F) -> Result<WriteOutcome>
    where
        F: FnOnce(&mut MemoryStore) -> Result<WriteOutcome>,
    {
        self.update(|store| {
            let outcome = insert(store)?;
            Ok((outcome, outcome == WriteOutcome::Inserted))
        })
    }
}

impl ProgressStore for JsonFileStore {
    fn load_stats(&self, player: PlayerId) -> Result<Option<PlayerStats>> {
        self.current()?.load_stats(player)
    }

    fn save_stats(&mut self, player: PlayerId, stats: &PlayerStats) -> Result<()> {
        self.update(|store| Ok((store.save_stats(player, stats)?, true)))
    }

    fn all_stats(&self) -> Result<Vec<(PlayerId, PlayerStats)>> {
        self.current()?.all_stats()
    }

    fn achievement_catalog(&self) -> Result<Vec<AchievementDefinition>> {
        self.current()?.achievement_catalog()
    }

    fn unlocked_achievements(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        self.current()?.unlocked_achievements(player)
    }

    fn held_badges(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        self.current()?.held_badges(player)
    }

    fn held_ranks(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        self.current()?.held_ranks(player)
    }

    fn insert_achievement(&mut self, record: &UnlockedAchievement) -> Result<WriteOutcome> {
        self.insert(|store| store.insert_achievement(record))
    }

    fn insert_badge(&mut self, record: &EarnedBadge) -> Result<WriteOutcome> {
        self.insert(|store| store.insert_badge(record))
    }

    fn insert_ranking(&mut self, record: &RankingRecord) -> Result<WriteOutcome> {
        self.insert(|store| store.insert_ranking(record))
    }

    fn challenges_for(&self, date: NaiveDate) -> Result<Vec<DailyChallenge>> {
        self.current()?.challenges_for(date)
    }

    fn completed_challenges(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        self.current()?.completed_challenges(player)
    }

    fn insert_completion(&mut self, record: &ChallengeCompletion) -> Result<WriteOutcome> {
        self.insert(|store| store.insert_completion(record))
    }

    fn power_ups(&self) -> Result<Vec<PowerUp>> {
        self.current()?.power_ups()
    }

    fn inventory(&self, player: PlayerId) -> Result<Inventory> {
        self.current()?.inventory(player)
    }

    fn save_inventory(&mut self, player: PlayerId, inventory: &Inventory) -> Result<()> {
        self.update(|store| Ok((store.save_inventory(player, inventory)?, true)))
    }
}
