//! Blocking client for the hosted store's REST interface.
//!
//! Filters use the `column=eq.value` convention. Unlock-style inserts carry
//! the deterministic [`row_key`] as `id` and ask the server to ignore
//! primary-key conflicts, so replays never create duplicate rows.

use super::{row_key, ProgressStore, Table, WriteOutcome};
use crate::achievements::{AchievementDefinition, UnlockedAchievement};
use crate::badges::EarnedBadge;
use crate::challenges::{ChallengeCompletion, DailyChallenge};
use crate::error::{ProgressError, Result};
use crate::leaderboard::{leaderboard, LeaderboardEntry};
use crate::ranks::RankingRecord;
use crate::shop::{Inventory, PowerUp};
use crate::stats::{PlayerId, PlayerStats};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct StatsRow {
    user_id: PlayerId,
    #[serde(flatten)]
    stats: PlayerStats,
}

#[derive(Serialize)]
struct StatsUpsert<'a> {
    user_id: PlayerId,
    #[serde(flatten)]
    stats: &'a PlayerStats,
    updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct Keyed<'a, T> {
    id: Uuid,
    #[serde(flatten)]
    row: &'a T,
}

#[derive(Deserialize)]
struct AchievementIdRow {
    achievement_id: String,
}

#[derive(Deserialize)]
struct BadgeNameRow {
    badge_name: String,
}

#[derive(Deserialize)]
struct RankNameRow {
    rank_name: String,
}

#[derive(Deserialize)]
struct ChallengeIdRow {
    challenge_id: String,
}

#[derive(Serialize, Deserialize)]
struct PlayerItemRow {
    #[serde(default, skip_deserializing)]
    user_id: Option<PlayerId>,
    power_up_id: String,
    quantity: u32,
}

pub struct RestStore {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.name())
    }

    fn authed(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Accept", "application/json")
    }

    fn select<T: DeserializeOwned>(
        &self,
        table: Table,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut request = self.authed(self.agent.get(&self.table_url(table)));
        for (key, value) in query {
            request = request.query(key, value);
        }
        log::debug!("GET {} {:?}", table, query);
        let rows: Vec<T> = request.call()?.into_json()?;
        Ok(rows)
    }

    /// Insert one row keyed by `id`, ignoring an existing row with that id.
    fn insert_ignoring_duplicates<T: Serialize>(
        &self,
        table: Table,
        id: Uuid,
        row: &T,
    ) -> Result<WriteOutcome> {
        let request = self
            .authed(self.agent.post(&self.table_url(table)))
            .query("on_conflict", "id")
            .set("Prefer", "resolution=ignore-duplicates,return=representation");

        match request.send_json(Keyed { id, row }) {
            Ok(response) => {
                let returned: Vec<serde_json::Value> = response.into_json()?;
                if returned.is_empty() {
                    Ok(WriteOutcome::AlreadyPresent)
                } else {
                    Ok(WriteOutcome::Inserted)
                }
            }
            Err(ureq::Error::Status(409, _)) => Ok(WriteOutcome::AlreadyPresent),
            Err(err) => Err(err.into()),
        }
    }

    /// Insert or overwrite rows matching `on_conflict`.
    fn upsert<T: Serialize>(&self, table: Table, on_conflict: &str, row: &T) -> Result<()> {
        self.authed(self.agent.post(&self.table_url(table)))
            .query("on_conflict", on_conflict)
            .set("Prefer", "resolution=merge-duplicates,return=minimal")
            .send_json(row)?;
        Ok(())
    }
}

fn eq(value: impl ToString) -> String {
    format!("eq.{}", value.to_string())
}

/// Leaderboard ordering and limit, applied server-side.
fn top_players_query(limit: usize) -> Vec<(&'static str, String)> {
    vec![
        ("select", "*".to_string()),
        ("order", "total_points.desc,total_wins.desc,user_id.asc".to_string()),
        ("limit", limit.to_string()),
    ]
}

impl ProgressStore for RestStore {
    fn load_stats(&self, player: PlayerId) -> Result<Option<PlayerStats>> {
        let rows: Vec<StatsRow> = self.select(
            Table::PlayerStats,
            &[("select", "*".to_string()), ("user_id", eq(player))],
        )?;
        Ok(rows.into_iter().next().map(|row| row.stats))
    }

    fn save_stats(&mut self, player: PlayerId, stats: &PlayerStats) -> Result<()> {
        let row = StatsUpsert {
            user_id: player,
            stats,
            updated_at: Utc::now(),
        };
        self.upsert(Table::PlayerStats, "user_id", &row)
    }

    fn all_stats(&self) -> Result<Vec<(PlayerId, PlayerStats)>> {
        let rows: Vec<StatsRow> = self.select(
            Table::PlayerStats,
            &[
                ("select", "*".to_string()),
                ("order", "total_points.desc".to_string()),
            ],
        )?;
        Ok(rows.into_iter().map(|row| (row.user_id, row.stats)).collect())
    }

    fn top_players(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let rows: Vec<StatsRow> = self.select(Table::PlayerStats, &top_players_query(limit))?;
        let rows = rows.into_iter().map(|row| (row.user_id, row.stats)).collect();
        Ok(leaderboard(rows, limit))
    }

    fn achievement_catalog(&self) -> Result<Vec<AchievementDefinition>> {
        self.select(
            Table::Achievements,
            &[
                ("select", "*".to_string()),
                ("order", "requirement_value.asc".to_string()),
            ],
        )
    }

    fn unlocked_achievements(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        let rows: Vec<AchievementIdRow> = self.select(
            Table::PlayerAchievements,
            &[("select", "achievement_id".to_string()), ("user_id", eq(player))],
        )?;
        Ok(rows.into_iter().map(|r| r.achievement_id).collect())
    }

    fn held_badges(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        let rows: Vec<BadgeNameRow> = self.select(
            Table::PlayerBadges,
            &[("select", "badge_name".to_string()), ("user_id", eq(player))],
        )?;
        Ok(rows.into_iter().map(|r| r.badge_name).collect())
    }

    fn held_ranks(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        let rows: Vec<RankNameRow> = self.select(
            Table::PlayerRankings,
            &[("select", "rank_name".to_string()), ("user_id", eq(player))],
        )?;
        Ok(rows.into_iter().map(|r| r.rank_name).collect())
    }

    fn insert_achievement(&mut self, record: &UnlockedAchievement) -> Result<WriteOutcome> {
        let id = row_key(record.player_id, Table::PlayerAchievements, &record.achievement_id);
        self.insert_ignoring_duplicates(Table::PlayerAchievements, id, record)
    }

    fn insert_badge(&mut self, record: &EarnedBadge) -> Result<WriteOutcome> {
        let id = row_key(record.player_id, Table::PlayerBadges, &record.badge_name);
        self.insert_ignoring_duplicates(Table::PlayerBadges, id, record)
    }

    fn insert_ranking(&mut self, record: &RankingRecord) -> Result<WriteOutcome> {
        let id = row_key(record.player_id, Table::PlayerRankings, &record.rank_name);
        self.insert_ignoring_duplicates(Table::PlayerRankings, id, record)
    }

    fn challenges_for(&self, date: NaiveDate) -> Result<Vec<DailyChallenge>> {
        self.select(
            Table::DailyChallenges,
            &[
                ("select", "*".to_string()),
                ("challenge_date", eq(date.format("%Y-%m-%d"))),
            ],
        )
    }

    fn completed_challenges(&self, player: PlayerId) -> Result<BTreeSet<String>> {
        let rows: Vec<ChallengeIdRow> = self.select(
            Table::ChallengeCompletions,
            &[("select", "challenge_id".to_string()), ("user_id", eq(player))],
        )?;
        Ok(rows.into_iter().map(|r| r.challenge_id).collect())
    }

    fn insert_completion(&mut self, record: &ChallengeCompletion) -> Result<WriteOutcome> {
        let id = row_key(record.player_id, Table::ChallengeCompletions, &record.challenge_id);
        self.insert_ignoring_duplicates(Table::ChallengeCompletions, id, record)
    }

    fn power_ups(&self) -> Result<Vec<PowerUp>> {
        self.select(
            Table::PowerUps,
            &[("select", "*".to_string()), ("order", "cost.asc".to_string())],
        )
    }

    fn inventory(&self, player: PlayerId) -> Result<Inventory> {
        let rows: Vec<PlayerItemRow> = self.select(
            Table::PlayerItems,
            &[
                ("select", "power_up_id,quantity".to_string()),
                ("user_id", eq(player)),
            ],
        )?;
        Ok(Inventory {
            items: rows.into_iter().map(|r| (r.power_up_id, r.quantity)).collect(),
        })
    }

    fn save_inventory(&mut self, player: PlayerId, inventory: &Inventory) -> Result<()> {
        for (power_up_id, quantity) in &inventory.items {
            let row = PlayerItemRow {
                user_id: Some(player),
                power_up_id: power_up_id.clone(),
                quantity: *quantity,
            };
            self.upsert(Table::PlayerItems, "user_id,power_up_id", &row)
                .map_err(|err| match err {
                    ProgressError::Http { status, body } => ProgressError::Http {
                        status,
                        body: format!("saving {}: {}", power_up_id, body),
                    },
                    other => other,
                })?;
        }
        Ok(())
    }
}
