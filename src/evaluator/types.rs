use crate::achievements::{AchievementDefinition, UnlockedAchievement};
use crate::badges::EarnedBadge;
use crate::challenges::ChallengeCompletion;
use crate::error::ProgressError;
use crate::ranks::{RankThreshold, RankingRecord};
use crate::stats::{PlayerId, PlayerStats};
use crate::store::{Table, WriteOutcome};
use std::collections::BTreeSet;
use std::fmt;

/// Immutable view of one player's progress at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub player_id: PlayerId,
    pub stats: PlayerStats,
    pub catalog: Vec<AchievementDefinition>,
    pub unlocked_achievements: BTreeSet<String>,
    pub held_badges: BTreeSet<String>,
    pub held_ranks: BTreeSet<String>,
}

impl ProgressSnapshot {
    /// A snapshot with nothing unlocked yet.
    pub fn fresh(
        player_id: PlayerId,
        stats: PlayerStats,
        catalog: Vec<AchievementDefinition>,
    ) -> Self {
        Self {
            player_id,
            stats,
            catalog,
            unlocked_achievements: BTreeSet::new(),
            held_badges: BTreeSet::new(),
            held_ranks: BTreeSet::new(),
        }
    }
}

/// A row the evaluator wants persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedWrite {
    Achievement(UnlockedAchievement),
    Badge(EarnedBadge),
    Ranking(RankingRecord),
    Completion(ChallengeCompletion),
}

impl StagedWrite {
    pub fn table(&self) -> Table {
        match self {
            StagedWrite::Achievement(_) => Table::PlayerAchievements,
            StagedWrite::Badge(_) => Table::PlayerBadges,
            StagedWrite::Ranking(_) => Table::PlayerRankings,
            StagedWrite::Completion(_) => Table::ChallengeCompletions,
        }
    }

    /// The natural key of the row: achievement id, badge or rank name.
    pub fn key(&self) -> &str {
        match self {
            StagedWrite::Achievement(r) => &r.achievement_id,
            StagedWrite::Badge(r) => &r.badge_name,
            StagedWrite::Ranking(r) => &r.rank_name,
            StagedWrite::Completion(r) => &r.challenge_id,
        }
    }
}

impl fmt::Display for StagedWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StagedWrite::Achievement(r) => write!(f, "achievement {}", r.achievement_id),
            StagedWrite::Badge(r) => write!(f, "badge {} {}", r.badge_icon, r.badge_name),
            StagedWrite::Ranking(r) => write!(f, "rank {} {}", r.rank_icon, r.rank_name),
            StagedWrite::Completion(r) => write!(f, "challenge {}", r.challenge_id),
        }
    }
}

/// Output of a pure evaluation: the current rank and the writes to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationPlan {
    pub player_id: PlayerId,
    pub rank: &'static RankThreshold,
    pub writes: Vec<StagedWrite>,
}

impl EvaluationPlan {
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn count(&self, table: Table) -> usize {
        self.writes.iter().filter(|w| w.table() == table).count()
    }
}

/// What happened to each staged write. Failed writes are not retried.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub applied: Vec<(StagedWrite, WriteOutcome)>,
    pub failed: Vec<(StagedWrite, ProgressError)>,
}

impl ApplyReport {
    /// Writes that created a new row.
    pub fn inserted(&self) -> impl Iterator<Item = &StagedWrite> {
        self.applied
            .iter()
            .filter(|(_, outcome)| *outcome == WriteOutcome::Inserted)
            .map(|(write, _)| write)
    }

    pub fn already_present(&self) -> usize {
        self.applied
            .iter()
            .filter(|(_, outcome)| *outcome == WriteOutcome::AlreadyPresent)
            .count()
    }

    /// Append another report's results after this one's.
    pub fn extend(&mut self, other: ApplyReport) {
        self.applied.extend(other.applied);
        self.failed.extend(other.failed);
    }

    /// True when no write failed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
