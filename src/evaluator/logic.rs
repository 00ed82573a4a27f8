//! Rule evaluation and write application.

use super::types::{ApplyReport, EvaluationPlan, ProgressSnapshot, StagedWrite};
use crate::achievements::UnlockedAchievement;
use crate::badges::{EarnedBadge, ALL_BADGES};
use crate::challenges::{ChallengeCompletion, DailyChallenge};
use crate::error::Result;
use crate::ranks::{current_rank, RankingRecord};
use crate::stats::{PlayerId, SessionOutcome};
use crate::store::{ProgressStore, WriteOutcome};
use chrono::{DateTime, Utc};

/// Evaluate a snapshot, timestamping staged rows with the current time.
pub fn evaluate(snapshot: &ProgressSnapshot) -> EvaluationPlan {
    evaluate_at(snapshot, Utc::now())
}

/// Stage every achievement, badge and rank the stats qualify for that the
/// snapshot does not already hold. Pure: the same snapshot and `now`
/// always produce the same plan.
pub fn evaluate_at(snapshot: &ProgressSnapshot, now: DateTime<Utc>) -> EvaluationPlan {
    let player = snapshot.player_id;
    let stats = &snapshot.stats;
    let mut writes = Vec::new();

    for def in &snapshot.catalog {
        let Some(rule) = def.rule() else {
            log::debug!(
                "achievement {} has unknown requirement '{}'",
                def.id,
                def.requirement_type
            );
            continue;
        };
        if rule.holds(stats) && !snapshot.unlocked_achievements.contains(&def.id) {
            writes.push(StagedWrite::Achievement(UnlockedAchievement {
                player_id: player,
                achievement_id: def.id.clone(),
                unlocked_at: now,
            }));
        }
    }

    for badge in ALL_BADGES {
        if badge.qualifies(stats) && !snapshot.held_badges.contains(badge.name) {
            writes.push(StagedWrite::Badge(EarnedBadge::new(player, badge, now)));
        }
    }

    let rank = current_rank(stats.total_points);
    if !snapshot.held_ranks.contains(rank.name) {
        writes.push(StagedWrite::Ranking(RankingRecord::new(player, rank, now)));
    }

    for write in &writes {
        log::debug!("staged {} for {}", write, player);
    }

    EvaluationPlan {
        player_id: player,
        rank,
        writes,
    }
}

/// Stage a completion row for each challenge the session satisfied.
pub fn stage_completions(
    player: PlayerId,
    outcome: &SessionOutcome,
    challenges: &[&DailyChallenge],
    now: DateTime<Utc>,
) -> Vec<StagedWrite> {
    challenges
        .iter()
        .map(|challenge| {
            StagedWrite::Completion(ChallengeCompletion {
                player_id: player,
                challenge_id: challenge.id.clone(),
                score_achieved: outcome.score,
                completed_at: now,
            })
        })
        .collect()
}

/// Issue one staged write.
pub fn apply_write(store: &mut dyn ProgressStore, write: &StagedWrite) -> Result<WriteOutcome> {
    match write {
        StagedWrite::Achievement(record) => store.insert_achievement(record),
        StagedWrite::Badge(record) => store.insert_badge(record),
        StagedWrite::Ranking(record) => store.insert_ranking(record),
        StagedWrite::Completion(record) => store.insert_completion(record),
    }
}

/// Issue `writes` in order. A failed write is logged and recorded and the
/// remaining writes still go out.
pub fn apply_writes(
    player: PlayerId,
    writes: &[StagedWrite],
    store: &mut dyn ProgressStore,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for write in writes {
        match apply_write(store, write) {
            Ok(outcome) => {
                match outcome {
                    WriteOutcome::Inserted => log::info!("{} earned {}", player, write),
                    WriteOutcome::AlreadyPresent => {
                        log::debug!("{} already held {}", player, write)
                    }
                }
                report.applied.push((write.clone(), outcome));
            }
            Err(err) => {
                log::warn!("could not record {} for {}: {}", write, player, err);
                report.failed.push((write.clone(), err));
            }
        }
    }

    report
}

/// Issue a plan's writes. See [`apply_writes`].
pub fn apply(plan: &EvaluationPlan, store: &mut dyn ProgressStore) -> ApplyReport {
    apply_writes(plan.player_id, &plan.writes, store)
}
