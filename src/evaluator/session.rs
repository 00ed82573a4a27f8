//! End-of-game flow: fold the session into stats, settle daily
//! challenges, then evaluate and persist unlocks.

use super::logic::{apply, apply_writes, evaluate_at, stage_completions};
use super::types::{ApplyReport, EvaluationPlan, StagedWrite};
use crate::challenges::{qualifying_challenges, DailyChallenge};
use crate::error::Result;
use crate::stats::{credit_points, record_session, PlayerId, PlayerStats, SessionOutcome};
use crate::store::ProgressStore;
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct SessionReport {
    pub stats: PlayerStats,
    pub completed_challenges: Vec<DailyChallenge>,
    pub bonus_points: u64,
    /// Challenge completions first, then unlocks.
    pub plan: EvaluationPlan,
    pub applied: ApplyReport,
}

/// Evaluate a player's stored progress and persist whatever is new.
pub fn evaluate_player(
    store: &mut dyn ProgressStore,
    player: PlayerId,
    now: DateTime<Utc>,
) -> Result<(EvaluationPlan, ApplyReport)> {
    let snapshot = store.snapshot(player)?;
    let plan = evaluate_at(&snapshot, now);
    let applied = apply(&plan, store);
    Ok((plan, applied))
}

/// Record one finished game and everything it unlocks.
///
/// A challenge's bonus is credited only when its completion row is newly
/// inserted, so a replayed session cannot pay out twice. Stats are saved
/// before evaluation; failing to save them aborts the flow.
pub fn record_and_evaluate(
    store: &mut dyn ProgressStore,
    player: PlayerId,
    outcome: &SessionOutcome,
    now: DateTime<Utc>,
) -> Result<SessionReport> {
    let mut stats = store.load_stats(player)?.unwrap_or_default();
    record_session(&mut stats, outcome);

    let today = now.date_naive();
    let challenges = store.challenges_for(today)?;
    let completed = store.completed_challenges(player)?;
    let qualifying = qualifying_challenges(outcome, today, &challenges, &completed);

    let completion_writes = stage_completions(player, outcome, &qualifying, now);
    let mut applied = apply_writes(player, &completion_writes, store);

    let mut bonus_points = 0;
    let mut completed_challenges = Vec::new();
    for write in applied.inserted() {
        let StagedWrite::Completion(completion) = write else {
            continue;
        };
        if let Some(challenge) = qualifying.iter().find(|c| c.id == completion.challenge_id) {
            bonus_points += challenge.bonus_points;
            completed_challenges.push((*challenge).clone());
        }
    }
    credit_points(&mut stats, bonus_points);
    store.save_stats(player, &stats)?;

    let (mut plan, unlocks) = evaluate_player(store, player, now)?;
    let mut writes = completion_writes;
    writes.append(&mut plan.writes);
    plan.writes = writes;
    applied.extend(unlocks);

    Ok(SessionReport {
        stats,
        completed_challenges,
        bonus_points,
        plan,
        applied,
    })
}
