use super::types::DailyChallenge;
use crate::stats::SessionOutcome;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Challenges a session satisfies that the player has not completed yet.
///
/// A challenge qualifies when it is scheduled for `date`, targets the
/// session's game and `score >= target_score`.
pub fn qualifying_challenges<'a>(
    outcome: &SessionOutcome,
    date: NaiveDate,
    challenges: &'a [DailyChallenge],
    completed: &BTreeSet<String>,
) -> Vec<&'a DailyChallenge> {
    challenges
        .iter()
        .filter(|c| c.challenge_date == date)
        .filter(|c| c.game_type == outcome.game)
        .filter(|c| outcome.score >= c.target_score)
        .filter(|c| !completed.contains(&c.id))
        .collect()
}
