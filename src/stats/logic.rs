//! Session recording and threshold rules over player stats.

use super::types::{PlayerStats, SessionOutcome, StatField};

/// A `stat >= threshold` predicate. Badges and achievements are both
/// expressed as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRule {
    pub stat: StatField,
    pub threshold: u64,
}

impl StatRule {
    pub const fn new(stat: StatField, threshold: u64) -> Self {
        Self { stat, threshold }
    }

    pub fn holds(&self, stats: &PlayerStats) -> bool {
        stats.get(self.stat) >= self.threshold
    }

    /// Percentage of the way to the threshold, capped at 100.
    pub fn progress(&self, stats: &PlayerStats) -> f64 {
        if self.threshold == 0 {
            return 100.0;
        }
        let current = stats.get(self.stat) as f64;
        (current / self.threshold as f64 * 100.0).min(100.0)
    }
}

/// Fold one finished session into the running totals.
pub fn record_session(stats: &mut PlayerStats, outcome: &SessionOutcome) {
    stats.total_games_played = stats.total_games_played.saturating_add(1);
    stats.total_points = stats.total_points.saturating_add(outcome.score);
    if outcome.won {
        stats.total_wins = stats.total_wins.saturating_add(1);
    }
    stats.highest_streak = stats.highest_streak.max(outcome.streak);
}

/// Credit bonus points (daily challenges) without counting a game.
pub fn credit_points(stats: &mut PlayerStats, points: u64) {
    stats.total_points = stats.total_points.saturating_add(points);
}
