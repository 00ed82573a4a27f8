//! Point leaderboard across all players.

use crate::ranks::{current_rank, RankThreshold};
use crate::stats::{PlayerId, PlayerStats};
use std::cmp::Reverse;

/// One leaderboard row. `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub position: usize,
    pub player_id: PlayerId,
    pub stats: PlayerStats,
}

impl LeaderboardEntry {
    pub fn rank(&self) -> &'static RankThreshold {
        current_rank(self.stats.total_points)
    }
}

/// Order players by points (then wins, then id) and keep the top `limit`.
pub fn leaderboard(mut rows: Vec<(PlayerId, PlayerStats)>, limit: usize) -> Vec<LeaderboardEntry> {
    rows.sort_by_key(|(id, stats)| (Reverse(stats.total_points), Reverse(stats.total_wins), *id));
    rows.into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (player_id, stats))| LeaderboardEntry {
            position: i + 1,
            player_id,
            stats,
        })
        .collect()
}
