//! Static rank ladder.

use super::types::RankThreshold;

/// All ranks in ascending order of `min_points`. Thresholds are strictly
/// increasing and the first one starts at zero.
pub const RANK_THRESHOLDS: &[RankThreshold] = &[
    RankThreshold {
        name: "Pemula",
        icon: "🥉",
        min_points: 0,
    },
    RankThreshold {
        name: "Perunggu",
        icon: "🥉",
        min_points: 100,
    },
    RankThreshold {
        name: "Perak",
        icon: "🥈",
        min_points: 500,
    },
    RankThreshold {
        name: "Emas",
        icon: "🥇",
        min_points: 1_000,
    },
    RankThreshold {
        name: "Platinum",
        icon: "💎",
        min_points: 2_500,
    },
    RankThreshold {
        name: "Diamond",
        icon: "💠",
        min_points: 5_000,
    },
    RankThreshold {
        name: "Master",
        icon: "👑",
        min_points: 10_000,
    },
    RankThreshold {
        name: "Legend",
        icon: "⭐",
        min_points: 25_000,
    },
];

/// Look up a rank by name.
pub fn get_rank(name: &str) -> Option<&'static RankThreshold> {
    RANK_THRESHOLDS.iter().find(|r| r.name == name)
}
