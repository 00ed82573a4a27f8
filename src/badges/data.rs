//! Badge rule table.

use super::types::BadgeDef;
use crate::constants::{
    COMBO_MASTER_STREAK_THRESHOLD, FIRST_WIN_THRESHOLD, POINT_COLLECTOR_THRESHOLD,
    VETERAN_GAMES_THRESHOLD,
};
use crate::stats::{StatField, StatRule};

pub const FIRST_WIN: &str = "Kemenangan Pertama";
pub const VETERAN: &str = "Veteran";
pub const COMBO_MASTER: &str = "Combo Master";
pub const POINT_COLLECTOR: &str = "Point Collector";

/// Every badge, in the order grants are staged.
pub const ALL_BADGES: &[BadgeDef] = &[
    BadgeDef {
        name: FIRST_WIN,
        icon: "🎖️",
        description: "Menang pertama kali dalam game",
        rule: StatRule::new(StatField::TotalWins, FIRST_WIN_THRESHOLD),
    },
    BadgeDef {
        name: VETERAN,
        icon: "🏅",
        description: "Bermain 100 game",
        rule: StatRule::new(StatField::TotalGamesPlayed, VETERAN_GAMES_THRESHOLD),
    },
    BadgeDef {
        name: COMBO_MASTER,
        icon: "🔥",
        description: "Mencapai streak 20",
        rule: StatRule::new(StatField::HighestStreak, COMBO_MASTER_STREAK_THRESHOLD),
    },
    BadgeDef {
        name: POINT_COLLECTOR,
        icon: "💰",
        description: "Mengumpulkan 10,000 poin",
        rule: StatRule::new(StatField::TotalPoints, POINT_COLLECTOR_THRESHOLD),
    },
];

pub fn get_badge_def(name: &str) -> Option<&'static BadgeDef> {
    ALL_BADGES.iter().find(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PlayerStats;
    use std::collections::HashSet;

    #[test]
    fn test_badge_names_unique() {
        let names: HashSet<_> = ALL_BADGES.iter().map(|b| b.name).collect();
        assert_eq!(names.len(), ALL_BADGES.len());
    }

    #[test]
    fn test_first_win_badge() {
        let def = get_badge_def(FIRST_WIN).unwrap();
        let mut stats = PlayerStats::default();
        assert!(!def.qualifies(&stats));
        stats.total_wins = 1;
        assert!(def.qualifies(&stats));
        stats.total_wins = 500;
        assert!(def.qualifies(&stats));
    }

    #[test]
    fn test_veteran_badge_at_one_hundred_games() {
        let def = get_badge_def(VETERAN).unwrap();
        let mut stats = PlayerStats {
            total_games_played: 99,
            ..Default::default()
        };
        assert!(!def.qualifies(&stats));
        stats.total_games_played = 100;
        assert!(def.qualifies(&stats));
    }

    #[test]
    fn test_point_collector_uses_total_points() {
        let def = get_badge_def(POINT_COLLECTOR).unwrap();
        let stats = PlayerStats {
            total_points: 10_000,
            ..Default::default()
        };
        assert!(def.qualifies(&stats));
    }
}
