//! Built-in achievement catalog.
//!
//! The hosted store keeps its own `achievements` table; this catalog seeds
//! the local stores so they behave the same way out of the box.

use super::types::AchievementDefinition;

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    requirement_type: &'static str,
    requirement_value: u64,
    points_reward: u64,
}

const SEEDS: &[Seed] = &[
    // ═══════════════════════════════════════════════════════════════
    // GAMES PLAYED
    // ═══════════════════════════════════════════════════════════════
    Seed {
        id: "first-game",
        title: "Langkah Pertama",
        description: "Mainkan game pertamamu",
        icon: "🎮",
        requirement_type: "total_games_played",
        requirement_value: 1,
        points_reward: 10,
    },
    Seed {
        id: "games-10",
        title: "Rajin Bermain",
        description: "Mainkan 10 game",
        icon: "🕹️",
        requirement_type: "total_games_played",
        requirement_value: 10,
        points_reward: 50,
    },
    Seed {
        id: "games-50",
        title: "Pemain Setia",
        description: "Mainkan 50 game",
        icon: "🎲",
        requirement_type: "total_games_played",
        requirement_value: 50,
        points_reward: 200,
    },
    // ═══════════════════════════════════════════════════════════════
    // WINS
    // ═══════════════════════════════════════════════════════════════
    Seed {
        id: "wins-10",
        title: "Juara Kecil",
        description: "Menang 10 kali",
        icon: "🏆",
        requirement_type: "total_wins",
        requirement_value: 10,
        points_reward: 100,
    },
    Seed {
        id: "wins-50",
        title: "Juara Sejati",
        description: "Menang 50 kali",
        icon: "🏆",
        requirement_type: "total_wins",
        requirement_value: 50,
        points_reward: 500,
    },
    // ═══════════════════════════════════════════════════════════════
    // POINTS
    // ═══════════════════════════════════════════════════════════════
    Seed {
        id: "points-1000",
        title: "Seribu Poin",
        description: "Kumpulkan 1,000 poin",
        icon: "💯",
        requirement_type: "total_points",
        requirement_value: 1_000,
        points_reward: 100,
    },
    Seed {
        id: "points-5000",
        title: "Kolektor Poin",
        description: "Kumpulkan 5,000 poin",
        icon: "💎",
        requirement_type: "total_points",
        requirement_value: 5_000,
        points_reward: 250,
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAKS
    // ═══════════════════════════════════════════════════════════════
    Seed {
        id: "streak-10",
        title: "Beruntun",
        description: "Capai streak 10",
        icon: "⚡",
        requirement_type: "highest_streak",
        requirement_value: 10,
        points_reward: 75,
    },
];

/// The built-in catalog, ordered by `requirement_value` within each group.
pub fn default_catalog() -> Vec<AchievementDefinition> {
    SEEDS
        .iter()
        .map(|seed| AchievementDefinition {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            icon: seed.icon.to_string(),
            requirement_type: seed.requirement_type.to_string(),
            requirement_value: seed.requirement_value,
            points_reward: seed.points_reward,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_seed_has_a_known_rule() {
        for def in default_catalog() {
            assert!(def.rule().is_some(), "{} has unknown requirement", def.id);
        }
    }
}
