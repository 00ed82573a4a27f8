//! Player statistics and session outcomes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Players are identified by the auth service's user id.
pub type PlayerId = uuid::Uuid;

/// A counter on [`PlayerStats`] that rules can compare against.
///
/// The string form matches the column names used by the hosted tables and
/// by `requirement_type` in achievement definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    TotalGamesPlayed,
    TotalPoints,
    TotalWins,
    HighestStreak,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::TotalGamesPlayed,
        StatField::TotalPoints,
        StatField::TotalWins,
        StatField::HighestStreak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::TotalGamesPlayed => "total_games_played",
            StatField::TotalPoints => "total_points",
            StatField::TotalWins => "total_wins",
            StatField::HighestStreak => "highest_streak",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown stat field '{}'", s))
    }
}

/// Cumulative counters for one player across all game sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_games_played: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_points: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_wins: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub highest_streak: u64,
}

impl PlayerStats {
    pub fn get(&self, field: StatField) -> u64 {
        match field {
            StatField::TotalGamesPlayed => self.total_games_played,
            StatField::TotalPoints => self.total_points,
            StatField::TotalWins => self.total_wins,
            StatField::HighestStreak => self.highest_streak,
        }
    }
}

/// The hosted tables leave counters nullable; a null counter is zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Which mini-game produced a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    BrainRush,
    PatternMaster,
    WordSprint,
    QuickMath,
    NatoAlphabet,
}

impl GameType {
    pub const ALL: [GameType; 5] = [
        GameType::BrainRush,
        GameType::PatternMaster,
        GameType::WordSprint,
        GameType::QuickMath,
        GameType::NatoAlphabet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::BrainRush => "brain_rush",
            GameType::PatternMaster => "pattern_master",
            GameType::WordSprint => "word_sprint",
            GameType::QuickMath => "quick_math",
            GameType::NatoAlphabet => "nato_alphabet",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GameType::BrainRush => "🧠",
            GameType::PatternMaster => "🎯",
            GameType::WordSprint => "📝",
            GameType::QuickMath => "➗",
            GameType::NatoAlphabet => "📻",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameType::ALL
            .iter()
            .copied()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| format!("unknown game type '{}'", s))
    }
}

/// Result of one finished game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub game: GameType,
    pub score: u64,
    pub streak: u64,
    pub won: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_field_round_trips_through_column_name() {
        for field in StatField::ALL {
            assert_eq!(field.as_str().parse::<StatField>(), Ok(field));
        }
        assert!("total_losses".parse::<StatField>().is_err());
    }

    #[test]
    fn test_null_counters_deserialize_as_zero() {
        let json = r#"{"total_games_played": 3, "total_points": null, "total_wins": null}"#;
        let stats: PlayerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_games_played, 3);
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.highest_streak, 0);
    }

    #[test]
    fn test_get_reads_matching_counter() {
        let stats = PlayerStats {
            total_games_played: 1,
            total_points: 2,
            total_wins: 3,
            highest_streak: 4,
        };
        assert_eq!(stats.get(StatField::TotalGamesPlayed), 1);
        assert_eq!(stats.get(StatField::TotalPoints), 2);
        assert_eq!(stats.get(StatField::TotalWins), 3);
        assert_eq!(stats.get(StatField::HighestStreak), 4);
    }

    #[test]
    fn test_game_type_serializes_snake_case() {
        let json = serde_json::to_string(&GameType::PatternMaster).unwrap();
        assert_eq!(json, "\"pattern_master\"");
        assert_eq!("word_sprint".parse::<GameType>(), Ok(GameType::WordSprint));
    }
}
