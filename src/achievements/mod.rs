//! Achievement system module.
//!
//! Achievement definitions are reference data owned by the store. A player
//! unlocks one when the stat named by its `requirement_type` reaches
//! `requirement_value`.

pub mod data;
pub mod types;

pub use data::default_catalog;
pub use types::{AchievementDefinition, AchievementSummary, UnlockedAchievement};
