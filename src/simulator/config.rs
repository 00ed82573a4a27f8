//! Simulation configuration.

use crate::constants::{SIM_MAX_SCORE, SIM_MAX_STREAK, SIM_WIN_CHANCE};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated players
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Game sessions played by each simulated player
    pub sessions_per_run: u32,

    /// Upper bound (inclusive) on a session's score
    pub max_score: u64,

    /// Upper bound (inclusive) on a session's streak
    pub max_streak: u64,

    /// Probability a session counts as a win
    pub win_chance: f64,

    /// After each session, re-apply the same plan as a second browser tab
    /// holding a stale snapshot would.
    pub replay_stale_plans: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-unlock)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            sessions_per_run: 200,
            max_score: SIM_MAX_SCORE,
            max_streak: SIM_MAX_STREAK,
            win_chance: SIM_WIN_CHANCE,
            replay_stale_plans: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for tests.
    pub fn quick() -> Self {
        Self {
            num_runs: 5,
            seed: Some(42),
            sessions_per_run: 50,
            verbosity: 0,
            ..Default::default()
        }
    }
}
