//! Simulation report generation.

use crate::ranks::RANK_THRESHOLDS;
use crate::stats::{PlayerId, PlayerStats};
use std::collections::BTreeMap;
use std::fmt::Write;

/// An item newly inserted during a given session (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockEvent {
    pub session: u32,
    pub label: String,
}

/// Everything tracked for one simulated player.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub player_id: PlayerId,
    pub final_stats: PlayerStats,
    pub final_rank: &'static str,
    pub unlocks: Vec<UnlockEvent>,
    pub bonus_points: u64,
    pub duplicates_prevented: u64,
}

impl RunStats {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            final_stats: PlayerStats::default(),
            final_rank: RANK_THRESHOLDS[0].name,
            unlocks: Vec::new(),
            bonus_points: 0,
            duplicates_prevented: 0,
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_final_points: f64,
    pub avg_unlocks: f64,
    pub total_duplicates_prevented: u64,

    /// How many runs finished at each rank
    pub rank_distribution: BTreeMap<&'static str, u32>,

    /// Average session at which each item was first unlocked, with the
    /// number of runs that unlocked it
    pub avg_unlock_session: BTreeMap<String, (f64, u32)>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let avg_final_points = runs
            .iter()
            .map(|r| r.final_stats.total_points as f64)
            .sum::<f64>()
            / divisor;
        let avg_unlocks = runs.iter().map(|r| r.unlocks.len() as f64).sum::<f64>() / divisor;
        let total_duplicates_prevented = runs.iter().map(|r| r.duplicates_prevented).sum();

        let mut rank_distribution = BTreeMap::new();
        for run in &runs {
            *rank_distribution.entry(run.final_rank).or_insert(0) += 1;
        }

        let mut sums: BTreeMap<String, (u64, u32)> = BTreeMap::new();
        for run in &runs {
            for unlock in &run.unlocks {
                let entry = sums.entry(unlock.label.clone()).or_insert((0, 0));
                entry.0 += unlock.session as u64;
                entry.1 += 1;
            }
        }
        let avg_unlock_session = sums
            .into_iter()
            .map(|(label, (sum, count))| (label, (sum as f64 / count as f64, count)))
            .collect();

        Self {
            num_runs,
            avg_final_points,
            avg_unlocks,
            total_duplicates_prevented,
            rank_distribution,
            avg_unlock_session,
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Progress Simulation ({} runs) ===", self.num_runs);
        let _ = writeln!(out, "Avg final points: {:.1}", self.avg_final_points);
        let _ = writeln!(out, "Avg unlocks:      {:.1}", self.avg_unlocks);
        if self.total_duplicates_prevented > 0 {
            let _ = writeln!(
                out,
                "Duplicate writes ignored: {}",
                self.total_duplicates_prevented
            );
        }

        let _ = writeln!(out, "\nFinal ranks:");
        for rank in RANK_THRESHOLDS {
            if let Some(count) = self.rank_distribution.get(rank.name) {
                let _ = writeln!(out, "  {} {:<10} {}", rank.icon, rank.name, count);
            }
        }

        let _ = writeln!(out, "\nFirst unlock (avg session, runs):");
        let mut ordered: Vec<_> = self.avg_unlock_session.iter().collect();
        ordered.sort_by(|a, b| a.1 .0.total_cmp(&b.1 .0));
        for (label, (avg, count)) in ordered {
            let _ = writeln!(out, "  {:>7.1}  {:>4}  {}", avg, count, label);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_from_runs_averages() {
        let mut a = RunStats::new(Uuid::from_u128(1));
        a.final_stats.total_points = 100;
        a.final_rank = "Perunggu";
        a.unlocks.push(UnlockEvent {
            session: 2,
            label: "badge x".to_string(),
        });
        let mut b = RunStats::new(Uuid::from_u128(2));
        b.final_stats.total_points = 300;
        b.final_rank = "Perunggu";
        b.unlocks.push(UnlockEvent {
            session: 4,
            label: "badge x".to_string(),
        });

        let report = SimReport::from_runs(vec![a, b]);
        assert_eq!(report.avg_final_points, 200.0);
        assert_eq!(report.rank_distribution.get("Perunggu"), Some(&2));
        assert_eq!(report.avg_unlock_session.get("badge x"), Some(&(3.0, 2)));
        assert!(report.summary().contains("Perunggu"));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_final_points, 0.0);
    }
}
