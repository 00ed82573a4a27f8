//! Rank selection from a point total.

use super::data::RANK_THRESHOLDS;
use super::types::RankThreshold;

/// Index into [`RANK_THRESHOLDS`] of the highest rank whose `min_points`
/// does not exceed `points`.
pub fn rank_index(points: u64) -> usize {
    RANK_THRESHOLDS
        .iter()
        .rposition(|rank| points >= rank.min_points)
        .unwrap_or(0)
}

pub fn current_rank(points: u64) -> &'static RankThreshold {
    &RANK_THRESHOLDS[rank_index(points)]
}

/// The next rank up, or `None` at the top of the ladder.
pub fn next_rank(points: u64) -> Option<&'static RankThreshold> {
    RANK_THRESHOLDS.get(rank_index(points) + 1)
}

/// Percentage of the way from the current rank to the next (0..=100).
/// Always 100 at the top rank.
pub fn progress_to_next(points: u64) -> f64 {
    let current = current_rank(points);
    let Some(next) = next_rank(points) else {
        return 100.0;
    };
    let span = (next.min_points - current.min_points) as f64;
    let done = points.saturating_sub(current.min_points) as f64;
    (done / span * 100.0).clamp(0.0, 100.0)
}

/// Points still needed to reach the next rank.
pub fn points_to_next(points: u64) -> Option<u64> {
    next_rank(points).map(|next| next.min_points.saturating_sub(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_points_is_pemula() {
        assert_eq!(current_rank(0).name, "Pemula");
        assert_eq!(next_rank(0).map(|r| r.name), Some("Perunggu"));
        assert_eq!(progress_to_next(0), 0.0);
    }

    #[test]
    fn test_exact_threshold_selects_that_rank() {
        assert_eq!(current_rank(1_000).name, "Emas");
        assert_eq!(current_rank(999).name, "Perak");
    }

    #[test]
    fn test_legend_is_complete() {
        assert_eq!(current_rank(25_000).name, "Legend");
        assert!(next_rank(25_000).is_none());
        assert_eq!(progress_to_next(25_000), 100.0);
        assert_eq!(points_to_next(1_000_000), None);
    }

    #[test]
    fn test_progress_midway() {
        // Perak (500) -> Emas (1000)
        assert_eq!(progress_to_next(750), 50.0);
        assert_eq!(points_to_next(750), Some(250));
    }

    #[test]
    fn test_rank_index_monotonic() {
        let mut last = 0;
        for points in (0..30_000).step_by(37) {
            let idx = rank_index(points);
            assert!(idx >= last, "rank dropped at {} points", points);
            last = idx;
        }
    }
}
