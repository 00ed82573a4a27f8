//! Integration test: JSON file store
//!
//! Progress written through one `JsonFileStore` must be visible to a store
//! reopened on the same file, and duplicate protection must survive the
//! round trip to disk.

use arcade_progress::config::{BackendConfig, Config};
use arcade_progress::evaluator::{apply, evaluate_at};
use arcade_progress::store::JsonFileStore;
use arcade_progress::{record_and_evaluate, GameType, ProgressError, ProgressStore, SessionOutcome};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

fn temp_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arcade-progress-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn now() -> DateTime<Utc> {
    "2025-05-20T14:00:00Z".parse().unwrap()
}

fn winning_session(score: u64) -> SessionOutcome {
    SessionOutcome {
        game: GameType::PatternMaster,
        score,
        streak: 12,
        won: true,
    }
}

#[test]
fn test_progress_survives_reopen() {
    let path = temp_file("progress.json");
    let player = Uuid::from_u128(77);

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        record_and_evaluate(&mut store, player, &winning_session(1_200), now()).unwrap();
    }

    let reopened = JsonFileStore::open(&path).unwrap();
    let stats = reopened.load_stats(player).unwrap().unwrap();
    assert_eq!(stats.total_points, 1_200);
    assert!(reopened.held_ranks(player).unwrap().contains("Emas"));
    assert!(reopened.held_badges(player).unwrap().contains("Kemenangan Pertama"));
    assert!(reopened
        .unlocked_achievements(player)
        .unwrap()
        .contains("points-1000"));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_stale_plan_from_another_process_is_ignored() {
    let path = temp_file("progress.json");
    let player = Uuid::from_u128(78);

    let mut first = JsonFileStore::open(&path).unwrap();
    first
        .save_stats(
            player,
            &arcade_progress::PlayerStats {
                total_games_played: 100,
                total_points: 500,
                total_wins: 1,
                highest_streak: 0,
            },
        )
        .unwrap();
    let stale_plan = evaluate_at(&first.snapshot(player).unwrap(), now());
    assert!(apply(&stale_plan, &mut first).is_complete());

    let mut second = JsonFileStore::open(&path).unwrap();
    let replay = apply(&stale_plan, &mut second);
    assert_eq!(replay.inserted().count(), 0);
    assert_eq!(replay.already_present(), stale_plan.writes.len());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_missing_file_is_not_created_until_first_write() {
    let path = temp_file("fresh.json");
    let player = Uuid::from_u128(79);

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(!path.exists());
    assert_eq!(store.achievement_catalog().unwrap().len(), 8);

    record_and_evaluate(&mut store, player, &winning_session(10), now()).unwrap();
    assert!(path.exists());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = temp_file("corrupt.json");
    fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::open(&path);
    assert!(matches!(result, Err(ProgressError::Json(_))));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_config_opens_file_backend() {
    let path = temp_file("configured.json");
    let config = Config {
        backend: BackendConfig::File { path: path.clone() },
        ..Default::default()
    };

    let mut store = config.open_store().unwrap();
    record_and_evaluate(store.as_mut(), Uuid::from_u128(80), &winning_session(5), now()).unwrap();
    assert!(path.exists());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_two_sessions_on_one_file_keep_both_unlocks() {
    let path = temp_file("shared.json");
    let player = Uuid::from_u128(81);

    let mut tab_a = JsonFileStore::open(&path).unwrap();
    let mut tab_b = JsonFileStore::open(&path).unwrap();

    record_and_evaluate(&mut tab_a, player, &winning_session(30), now()).unwrap();
    let second = SessionOutcome {
        game: GameType::WordSprint,
        score: 90,
        streak: 20,
        won: false,
    };
    record_and_evaluate(&mut tab_b, player, &second, now()).unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    let badges = reopened.held_badges(player).unwrap();
    assert!(badges.contains("Kemenangan Pertama"));
    assert!(badges.contains("Combo Master"));
    assert!(reopened.held_ranks(player).unwrap().contains("Perunggu"));
    let stats = reopened.load_stats(player).unwrap().unwrap();
    assert_eq!(stats.total_games_played, 2);
    assert_eq!(stats.total_points, 120);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
