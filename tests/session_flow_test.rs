//! Integration test: end-of-game flow
//!
//! Records sessions through `record_and_evaluate` and checks the knock-on
//! effects: stats totals, daily challenge bonuses, rank climbs, the
//! leaderboard and spending points in the shop.

use arcade_progress::challenges::DailyChallenge;
use arcade_progress::shop::buy;
use arcade_progress::store::{MemoryStore, Table};
use arcade_progress::{
    record_and_evaluate, GameType, ProgressError, ProgressStore, SessionOutcome,
};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

fn at(ts: &str) -> DateTime<Utc> {
    ts.parse().unwrap()
}

fn session(game: GameType, score: u64, streak: u64, won: bool) -> SessionOutcome {
    SessionOutcome {
        game,
        score,
        streak,
        won,
    }
}

fn daily(id: &str, date: NaiveDate, game: GameType, target: u64, bonus: u64) -> DailyChallenge {
    DailyChallenge {
        id: id.to_string(),
        challenge_date: date,
        game_type: game,
        title: format!("Tantangan {}", id),
        description: format!("Raih {} poin", target),
        target_score: target,
        bonus_points: bonus,
    }
}

#[test]
fn test_sessions_accumulate_and_climb_ranks() {
    let mut store = MemoryStore::new();
    let player = Uuid::from_u128(100);
    let now = at("2025-04-01T10:00:00Z");

    let mut last = None;
    for i in 0..6 {
        let outcome = session(GameType::QuickMath, 100, i * 2, i % 2 == 0);
        last = Some(record_and_evaluate(&mut store, player, &outcome, now).unwrap());
    }
    let last = last.unwrap();

    assert_eq!(last.stats.total_games_played, 6);
    assert_eq!(last.stats.total_points, 600);
    assert_eq!(last.stats.total_wins, 3);
    assert_eq!(last.stats.highest_streak, 10);
    assert_eq!(last.plan.rank.name, "Perak");

    let ranks = store.held_ranks(player).unwrap();
    assert!(ranks.contains("Perunggu"));
    assert!(ranks.contains("Perak"));
    let achievements = store.unlocked_achievements(player).unwrap();
    assert!(achievements.contains("first-game"));
    assert!(achievements.contains("streak-10"));
}

#[test]
fn test_daily_challenge_only_counts_matching_game_and_day() {
    let mut store = MemoryStore::new();
    let today = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
    let yesterday = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    store.add_challenge(daily("words", today, GameType::WordSprint, 80, 150));
    store.add_challenge(daily("old-words", yesterday, GameType::WordSprint, 10, 999));
    store.add_challenge(daily("nato", today, GameType::NatoAlphabet, 10, 999));
    let player = Uuid::from_u128(101);
    let now = at("2025-04-02T19:45:00Z");

    let short = record_and_evaluate(
        &mut store,
        player,
        &session(GameType::WordSprint, 79, 0, false),
        now,
    )
    .unwrap();
    assert_eq!(short.bonus_points, 0);

    let hit = record_and_evaluate(
        &mut store,
        player,
        &session(GameType::WordSprint, 80, 0, true),
        now,
    )
    .unwrap();
    assert_eq!(hit.bonus_points, 150);
    assert_eq!(hit.completed_challenges.len(), 1);
    assert_eq!(hit.completed_challenges[0].id, "words");
    assert_eq!(hit.stats.total_points, 79 + 80 + 150);
    assert_eq!(
        store.completed_challenges(player).unwrap().into_iter().collect::<Vec<_>>(),
        vec!["words".to_string()]
    );
}

#[test]
fn test_leaderboard_reflects_recorded_sessions() {
    let mut store = MemoryStore::new();
    let now = at("2025-04-03T12:00:00Z");
    let alice = Uuid::from_u128(1);
    let budi = Uuid::from_u128(2);
    let citra = Uuid::from_u128(3);

    record_and_evaluate(&mut store, alice, &session(GameType::BrainRush, 300, 4, true), now)
        .unwrap();
    record_and_evaluate(&mut store, budi, &session(GameType::BrainRush, 300, 4, false), now)
        .unwrap();
    record_and_evaluate(&mut store, citra, &session(GameType::BrainRush, 900, 4, false), now)
        .unwrap();

    let board = store.top_players(50).unwrap();
    let order: Vec<_> = board.iter().map(|e| e.player_id).collect();
    assert_eq!(order, vec![citra, alice, budi]);
    assert_eq!(board[0].rank().name, "Perak");

    let top_one = store.top_players(1).unwrap();
    assert_eq!(top_one.len(), 1);
}

#[test]
fn test_buying_a_power_up_spends_points() {
    let mut store = MemoryStore::new();
    let player = Uuid::from_u128(200);
    let now = at("2025-04-04T09:00:00Z");
    record_and_evaluate(&mut store, player, &session(GameType::PatternMaster, 300, 1, true), now)
        .unwrap();

    buy(&mut store, player, "hint").unwrap();
    let receipt = buy(&mut store, player, "hint").unwrap();
    assert_eq!(receipt.owned, 2);
    assert_eq!(receipt.points_left, 100);
    assert_eq!(store.load_stats(player).unwrap().unwrap().total_points, 100);
    assert_eq!(store.inventory(player).unwrap().quantity("hint"), 2);

    let err = buy(&mut store, player, "time-freeze").unwrap_err();
    assert!(matches!(
        err,
        ProgressError::InsufficientPoints {
            needed: 250,
            available: 100
        }
    ));
    assert_eq!(store.load_stats(player).unwrap().unwrap().total_points, 100);
    assert_eq!(store.inventory(player).unwrap().quantity("time-freeze"), 0);

    // Earned rows stay after spending.
    assert!(store.held_ranks(player).unwrap().contains("Perunggu"));
}

#[test]
fn test_buying_for_a_player_without_stats() {
    let mut store = MemoryStore::new();
    let player = Uuid::from_u128(201);
    assert!(matches!(
        buy(&mut store, player, "hint"),
        Err(ProgressError::PlayerNotFound(_))
    ));
    assert!(matches!(
        buy(&mut store, player, "jetpack"),
        Err(ProgressError::UnknownPowerUp(_))
    ));
}

#[test]
fn test_unlock_failures_do_not_fail_the_session() {
    let mut store = MemoryStore::new();
    store.fail_writes_to(Table::PlayerAchievements);
    store.fail_writes_to(Table::PlayerRankings);
    let player = Uuid::from_u128(300);

    let report = record_and_evaluate(
        &mut store,
        player,
        &session(GameType::BrainRush, 50, 0, true),
        at("2025-04-05T09:00:00Z"),
    )
    .unwrap();

    assert_eq!(report.stats.total_games_played, 1);
    assert!(!report.applied.is_complete());
    assert!(store.held_badges(player).unwrap().contains("Kemenangan Pertama"));
    assert!(store.held_ranks(player).unwrap().is_empty());
}
