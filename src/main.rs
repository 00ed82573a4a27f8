use arcade_progress::achievements::AchievementSummary;
use arcade_progress::build_info;
use arcade_progress::config::{BackendConfig, Config};
use arcade_progress::evaluator::{evaluate_player, record_and_evaluate, ApplyReport};
use arcade_progress::ranks::{current_rank, next_rank, points_to_next, progress_to_next};
use arcade_progress::shop::buy;
use arcade_progress::simulator::{run_simulation, SimConfig};
use arcade_progress::{GameType, PlayerId, ProgressStore, Result, SessionOutcome};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "arcade-progress", version = build_info::VERSION_LINE)]
#[command(about = "Track mini-game progress: ranks, badges, achievements and daily challenges")]
struct Args {
    /// Use this JSON data file instead of the configured store
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a player's stored stats and record anything newly earned
    Evaluate {
        #[arg(long)]
        player: PlayerId,
    },
    /// Record a finished game session, then evaluate
    Record {
        #[arg(long)]
        player: PlayerId,
        /// brain_rush, pattern_master, word_sprint, quick_math or nato_alphabet
        #[arg(long)]
        game: GameType,
        #[arg(long)]
        score: u64,
        #[arg(long, default_value_t = 0)]
        streak: u64,
        #[arg(long)]
        won: bool,
    },
    /// Show the rank for a point total
    Rank {
        #[arg(long)]
        points: u64,
    },
    /// List achievements with a player's progress
    Achievements {
        #[arg(long)]
        player: PlayerId,
    },
    /// Top players by points
    Leaderboard {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Buy a power-up with points
    Buy {
        #[arg(long)]
        player: PlayerId,
        #[arg(long)]
        item: String,
    },
    /// Simulate random sessions and report unlock pacing
    Simulate {
        #[arg(long, default_value_t = 10)]
        runs: u32,
        #[arg(long, default_value_t = 200)]
        sessions: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Re-apply each plan as a second tab with a stale snapshot would
        #[arg(long)]
        replay_stale: bool,
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load();
    if let Some(path) = args.data_file {
        config.backend = BackendConfig::File { path };
    }

    match args.command {
        Command::Rank { points } => {
            print_rank(points);
            Ok(())
        }
        Command::Simulate {
            runs,
            sessions,
            seed,
            replay_stale,
            verbose,
        } => {
            let sim = SimConfig {
                num_runs: runs,
                seed,
                sessions_per_run: sessions,
                replay_stale_plans: replay_stale,
                verbosity: if verbose { 2 } else { 1 },
                ..Default::default()
            };
            print!("{}", run_simulation(&sim).summary());
            Ok(())
        }
        Command::Evaluate { player } => {
            let mut store = open_store(&config)?;
            let (plan, report) = evaluate_player(store.as_mut(), player, Utc::now())?;
            let stats = store.load_stats(player)?.unwrap_or_default();
            print_rank(stats.total_points);
            if plan.is_empty() {
                println!("Nothing new to record.");
            }
            print_report(&report);
            Ok(())
        }
        Command::Record {
            player,
            game,
            score,
            streak,
            won,
        } => {
            let mut store = open_store(&config)?;
            let outcome = SessionOutcome {
                game,
                score,
                streak,
                won,
            };
            let report = record_and_evaluate(store.as_mut(), player, &outcome, Utc::now())?;
            println!(
                "{} {}: {} points (streak {})",
                game.icon(),
                game,
                score,
                streak
            );
            for challenge in &report.completed_challenges {
                println!(
                    "Daily challenge complete: {} (+{} bonus)",
                    challenge.title, challenge.bonus_points
                );
            }
            print_rank(report.stats.total_points);
            print_report(&report.applied);
            Ok(())
        }
        Command::Achievements { player } => {
            let store = open_store(&config)?;
            let snapshot = store.snapshot(player)?;
            let summary = AchievementSummary {
                unlocked: snapshot
                    .catalog
                    .iter()
                    .filter(|def| snapshot.unlocked_achievements.contains(&def.id))
                    .count(),
                total: snapshot.catalog.len(),
            };
            println!(
                "Achievements {}/{} ({:.0}%)",
                summary.unlocked,
                summary.total,
                summary.percentage()
            );
            for def in &snapshot.catalog {
                if snapshot.unlocked_achievements.contains(&def.id) {
                    println!("  {} {:<20} unlocked  +{}", def.icon, def.title, def.points_reward);
                } else {
                    println!(
                        "  🔒 {:<20} {:>5.0}%    {}",
                        def.title,
                        def.progress(&snapshot.stats),
                        def.description
                    );
                }
            }
            Ok(())
        }
        Command::Leaderboard { limit } => {
            let store = open_store(&config)?;
            let limit = limit.unwrap_or(config.leaderboard_limit);
            for entry in store.top_players(limit)? {
                println!(
                    "#{:<3} {}  {:>8} pts  {:>4} wins  {} {}",
                    entry.position,
                    entry.player_id,
                    entry.stats.total_points,
                    entry.stats.total_wins,
                    entry.rank().icon,
                    entry.rank().name
                );
            }
            Ok(())
        }
        Command::Buy { player, item } => {
            let mut store = open_store(&config)?;
            let receipt = buy(store.as_mut(), player, &item)?;
            println!(
                "Bought {} {}. Owned: {}. Points left: {}",
                receipt.power_up.icon, receipt.power_up.name, receipt.owned, receipt.points_left
            );
            Ok(())
        }
    }
}

fn open_store(config: &Config) -> Result<Box<dyn ProgressStore>> {
    match &config.backend {
        BackendConfig::Memory => log::debug!("using in-memory store"),
        BackendConfig::File { path } => log::debug!("using data file {}", path.display()),
        BackendConfig::Rest { url, .. } => log::debug!("using remote store {}", url),
    }
    config.open_store()
}

fn print_rank(points: u64) {
    let rank = current_rank(points);
    match (next_rank(points), points_to_next(points)) {
        (Some(next), Some(needed)) => println!(
            "Rank: {} {} ({} pts, {:.0}% to {}, {} to go)",
            rank.icon,
            rank.name,
            points,
            progress_to_next(points),
            next.name,
            needed
        ),
        _ => println!("Rank: {} {} ({} pts, MAX)", rank.icon, rank.name, points),
    }
}

fn print_report(report: &ApplyReport) {
    for write in report.inserted() {
        println!("  + {}", write);
    }
    for (write, err) in &report.failed {
        println!("  ! {} not recorded: {}", write, err);
    }
}
