// Badge thresholds
pub const FIRST_WIN_THRESHOLD: u64 = 1;
pub const VETERAN_GAMES_THRESHOLD: u64 = 100;
pub const COMBO_MASTER_STREAK_THRESHOLD: u64 = 20;
pub const POINT_COLLECTOR_THRESHOLD: u64 = 10_000;

// Leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

// Storage
pub const APP_NAME: &str = "arcade-progress";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DATA_FILE_NAME: &str = "progress.json";

// Environment overrides for the config file
pub const ENV_STORE_URL: &str = "ARCADE_STORE_URL";
pub const ENV_STORE_KEY: &str = "ARCADE_STORE_KEY";
pub const ENV_DATA_FILE: &str = "ARCADE_DATA_FILE";

// Simulator
pub const SIM_MAX_SCORE: u64 = 400;
pub const SIM_MAX_STREAK: u64 = 25;
pub const SIM_WIN_CHANCE: f64 = 0.5;
