//! Rock-paper-scissors match server.
//!
//! Two seats play 10-round games. The winner of each game stays on as
//! Player 1 and waits for a new challenger, while a cumulative ladder
//! records score, games won, and games played for every name ever seated.
//!
//! ## Modules
//!
//! - [`gameplay`] — choices, round outcomes, round records
//! - [`ladder`] — cumulative per-player statistics and sorted views
//! - [`arena`] — match state, game resolution, randomness sources
//! - [`hosting`] — HTTP surface over a shared [`arena::Arena`]
pub mod arena;
pub mod gameplay;
pub mod ladder;

#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Rounds in a single game.
pub const ROUNDS_PER_GAME: usize = 10;

// ============================================================================
// HOSTING DEFAULTS
// ============================================================================
/// Address the server binds when neither `--bind` nor BIND_ADDR is given.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
/// HTTP worker threads.
pub const DEFAULT_WORKERS: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory the file logger writes into.
pub const LOG_DIR: &str = "logs";

/// Initialize dual logging (terminal + file) for the named binary.
/// Terminal gets INFO, `logs/<binary>-<unix-seconds>.log` gets DEBUG.
#[cfg(feature = "server")]
pub fn log(binary: &str) {
    std::fs::create_dir_all(LOG_DIR).expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = log_path(binary, secs);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
    log::info!("logging to {}", path.display());
}

/// Per-binary, per-launch log file.
pub fn log_path(binary: &str, secs: u64) -> std::path::PathBuf {
    std::path::Path::new(LOG_DIR).join(format!("{}-{}.log", binary, secs))
}
