//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `TWENTY48_*` environment variable;
//! an explicit flag wins over the environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use term_2048::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, TURN_PAUSE_MS};

#[derive(Parser, Debug, Clone)]
#[command(name = "term-2048")]
#[command(version, about = "Play 2048 in the terminal with the arrow keys")]
pub struct Config {
    /// Board edge length (N x N)
    #[arg(
        short,
        long,
        env = "TWENTY48_SIZE",
        default_value_t = DEFAULT_BOARD_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64)
    )]
    pub size: u8,

    /// Seed for tile placement; random when omitted
    #[arg(long, env = "TWENTY48_SEED")]
    pub seed: Option<u32>,

    /// Pause between showing a swipe and placing the new tile, in milliseconds
    #[arg(long, env = "TWENTY48_PAUSE_MS", default_value_t = TURN_PAUSE_MS)]
    pub pause_ms: u64,

    /// Write logs to this file (the screen belongs to the game)
    #[arg(long, env = "TWENTY48_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn turn_pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// The configured seed, or a fresh random one
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
