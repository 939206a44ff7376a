//! Logger setup.
//!
//! The game owns the terminal, so log lines on stderr would scribble over the
//! board. Logs go to `--log-file` when given; otherwise stderr logging is only
//! enabled when `RUST_LOG` asks for it.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::Config;

pub fn init(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if std::env::var_os("RUST_LOG").is_some() => {
            builder.target(Target::Stderr);
        }
        None => return Ok(()),
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}
