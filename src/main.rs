//! xtts-clone CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use xtts_clone::cli::Args;
use xtts_clone::config::{EngineConfig, create_loader};
use xtts_clone::invoker;

fn main() -> Result<()> {
    enable_logging();
    let args = Args::parse();

    let config = EngineConfig::from_env();
    let loader = create_loader(&config);

    let stdout = io::stdout();
    invoker::run(&args, loader.as_ref(), &mut stdout.lock())
        .with_context(|| format!("Failed to synthesize speech to {}", args.output.display()))?;

    Ok(())
}

fn enable_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("XTTS_CLONE_LOG", "warn"))
        .init();
}
