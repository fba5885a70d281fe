use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};

use self::{play::PlayArg, script::ScriptArg};

mod play;
mod script;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Append log output to this file (the terminal is owned by the game while playing)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the game in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Apply a list of moves without the terminal UI and print the resulting grid
    Script(#[clap(flatten)] ScriptArg),
}

impl Default for Mode {
    fn default() -> Self {
        Self::Play(PlayArg::default())
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.log_file.as_deref())?;

    match args.mode.unwrap_or_default() {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Script(arg) => script::run(&arg)?,
    }
    Ok(())
}

/// Sets up `env_logger`.
///
/// Without a log file nothing is logged unless `RUST_LOG` asks for it, since
/// stderr output would corrupt the game screen.
fn init_logger(log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
