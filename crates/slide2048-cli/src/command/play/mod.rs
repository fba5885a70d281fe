use std::path::PathBuf;

use log::info;
use ratatui_runtime::{Runtime, ScreenStack};
use slide2048_engine::{GameSession, TileSeed};

use crate::{command::play::screens::PlayScreen, high_score_store::HighScoreStore};

mod screens;

pub(crate) const DEFAULT_HIGH_SCORE_FILE: &str = "./data/high-score.json";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for tile spawning, as 32 hex digits (random if omitted)
    #[clap(long)]
    seed: Option<TileSeed>,
    /// File holding the high score
    #[clap(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        high_score_file,
    } = arg;

    let store = HighScoreStore::new(high_score_file);
    let high_score = store.load();
    let session = seed.map_or_else(GameSession::new, GameSession::with_seed);
    info!(
        "starting game with seed {} (high score {})",
        session.seed(),
        high_score.value()
    );

    let mut app = ScreenStack::new(Box::new(PlayScreen::new(session, high_score, store)));
    Runtime::new().run(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    #[test]
    fn test_default_matches_parsed_arguments() {
        let args = CommandArgs::try_parse_from(["slide2048", "play"]).unwrap();
        let Some(Mode::Play(parsed)) = args.mode else {
            panic!("expected play mode");
        };
        let default = PlayArg::default();
        assert_eq!(parsed.high_score_file, default.high_score_file);
        assert_eq!(parsed.seed, default.seed);
        assert_eq!(default.high_score_file, Path::new(DEFAULT_HIGH_SCORE_FILE));
    }
}
