use std::path::{Path, PathBuf};

use log::{info, warn};
use slide2048_engine::HighScore;

use crate::util;

const FILE_KIND: &str = "high score";

/// File-backed storage for the high score.
///
/// The file holds the high score as a bare JSON integer. It is read once at
/// startup and rewritten every time the high score increases.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored high score.
    ///
    /// A missing or unreadable file counts as a high score of 0.
    pub fn load(&self) -> HighScore {
        if !self.path.exists() {
            info!("no high score file at {}, starting from 0", self.path.display());
            return HighScore::default();
        }
        match util::read_json_file(FILE_KIND, &self.path) {
            Ok(high_score) => high_score,
            Err(e) => {
                warn!("ignoring stored high score: {e:#}");
                HighScore::default()
            }
        }
    }

    pub fn save(&self, high_score: HighScore) -> anyhow::Result<()> {
        util::write_json_file(FILE_KIND, &self.path, &high_score)
    }
}
