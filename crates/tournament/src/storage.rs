//! Session persistence to a JSON file

use roster_core::{Result, SaveHook, SessionState};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default session file, next to where the binary runs
pub const DEFAULT_STATE_FILE: &str = "roster_state.json";

/// Save hook that rewrites one JSON file on every save
#[derive(Debug, Clone)]
pub struct JsonFileSave {
    path: PathBuf,
}

impl JsonFileSave {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Previously saved state, if the file exists
    pub fn load(&self) -> Result<Option<SessionState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        SessionState::load(&self.path).map(Some)
    }
}

impl SaveHook for JsonFileSave {
    fn save(&mut self, state: &SessionState) -> Result<()> {
        state.save(&self.path)?;
        debug!(path = %self.path.display(), "saved session state");
        Ok(())
    }
}
