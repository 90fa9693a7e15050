//! YAML description of a session, used by the diagnostic runner.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::clock::GameClock;
use crate::rng::shared_rng;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub session_id: u64,
    #[serde(default)]
    pub clock: GameClock,
    /// Seed of the host generator standing in for the server's global random.
    #[serde(default)]
    pub authoritative_seed: u64,
}

impl SessionConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse session config")
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize session config")
    }

    pub fn build_session(&self) -> Session {
        let host = ChaCha8Rng::seed_from_u64(self.authoritative_seed);
        Session::new(self.session_id, self.clock, shared_rng(host))
    }
}

pub struct SessionLoader {
    base_dir: PathBuf,
}

impl SessionLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<SessionConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        let config: SessionConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
