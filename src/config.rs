use crate::error::{CardboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_TICK_SECS: u64 = 1;

/// Configuration for cardbox, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardboxConfig {
    /// File name of the flashcard store inside the data directory
    #[serde(default = "default_storage_filename")]
    pub storage_filename: String,

    /// Length of one review delay unit, in seconds. Priorities wait
    /// high=10, medium=5, low=3 of these before revealing the answer.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
}

fn default_storage_filename() -> String {
    DEFAULT_STORAGE_FILENAME.to_string()
}

fn default_tick_secs() -> u64 {
    DEFAULT_TICK_SECS
}

impl Default for CardboxConfig {
    fn default() -> Self {
        Self {
            storage_filename: default_storage_filename(),
            tick_secs: DEFAULT_TICK_SECS,
        }
    }
}

impl CardboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardboxError::Io)?;
        let config: CardboxConfig =
            serde_json::from_str(&content).map_err(CardboxError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardboxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardboxError::Serialization)?;
        fs::write(config_path, content).map_err(CardboxError::Io)?;
        Ok(())
    }
}
