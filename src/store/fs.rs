use super::CardStore;
use crate::error::{CardboxError, Result};
use crate::model::Flashcard;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: one JSON array holding the whole deck.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CardboxError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CardStore for FileStore {
    fn load(&self) -> Result<Vec<Flashcard>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CardboxError::Io)?;
        match serde_json::from_str(&content) {
            Ok(cards) => Ok(cards),
            Err(e) => {
                // A corrupt store is recoverable: start from an empty deck.
                log::warn!(
                    "could not decode flashcard store {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, cards: &[Flashcard]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(cards).map_err(CardboxError::Serialization)?;

        // Write to a sibling temp file and rename over the target so a crash
        // mid-write never leaves a truncated store.
        let tmp = self.temp_path();
        fs::write(&tmp, content).map_err(CardboxError::Io)?;
        fs::rename(&tmp, &self.path).map_err(CardboxError::Io)?;
        Ok(())
    }
}
