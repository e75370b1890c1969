//! Best-score storage.
//!
//! The best score is the only thing that outlives a session. It is read once
//! at startup and written whenever the running score beats it. Storage is an
//! injected capability so the controller never reaches for ambient state, and
//! a failing store only costs persistence: the controller keeps tracking the
//! best score for the current process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Failure talking to the backing store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read best score from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write best score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score storage unavailable")]
    Unavailable,
}

/// Get/set of a single best-score integer
pub trait ScoreStore {
    /// Load the stored best score; missing or unparsable data reads as 0
    fn load(&self) -> Result<u32, StorageError>;

    /// Persist a new best score
    fn save(&mut self, best: u32) -> Result<(), StorageError>;
}

/// Parse a stored value the lenient way: trimmed decimal, anything else is 0
pub fn parse_best_score(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// In-process store (also the fallback when no file is configured)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: u32,
}

impl MemoryScoreStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32, StorageError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<(), StorageError> {
        self.best = best;
        Ok(())
    }
}

/// Store that keeps the best score as a plain integer string in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(parse_best_score(&raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no best score file yet");
                Ok(0)
            }
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, best: u32) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, best.to_string()).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> Result<u32, StorageError> {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<(), StorageError> {
        (**self).save(best)
    }
}
