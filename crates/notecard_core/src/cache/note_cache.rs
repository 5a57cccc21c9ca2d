//! Wholesale JSON-document cache for notes.
//!
//! The cache mirrors what the remote last returned (plus any locally
//! accepted writes) as one JSON array under a namespaced file name. Every
//! mutation loads the whole array, changes it in memory, and writes the
//! whole array back.

use crate::model::note::{Note, NoteId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Namespaced file name for the cached note array.
pub const CACHE_FILE_NAME: &str = "notecard.notes.json";

pub type CacheResult<T> = Result<T, CacheError>;

/// Local cache failure.
#[derive(Debug)]
pub enum CacheError {
    Io(std::io::Error),
    /// Persisted content is not a JSON note array.
    Malformed(serde_json::Error),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cache file access failed: {err}"),
            Self::Malformed(err) => write!(f, "cache content is not a note array: {err}"),
        }
    }
}

impl Error for CacheError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CacheError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// File-backed note cache.
pub struct NoteCache {
    path: PathBuf,
}

impl NoteCache {
    /// Creates a cache rooted in `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> CacheResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(CACHE_FILE_NAME),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full cached note array.
    ///
    /// A missing document yields an empty list; unreadable or non-JSON
    /// content is an error.
    pub fn load(&self) -> CacheResult<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(CacheError::Io(err)),
        };
        let notes: Vec<Note> = serde_json::from_str(&raw)?;
        Ok(notes)
    }

    /// Replaces the cached array wholesale.
    pub fn store(&self, notes: &[Note]) -> CacheResult<()> {
        let raw = serde_json::to_string(notes)?;
        fs::write(&self.path, raw)?;
        debug!(
            "event=cache_store module=cache status=ok count={} path={}",
            notes.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Merges one note into the cached array, replacing any prior entry
    /// with the same id rather than duplicating it.
    pub fn merge(&self, note: Note) -> CacheResult<()> {
        let mut notes = self.load()?;
        match notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(existing) => *existing = note,
            None => notes.push(note),
        }
        self.store(&notes)
    }

    /// Removes one note by id, reporting whether it was present.
    pub fn remove(&self, id: NoteId) -> CacheResult<bool> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.store(&notes)?;
        Ok(true)
    }
}
