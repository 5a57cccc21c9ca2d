//! Local persistence for the note list.
//!
//! # Responsibility
//! - Own the single namespaced document holding the cached note array.
//! - Keep file-format details out of the store adapter.
//!
//! # Invariants
//! - The document is read and written wholesale; there are no partial
//!   updates and no concurrent-writer protection (last write wins).
//! - Read paths reject malformed persisted state instead of masking it.

pub mod note_cache;

pub use note_cache::{CacheError, CacheResult, NoteCache, CACHE_FILE_NAME};
