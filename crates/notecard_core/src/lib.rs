//! Core data layer for notecard.
//!
//! Exposes a note store that reads and writes a remote REST endpoint when
//! one is configured and transparently serves a local cached copy when the
//! remote is unset or unreachable. This crate is the single source of truth
//! for validation, fallback, and offline-write policy.

pub mod cache;
pub mod config;
pub mod logging;
pub mod model;
pub mod remote;
pub mod store;

pub use cache::note_cache::{CacheError, CacheResult, NoteCache};
pub use config::{RemoteConfig, REMOTE_HOST_ENV, REMOTE_PREFIX_ENV};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    Note, NoteDraft, NoteId, NotePatch, NoteValidationError, TITLE_MAX_CHARS,
};
pub use remote::http::HttpTransport;
pub use remote::transport::{NoteTransport, TransportError, TransportResult};
pub use store::note_store::{ListOutcome, ListSource, NoteStore, OfflineWritePolicy, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
