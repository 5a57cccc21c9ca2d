//! Store adapter over the remote transport and local cache.
//!
//! # Responsibility
//! - Orchestrate transport and cache into list/create/update/delete APIs.
//! - Apply the fallback and offline-write policies in exactly one place.
//!
//! # Invariants
//! - Only transport-level unreachability ever triggers cache fallback.
//! - Input validation completes before any cache or network I/O.
//! - Successful remote writes are mirrored into the cache as a side effect.

pub mod note_store;

pub use note_store::{ListOutcome, ListSource, NoteStore, OfflineWritePolicy, StoreError};
