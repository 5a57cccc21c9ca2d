//! Domain model for note records and write payloads.
//!
//! # Responsibility
//! - Define the canonical note shape shared by cache and remote transport.
//! - Own input validation so no invalid payload reaches any I/O path.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that never changes.
//! - Validation runs before persistence or network submission, never after.

pub mod note;
