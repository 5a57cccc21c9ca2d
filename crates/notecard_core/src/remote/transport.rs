//! Transport contract and error taxonomy for the remote notes API.

use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TransportResult<T> = Result<T, TransportError>;

/// Remote transport failure.
///
/// The split matters to the store adapter: `Unreachable` is the only
/// variant that permits serving the local cache; everything else surfaces
/// to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint could not be reached at all (connect or timeout).
    Unreachable(String),
    /// The remote answered with a non-2xx status.
    Rejected { status: u16, body: String },
    /// The remote answered 2xx but the body was not decodable JSON.
    Malformed(String),
    /// The request could not be built or sent for a non-network reason.
    Invalid(String),
}

impl TransportError {
    /// Whether the failure was transport-level unreachability.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(detail) => write!(f, "remote unreachable: {detail}"),
            Self::Rejected { status, body } => {
                write!(f, "remote rejected request with HTTP {status}: {body}")
            }
            Self::Malformed(detail) => write!(f, "remote response is not valid JSON: {detail}"),
            Self::Invalid(detail) => write!(f, "request could not be issued: {detail}"),
        }
    }
}

impl Error for TransportError {}

/// Transport contract for the remote notes API.
///
/// The store adapter is written against this trait so tests can substitute
/// scripted transports for the network.
#[async_trait]
pub trait NoteTransport: Send + Sync {
    /// Fetches the full note collection.
    async fn list_notes(&self) -> TransportResult<Vec<Note>>;
    /// Submits one new note and returns the record the remote assigned.
    async fn create_note(&self, draft: &NoteDraft) -> TransportResult<Note>;
    /// Applies a partial update and returns the updated record.
    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> TransportResult<Note>;
    /// Deletes one note.
    async fn delete_note(&self, id: NoteId) -> TransportResult<()>;
}
