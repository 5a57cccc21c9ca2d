//! Note store adapter: remote-first with local cache fallback.
//!
//! # Responsibility
//! - Serve listings from the remote when configured, falling back to the
//!   cached copy only on transport-level unreachability.
//! - Mirror successful remote writes into the cache.
//! - Enforce the deployment's offline-write policy explicitly.
//!
//! # Invariants
//! - Any remote error other than unreachability propagates unchanged.
//! - The cache is only overwritten by data the remote actually returned,
//!   or by writes the offline policy explicitly accepted.
//! - Update/delete require a configured remote; local-only mode rejects
//!   them as unsupported capabilities.

use crate::cache::note_cache::{CacheError, NoteCache};
use crate::config::RemoteConfig;
use crate::model::note::{sort_by_recency, Note, NoteDraft, NoteId, NotePatch, NoteValidationError};
use crate::remote::http::HttpTransport;
use crate::remote::transport::{NoteTransport, TransportError};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// What a deployment does with create/update/delete when the remote is
/// configured but unreachable.
///
/// The two observed deployments disagree here, so the choice is an explicit
/// constructor argument rather than an inferred hybrid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OfflineWritePolicy {
    /// Apply the write to the local cache and report success.
    AcceptLocal,
    /// Refuse with an explicit offline error.
    #[default]
    Reject,
}

/// Where a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Live remote data; the cache was overwritten with it.
    Remote,
    /// Remote configured but unreachable; cached data served instead.
    Fallback,
    /// No remote configured; cached data is the only source.
    Local,
}

impl ListSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
            Self::Local => "local",
        }
    }
}

impl Display for ListSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List envelope carrying the notes and their provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutcome {
    /// Notes sorted newest first.
    pub notes: Vec<Note>,
    /// Which backend actually produced the data.
    pub source: ListSource,
}

/// Store adapter failure, the single error surface callers see.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected before any I/O.
    Validation(NoteValidationError),
    /// Remote unreachable and fallback was not permitted for this call.
    Offline {
        operation: &'static str,
        detail: String,
    },
    /// Remote answered with a non-2xx status, surfaced verbatim.
    Rejected { status: u16, body: String },
    /// Remote 2xx body was not decodable JSON.
    Malformed(String),
    /// Request could not be issued for a non-network reason.
    Invalid(String),
    /// Operation not offered by the current backend.
    Unsupported(&'static str),
    /// Target note does not exist where the write was applied.
    NotFound(NoteId),
    /// Local cache failure.
    Cache(CacheError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Offline { operation, detail } => {
                write!(f, "cannot {operation} while offline: {detail}")
            }
            Self::Rejected { status, body } => {
                write!(f, "remote rejected request with HTTP {status}: {body}")
            }
            Self::Malformed(detail) => write!(f, "remote response is not valid JSON: {detail}"),
            Self::Invalid(detail) => write!(f, "request could not be issued: {detail}"),
            Self::Unsupported(operation) => {
                write!(f, "{operation} is not supported by the current backend")
            }
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Cache(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Cache(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CacheError> for StoreError {
    fn from(value: CacheError) -> Self {
        Self::Cache(value)
    }
}

/// Note store over an optional remote transport and a local cache.
pub struct NoteStore<T: NoteTransport> {
    remote: Option<T>,
    cache: NoteCache,
    policy: OfflineWritePolicy,
}

impl NoteStore<HttpTransport> {
    /// Wires an HTTP-backed store from resolved configuration.
    ///
    /// `remote: None` produces a local-only store that never touches the
    /// network.
    pub fn open(
        remote: Option<&RemoteConfig>,
        cache: NoteCache,
        policy: OfflineWritePolicy,
    ) -> Result<Self, StoreError> {
        let transport = match remote {
            Some(config) => Some(HttpTransport::new(config).map_err(|err| match err {
                TransportError::Invalid(detail) => StoreError::Invalid(detail),
                other => StoreError::Invalid(other.to_string()),
            })?),
            None => None,
        };
        Ok(Self::new(transport, cache, policy))
    }
}

impl<T: NoteTransport> NoteStore<T> {
    /// Creates a store from an already-built transport.
    pub fn new(remote: Option<T>, cache: NoteCache, policy: OfflineWritePolicy) -> Self {
        Self {
            remote,
            cache,
            policy,
        }
    }

    /// Whether a remote endpoint is configured.
    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// Lists notes, newest first.
    ///
    /// With a remote configured, a successful read overwrites the cache
    /// with exactly the returned data. On unreachability the prior cache
    /// contents are served unchanged and marked as fallback. Any other
    /// remote error propagates.
    pub async fn list(&self) -> Result<ListOutcome, StoreError> {
        let Some(remote) = self.remote.as_ref() else {
            let notes = self.load_sorted()?;
            return Ok(ListOutcome {
                notes,
                source: ListSource::Local,
            });
        };

        match remote.list_notes().await {
            Ok(mut notes) => {
                sort_by_recency(&mut notes);
                self.cache.store(&notes)?;
                info!(
                    "event=notes_list module=store status=ok source=remote count={}",
                    notes.len()
                );
                Ok(ListOutcome {
                    notes,
                    source: ListSource::Remote,
                })
            }
            Err(TransportError::Unreachable(detail)) => {
                warn!("event=notes_list module=store status=fallback detail={detail}");
                let notes = self.load_sorted()?;
                Ok(ListOutcome {
                    notes,
                    source: ListSource::Fallback,
                })
            }
            Err(err) => Err(surface("list", err)),
        }
    }

    /// Creates one note.
    ///
    /// Validation runs before any I/O. Without a remote the record is
    /// synthesized locally; with one, the remote's record is merged into
    /// the cache on success, and unreachability is resolved by the
    /// configured offline-write policy.
    pub async fn create(&self, draft: &NoteDraft) -> Result<Note, StoreError> {
        draft.validate()?;

        let Some(remote) = self.remote.as_ref() else {
            return self.accept_local_create(draft);
        };

        match remote.create_note(draft).await {
            Ok(note) => {
                self.cache.merge(note.clone())?;
                info!("event=note_create module=store status=ok id={}", note.id);
                Ok(note)
            }
            Err(TransportError::Unreachable(detail)) => match self.policy {
                OfflineWritePolicy::AcceptLocal => {
                    warn!("event=note_create module=store status=offline_accept detail={detail}");
                    self.accept_local_create(draft)
                }
                OfflineWritePolicy::Reject => Err(StoreError::Offline {
                    operation: "create",
                    detail,
                }),
            },
            Err(err) => Err(surface("create", err)),
        }
    }

    /// Updates one note in place.
    ///
    /// Requires a configured remote; local-only mode rejects the call as
    /// unsupported.
    pub async fn update(&self, id: NoteId, patch: &NotePatch) -> Result<Note, StoreError> {
        patch.validate()?;

        let Some(remote) = self.remote.as_ref() else {
            return Err(StoreError::Unsupported("update"));
        };

        match remote.update_note(id, patch).await {
            Ok(note) => {
                self.cache.merge(note.clone())?;
                info!("event=note_update module=store status=ok id={id}");
                Ok(note)
            }
            Err(TransportError::Unreachable(detail)) => match self.policy {
                OfflineWritePolicy::AcceptLocal => {
                    warn!("event=note_update module=store status=offline_accept detail={detail}");
                    self.accept_local_update(id, patch)
                }
                OfflineWritePolicy::Reject => Err(StoreError::Offline {
                    operation: "update",
                    detail,
                }),
            },
            Err(err) => Err(surface("update", err)),
        }
    }

    /// Deletes one note.
    ///
    /// Requires a configured remote; local-only mode rejects the call as
    /// unsupported.
    pub async fn delete(&self, id: NoteId) -> Result<(), StoreError> {
        let Some(remote) = self.remote.as_ref() else {
            return Err(StoreError::Unsupported("delete"));
        };

        match remote.delete_note(id).await {
            Ok(()) => {
                self.cache.remove(id)?;
                info!("event=note_delete module=store status=ok id={id}");
                Ok(())
            }
            Err(TransportError::Unreachable(detail)) => match self.policy {
                OfflineWritePolicy::AcceptLocal => {
                    warn!("event=note_delete module=store status=offline_accept detail={detail}");
                    if !self.cache.remove(id)? {
                        return Err(StoreError::NotFound(id));
                    }
                    Ok(())
                }
                OfflineWritePolicy::Reject => Err(StoreError::Offline {
                    operation: "delete",
                    detail,
                }),
            },
            Err(err) => Err(surface("delete", err)),
        }
    }

    fn load_sorted(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes = self.cache.load()?;
        sort_by_recency(&mut notes);
        Ok(notes)
    }

    fn accept_local_create(&self, draft: &NoteDraft) -> Result<Note, StoreError> {
        let note = Note::from_draft(draft, Utc::now());
        self.cache.merge(note.clone())?;
        info!(
            "event=note_create module=store status=ok source=local id={}",
            note.id
        );
        Ok(note)
    }

    fn accept_local_update(&self, id: NoteId, patch: &NotePatch) -> Result<Note, StoreError> {
        let notes = self.cache.load()?;
        let Some(mut note) = notes.into_iter().find(|note| note.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        note.apply_patch(patch, Utc::now());
        self.cache.merge(note.clone())?;
        Ok(note)
    }
}

/// Maps a non-fallback transport failure onto the store error surface.
fn surface(operation: &'static str, err: TransportError) -> StoreError {
    match err {
        TransportError::Unreachable(detail) => StoreError::Offline { operation, detail },
        TransportError::Rejected { status, body } => StoreError::Rejected { status, body },
        TransportError::Malformed(detail) => StoreError::Malformed(detail),
        TransportError::Invalid(detail) => StoreError::Invalid(detail),
    }
}
