//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record exchanged with cache and remote.
//! - Validate write payloads before any persistence or network call.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Wire field names are camelCase to match the remote JSON schema.
//! - `updated_at` is optional; recency falls back to `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum title length in characters, enforced before any I/O.
pub const TITLE_MAX_CHARS: usize = 120;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record.
///
/// The same shape is used for remote JSON payloads and the local cache
/// document, so one serde derivation covers both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID, generated locally or assigned by the remote.
    pub id: NoteId,
    /// Short display title, at most [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Free-form body text.
    pub content: String,
    /// Creation timestamp, RFC 3339 on the wire.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp. One deployment variant omits it entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Partial payload for updating a note in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Input validation error, raised before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title and content are both blank after trimming.
    EmptyNote,
    /// Title exceeds [`TITLE_MAX_CHARS`] characters.
    TitleTooLong { chars: usize },
    /// Patch carries no fields at all.
    EmptyPatch,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNote => write!(f, "note needs a title or some content"),
            Self::TitleTooLong { chars } => write!(
                f,
                "title is {chars} characters; the maximum is {TITLE_MAX_CHARS}"
            ),
            Self::EmptyPatch => write!(f, "update payload contains no fields"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Synthesizes a local note from a draft with a generated stable ID.
    ///
    /// Used when no remote is configured or when the offline write policy
    /// accepts local records.
    pub fn from_draft(draft: &NoteDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: now,
            updated_at: Some(now),
        }
    }

    /// Applies a patch in place and bumps `updated_at`.
    pub fn apply_patch(&mut self, patch: &NotePatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title.as_ref() {
            self.title = title.clone();
        }
        if let Some(content) = patch.content.as_ref() {
            self.content = content.clone();
        }
        self.updated_at = Some(now);
    }

    /// Timestamp used for recency ordering.
    pub fn recency(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks the draft against input rules.
    ///
    /// # Errors
    /// - `EmptyNote` when title and content are both blank after trimming.
    /// - `TitleTooLong` when the title exceeds the character budget.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyNote);
        }
        validate_title(&self.title)
    }
}

impl NotePatch {
    /// Checks the patch against input rules.
    ///
    /// # Errors
    /// - `EmptyPatch` when neither field is present.
    /// - `TitleTooLong` when a replacement title exceeds the budget.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(NoteValidationError::EmptyPatch);
        }
        if let Some(title) = self.title.as_ref() {
            validate_title(title)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), NoteValidationError> {
    let chars = title.chars().count();
    if chars > TITLE_MAX_CHARS {
        return Err(NoteValidationError::TitleTooLong { chars });
    }
    Ok(())
}

/// Sorts notes by recency, newest first, with the id as a stable tiebreak.
pub fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| match b.recency().cmp(&a.recency()) {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    });
}
