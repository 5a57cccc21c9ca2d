//! reqwest-backed implementation of the transport contract.
//!
//! # Responsibility
//! - Speak the conventional REST surface: `GET/POST {base}/notes`,
//!   `PATCH/DELETE {base}/notes/{id}`, all JSON.
//! - Map reqwest failures onto the transport error taxonomy.
//!
//! # Invariants
//! - Only connect/timeout-level failures map to `Unreachable`.
//! - Non-2xx responses carry status and body text back verbatim.
//! - No request is retried and no client-side timeout is installed.

use crate::config::RemoteConfig;
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::remote::transport::{NoteTransport, TransportError, TransportResult};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

/// HTTP transport for the remote notes API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport for the configured endpoint.
    pub fn new(config: &RemoteConfig) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| TransportError::Invalid(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/notes/{id}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> TransportResult<T> {
        let status = response.status();
        let body = response.text().await.map_err(map_send_error)?;
        if !status.is_success() {
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|err| TransportError::Malformed(err.to_string()))
    }

    async fn expect_success(response: reqwest::Response) -> TransportResult<()> {
        let status = response.status();
        if status.is_success() {
            // 204 and other bodyless success responses end here.
            return Ok(());
        }
        let body = response.text().await.map_err(map_send_error)?;
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl NoteTransport for HttpTransport {
    async fn list_notes(&self) -> TransportResult<Vec<Note>> {
        debug!("event=remote_list module=remote url={}", self.notes_url());
        let response = self
            .client
            .get(self.notes_url())
            .send()
            .await
            .map_err(map_send_error)?;
        Self::decode(response).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> TransportResult<Note> {
        let response = self
            .client
            .post(self.notes_url())
            .json(draft)
            .send()
            .await
            .map_err(map_send_error)?;
        Self::decode(response).await
    }

    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> TransportResult<Note> {
        let response = self
            .client
            .patch(self.note_url(id))
            .json(patch)
            .send()
            .await
            .map_err(map_send_error)?;
        Self::decode(response).await
    }

    async fn delete_note(&self, id: NoteId) -> TransportResult<()> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(map_send_error)?;
        Self::expect_success(response).await
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() {
        return TransportError::Unreachable(err.to_string());
    }
    TransportError::Invalid(err.to_string())
}
