//! Remote notes API access.
//!
//! # Responsibility
//! - Define the transport contract the store adapter depends on.
//! - Keep HTTP/JSON details inside the transport implementation.
//!
//! # Invariants
//! - Transport errors distinguish unreachability from rejection, because
//!   only unreachability may trigger cache fallback.
//! - Nothing in this layer retries automatically.

pub mod http;
pub mod transport;

pub use http::HttpTransport;
pub use transport::{NoteTransport, TransportError, TransportResult};
