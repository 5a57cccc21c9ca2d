//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise the store against the real
//!   environment configuration.
//! - Keep output deterministic for quick local sanity checks.

use notecard_core::{NoteCache, NoteStore, OfflineWritePolicy, RemoteConfig};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let remote = RemoteConfig::from_env();
    let cache_dir = std::env::temp_dir().join("notecard-cli");

    let cache = match NoteCache::open(&cache_dir) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("notecard: cannot open cache: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = match NoteStore::open(remote.as_ref(), cache, OfflineWritePolicy::Reject) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("notecard: cannot build store: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("notecard_core version={}", notecard_core::core_version());
    println!("remote_configured={}", store.remote_configured());

    match store.list().await {
        Ok(outcome) => {
            println!("notes={} source={}", outcome.notes.len(), outcome.source);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("notecard: list failed: {err}");
            ExitCode::FAILURE
        }
    }
}
