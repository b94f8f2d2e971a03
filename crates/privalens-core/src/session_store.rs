//! Session store trait
//!
//! The `SessionStore` trait abstracts the keyed session storage so the
//! reference in-process map and a durable backend are interchangeable
//! behind the same interface.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::session::{Session, SessionId};
use crate::types::ProfileAnalysis;
use crate::Result;

/// Durable mapping from session id to submitted URLs and their analyses.
///
/// Implementations must serialize merges per session id (at most one
/// concurrent merge per id) while letting distinct ids proceed in
/// parallel, and must expose merges atomically: a reader sees either the
/// pre-merge or the post-merge session, never a half-updated one.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Resolve a caller-supplied session id.
    ///
    /// * `Some(id)` that exists — returns the same id.
    /// * `Some(id)` that is unknown — `Error::SessionNotFound`; the caller
    ///   decides whether that is fatal.
    /// * `None` — generates a fresh unique id.
    ///
    /// # Errors
    /// - `Error::SessionNotFound` for an unknown supplied id
    /// - `Error::Store` for storage failures
    async fn get_or_create(&self, session_id: Option<&str>) -> Result<SessionId>;

    /// Merge a submission into the session, creating it when absent.
    ///
    /// `new_urls` append to the session's URL history without
    /// de-duplication; `new_results` upsert by URL (last write wins).
    /// Returns the full merged session.
    ///
    /// # Errors
    /// - `Error::Store` for storage failures
    async fn merge(
        &self,
        session_id: &str,
        new_urls: Vec<String>,
        new_results: BTreeMap<String, ProfileAnalysis>,
    ) -> Result<Session>;

    /// Fetch a session snapshot.
    ///
    /// # Errors
    /// - `Error::SessionNotFound` when the id is unknown
    /// - `Error::Store` for storage failures
    async fn get(&self, session_id: &str) -> Result<Session>;

    /// Remove a session. Idempotent: clearing an absent id succeeds.
    ///
    /// # Errors
    /// - `Error::Store` for storage failures
    async fn clear(&self, session_id: &str) -> Result<()>;

    /// Number of live sessions, for diagnostics
    async fn session_count(&self) -> Result<usize> {
        Ok(0)
    }
}
