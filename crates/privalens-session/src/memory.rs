//! In-memory keyed session storage

use async_trait::async_trait;
use dashmap::DashMap;
use privalens_core::{Error, ProfileAnalysis, Result, Session, SessionId, SessionStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// In-process `SessionStore` backed by a concurrent map.
///
/// Merges for the same session id are serialized through a per-id lock;
/// merges for different ids run in parallel with no global lock. A merge
/// builds the updated session and swaps it in whole, so readers observe
/// only pre- or post-merge snapshots.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, Session>,
    /// Per-id merge locks. Entries outlive `clear` so a merge racing a
    /// clear stays serialized with other merges for the same id.
    merge_locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn merge_lock(&self, session_id: &str) -> Arc<Mutex<()>> {
        self.merge_locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get_or_create(&self, session_id: Option<&str>) -> Result<SessionId> {
        match session_id {
            Some(id) if self.sessions.contains_key(id) => Ok(id.to_string()),
            Some(id) => Err(Error::SessionNotFound(id.to_string())),
            None => {
                let id = Uuid::new_v4().to_string();
                debug!(session_id = %id, "generated session id");
                Ok(id)
            }
        }
    }

    async fn merge(
        &self,
        session_id: &str,
        new_urls: Vec<String>,
        new_results: BTreeMap<String, ProfileAnalysis>,
    ) -> Result<Session> {
        let lock = self.merge_lock(session_id);
        let _guard = lock.lock().await;

        let mut session = self
            .sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| Session::new(session_id));
        session.merge(new_urls, new_results);

        debug!(
            session_id,
            urls = session.urls.len(),
            results = session.result_count(),
            "merged submission into session"
        );
        self.sessions.insert(session_id.to_string(), session.clone());
        Ok(session)
    }

    async fn get(&self, session_id: &str) -> Result<Session> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::SessionNotFound(session_id.to_string()))
    }

    async fn clear(&self, session_id: &str) -> Result<()> {
        self.sessions.remove(session_id);
        Ok(())
    }

    async fn session_count(&self) -> Result<usize> {
        Ok(self.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use privalens_core::{Platform, RiskAssessment, RiskLevel};

    fn analysis(username: &str, score: u8) -> ProfileAnalysis {
        ProfileAnalysis {
            platform: Platform::Twitter,
            username: username.to_string(),
            timestamp: Utc::now(),
            privacy_settings: BTreeMap::new(),
            activity_data: BTreeMap::new(),
            risk_assessment: RiskAssessment::new(score, RiskLevel::Medium, vec![], vec![]),
            error: None,
        }
    }

    fn submission(url: &str, score: u8) -> (Vec<String>, BTreeMap<String, ProfileAnalysis>) {
        (
            vec![url.to_string()],
            BTreeMap::from([(url.to_string(), analysis("someone", score))]),
        )
    }

    #[tokio::test]
    async fn test_get_or_create_generates_fresh_ids() {
        let store = MemorySessionStore::new();
        let first = store.get_or_create(None).await.unwrap();
        let second = store.get_or_create(None).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_get_or_create_keeps_known_id() {
        let store = MemorySessionStore::new();
        let (urls, results) = submission("https://twitter.com/alice", 35);
        store.merge("known", urls, results).await.unwrap();

        let resolved = store.get_or_create(Some("known")).await.unwrap();
        assert_eq!(resolved, "known");
    }

    #[tokio::test]
    async fn test_get_or_create_reports_unknown_id() {
        let store = MemorySessionStore::new();
        let err = store.get_or_create(Some("missing")).await.unwrap_err();
        assert!(matches!(err, Error::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_merge_creates_session_when_absent() {
        let store = MemorySessionStore::new();
        let (urls, results) = submission("https://twitter.com/alice", 35);

        let session = store.merge("fresh", urls, results).await.unwrap();
        assert_eq!(session.session_id, "fresh");
        assert_eq!(session.urls.len(), 1);
        assert_eq!(session.result_count(), 1);
        assert_eq!(store.session_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_merge_last_write_wins_per_url() {
        let store = MemorySessionStore::new();
        let url = "https://twitter.com/alice";

        let (urls, results) = submission(url, 40);
        store.merge("s", urls, results).await.unwrap();
        let (urls, results) = submission(url, 60);
        let merged = store.merge("s", urls, results).await.unwrap();

        // urls records both submissions, results keeps only the second
        assert_eq!(merged.urls.len(), 2);
        assert_eq!(merged.result_count(), 1);
        assert_eq!(merged.results[url].risk_assessment.privacy_score, 60);
    }

    #[tokio::test]
    async fn test_get_unknown_is_session_not_found() {
        let store = MemorySessionStore::new();
        let err = store.get("nobody").await.unwrap_err();
        assert!(matches!(err, Error::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemorySessionStore::new();
        let (urls, results) = submission("https://x.com/bob", 35);
        store.merge("s", urls, results).await.unwrap();

        store.clear("s").await.unwrap();
        assert!(store.get("s").await.is_err());

        // Clearing again (or an id that never existed) still succeeds
        store.clear("s").await.unwrap();
        store.clear("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_same_session_merges_lose_nothing() {
        let store = Arc::new(MemorySessionStore::new());

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let url = format!("https://twitter.com/user{i}");
                    let (urls, results) = submission(&url, 50);
                    store.merge("shared", urls, results).await.unwrap();
                })
            })
            .collect();
        futures::future::join_all(tasks).await;

        let session = store.get("shared").await.unwrap();
        assert_eq!(session.urls.len(), 16);
        assert_eq!(session.result_count(), 16);
    }

    #[tokio::test]
    async fn test_distinct_sessions_are_independent() {
        let store = Arc::new(MemorySessionStore::new());

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let id = format!("session-{i}");
                    let (urls, results) = submission("https://instagram.com/carol", 65);
                    store.merge(&id, urls, results).await.unwrap();
                })
            })
            .collect();
        futures::future::join_all(tasks).await;

        assert_eq!(store.session_count().await.unwrap(), 8);
    }
}
