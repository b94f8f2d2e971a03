//! PrivaLens Session Facade
//!
//! `ProfileEngine` orchestrates the whole submit/read path: validate the
//! caller's URLs, resolve or create the session id, fan analyzer calls out
//! per URL, merge the analyses into the session store, and hand back the
//! merged session with freshly computed aggregates.
//!
//! The engine is explicitly constructed with its collaborators injected;
//! tests substitute fakes behind the `SessionStore` and `ProfileAnalyzer`
//! traits.

use privalens_aggregate::AggregateSummary;
use privalens_core::{
    Error, Platform, ProfileAnalysis, ProfileAnalyzer, Result, Session, SessionStore,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Engine tuning knobs
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on a single analyzer call. An overdue call is converted
    /// into an `error`-bearing analysis; it never fails the submission.
    pub analysis_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analysis_timeout: Duration::from_secs(30),
        }
    }
}

/// A session snapshot paired with its aggregates, as returned to callers
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub session: Session,
    pub aggregates: AggregateSummary,
}

/// Facade over classifier, analyzer, session store, and aggregator
pub struct ProfileEngine {
    store: Arc<dyn SessionStore>,
    analyzer: Arc<dyn ProfileAnalyzer>,
    config: EngineConfig,
}

impl ProfileEngine {
    pub fn new(store: Arc<dyn SessionStore>, analyzer: Arc<dyn ProfileAnalyzer>) -> Self {
        Self::with_config(store, analyzer, EngineConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn SessionStore>,
        analyzer: Arc<dyn ProfileAnalyzer>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            analyzer,
            config,
        }
    }

    /// Analyze the given profile URLs and merge them into the session.
    ///
    /// URLs are trimmed; blank entries are dropped. When nothing remains,
    /// the call fails with `Error::Validation` and no session is created.
    /// Analyses run concurrently and fail independently: one URL's failure
    /// (or timeout) lands in that URL's `error` slot while its siblings
    /// proceed. The merged session becomes visible to readers atomically.
    pub async fn submit(
        &self,
        urls: &[String],
        session_id: Option<&str>,
    ) -> Result<SessionSnapshot> {
        let cleaned: Vec<String> = urls
            .iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Err(Error::Validation(
                "at least one non-blank profile URL is required".to_string(),
            ));
        }

        let session_id = match self.store.get_or_create(session_id).await {
            Ok(id) => id,
            // An unknown caller-supplied id is not fatal here: the merge
            // below creates the session under that id.
            Err(Error::SessionNotFound(id)) => id,
            Err(other) => return Err(other),
        };

        let analyses =
            futures::future::join_all(cleaned.iter().map(|url| self.analyze_one(url))).await;

        // Last analysis wins for URLs repeated within this call
        let mut results: BTreeMap<String, ProfileAnalysis> = BTreeMap::new();
        for (url, analysis) in cleaned.iter().zip(analyses) {
            results.insert(url.clone(), analysis);
        }

        let session = self.store.merge(&session_id, cleaned, results).await?;
        info!(
            session_id = %session.session_id,
            urls = session.urls.len(),
            results = session.result_count(),
            "submission merged"
        );

        let aggregates = AggregateSummary::compute(&session.results);
        Ok(SessionSnapshot {
            session,
            aggregates,
        })
    }

    /// Read a session and its aggregates.
    ///
    /// # Errors
    /// `Error::SessionNotFound` when the id is unknown — the expected
    /// "no data yet" signal for first-time callers, distinct from
    /// `Error::Store`.
    pub async fn load(&self, session_id: &str) -> Result<SessionSnapshot> {
        let session = self.store.get(session_id).await?;
        let aggregates = AggregateSummary::compute(&session.results);
        Ok(SessionSnapshot {
            session,
            aggregates,
        })
    }

    /// Re-run analysis over the session's existing URLs. A session with no
    /// URLs yet refreshes to itself (no-op, not an error).
    pub async fn refresh(&self, session_id: &str) -> Result<SessionSnapshot> {
        let session = self.store.get(session_id).await?;
        if session.urls.is_empty() {
            let aggregates = AggregateSummary::compute(&session.results);
            return Ok(SessionSnapshot {
                session,
                aggregates,
            });
        }

        let urls = session.urls.clone();
        self.submit(&urls, Some(session_id)).await
    }

    /// Drop the session. Idempotent; clearing an unknown id succeeds.
    pub async fn clear(&self, session_id: &str) -> Result<()> {
        self.store.clear(session_id).await
    }

    /// Number of live sessions, for diagnostics
    pub async fn session_count(&self) -> Result<usize> {
        self.store.session_count().await
    }

    async fn analyze_one(&self, url: &str) -> ProfileAnalysis {
        match tokio::time::timeout(self.config.analysis_timeout, self.analyzer.analyze(url)).await
        {
            Ok(analysis) => analysis,
            Err(_) => {
                warn!(url, timeout = ?self.config.analysis_timeout, "profile analysis timed out");
                ProfileAnalysis::failed(
                    Platform::classify(url),
                    url.to_string(),
                    "analysis timed out",
                )
            }
        }
    }
}
