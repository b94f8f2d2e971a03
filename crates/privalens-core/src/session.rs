//! Session type: the durable record of one caller's submitted profiles

use crate::types::ProfileAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque session identifier (UUID v4 format when generated by the store)
pub type SessionId = String;

/// One caller's submitted profile URLs and their analyses.
///
/// Sessions are owned exclusively by the session store; callers only ever
/// see merged snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,

    /// Submission history in order, duplicates allowed
    pub urls: Vec<String>,

    /// Latest analysis per URL. Keys are the literal submitted URLs; the
    /// map's deterministic iteration order is the stable order consumers
    /// render in.
    pub results: BTreeMap<String, ProfileAnalysis>,

    /// Timestamp of the most recent merge
    pub last_updated: DateTime<Utc>,
}

impl Session {
    /// Create an empty session
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: session_id.into(),
            urls: Vec::new(),
            results: BTreeMap::new(),
            last_updated: Utc::now(),
        }
    }

    /// Append a submission: URLs accumulate as-is, results upsert by URL
    /// (last write wins), and `last_updated` is bumped.
    pub fn merge(
        &mut self,
        new_urls: Vec<String>,
        new_results: BTreeMap<String, ProfileAnalysis>,
    ) {
        self.urls.extend(new_urls);
        self.results.extend(new_results);
        self.last_updated = Utc::now();
    }

    /// Number of distinct analyzed URLs
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
