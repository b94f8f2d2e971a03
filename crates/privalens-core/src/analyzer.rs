//! Profile analyzer trait

use async_trait::async_trait;

use crate::types::ProfileAnalysis;

/// Turns a profile URL into a privacy assessment.
///
/// The underlying crawl is I/O-bound and may be slow or fail, so the call
/// is async; failure never surfaces as a Rust error. A failed crawl
/// produces an analysis with the `error` field set, which downstream
/// consumers list but exclude from numeric rollups. The reference
/// implementation is a simulator; a real crawler substitutes behind this
/// trait without changing callers.
#[async_trait]
pub trait ProfileAnalyzer: Send + Sync {
    /// Analyze one profile URL
    async fn analyze(&self, url: &str) -> ProfileAnalysis;
}
