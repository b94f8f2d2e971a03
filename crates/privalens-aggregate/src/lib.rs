//! PrivaLens Aggregate Metrics
//!
//! Pure, stateless functions deriving cross-profile summary metrics from a
//! session's result set. Analyses with an `error` are excluded from every
//! numeric rollup but are still grouped for display.

use privalens_core::{Platform, ProfileAnalysis, SettingValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One profile inside a platform group, keeping its originating URL for
/// display alongside the analysis fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEntry {
    pub url: String,
    #[serde(flatten)]
    pub analysis: ProfileAnalysis,
}

/// Cross-profile summary computed on demand from stored analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub overall_score: u32,
    pub public_info_count: usize,
    pub third_party_access: u32,
    pub by_platform: BTreeMap<Platform, Vec<PlatformEntry>>,
}

impl AggregateSummary {
    pub fn compute(results: &BTreeMap<String, ProfileAnalysis>) -> Self {
        Self {
            overall_score: overall_score(results),
            public_info_count: public_info_count(results),
            third_party_access: third_party_access_estimate(results),
            by_platform: group_by_platform(results),
        }
    }
}

/// Arithmetic mean of `privacy_score` over non-failed entries, rounded to
/// the nearest integer. Zero when no entry is eligible.
pub fn overall_score(results: &BTreeMap<String, ProfileAnalysis>) -> u32 {
    let scores: Vec<u32> = results
        .values()
        .filter(|analysis| !analysis.is_failed())
        .map(|analysis| u32::from(analysis.risk_assessment.privacy_score))
        .collect();

    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().sum();
    (f64::from(sum) / scores.len() as f64).round() as u32
}

/// Heuristic exposure count: settings across non-failed entries whose
/// value is boolean `true` or a string containing "public". Exactly this
/// rule, nothing more.
pub fn public_info_count(results: &BTreeMap<String, ProfileAnalysis>) -> usize {
    results
        .values()
        .filter(|analysis| !analysis.is_failed())
        .flat_map(|analysis| analysis.privacy_settings.values())
        .filter(|value| match value {
            SettingValue::Bool(flag) => *flag,
            SettingValue::Text(text) => text.contains("public"),
        })
        .count()
}

/// Capped heuristic for third-party app access, derived from the number of
/// non-failed profiles: `min(2n + min(n, 4), 12)`. The deterministic
/// second term replaces the randomized one this estimate historically
/// carried; it is monotonically non-decreasing in the profile count and
/// bounded above by 12.
pub fn third_party_access_estimate(results: &BTreeMap<String, ProfileAnalysis>) -> u32 {
    let count = results
        .values()
        .filter(|analysis| !analysis.is_failed())
        .count() as u32;

    if count == 0 {
        return 0;
    }
    (2 * count + count.min(4)).min(12)
}

/// Partition entries by platform, preserving the result map's iteration
/// order within each group. Every entry appears exactly once, failed
/// analyses included: grouping is for display, not numeric rollup.
pub fn group_by_platform(
    results: &BTreeMap<String, ProfileAnalysis>,
) -> BTreeMap<Platform, Vec<PlatformEntry>> {
    let mut grouped: BTreeMap<Platform, Vec<PlatformEntry>> = BTreeMap::new();
    for (url, analysis) in results {
        grouped
            .entry(analysis.platform)
            .or_default()
            .push(PlatformEntry {
                url: url.clone(),
                analysis: analysis.clone(),
            });
    }
    grouped
}
