//! Profile analysis data model
//!
//! These types mirror the wire format exactly: snake_case keys, integer
//! scores, and an `error` field that is omitted (never null) when absent.

use crate::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a single privacy setting.
///
/// Settings are either toggles (`true`/`false`) or enumerated strings such
/// as "public", "private", "friends", "everyone".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// Value of a single activity metric.
///
/// Activity data is open-ended: counts, flags, and free-form strings all
/// appear. Integer before float so whole numbers stay integers on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Int(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Bool(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// Risk band assigned by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Scored, categorized outcome of analyzing one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Privacy score in [0, 100]; higher is safer
    pub privacy_score: u8,

    /// Risk band. Owned by the analyzer's banding convention; consumers
    /// never re-derive it from the score.
    pub risk_level: RiskLevel,

    /// Concrete exposure findings, ordered by severity
    pub risk_factors: Vec<String>,

    /// Suggested mitigations, ordered to match the findings
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    /// Create an assessment, clamping the score into [0, 100]
    pub fn new(
        privacy_score: u8,
        risk_level: RiskLevel,
        risk_factors: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            privacy_score: privacy_score.min(100),
            risk_level,
            risk_factors,
            recommendations,
        }
    }
}

/// Analysis result for one submitted profile URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub platform: Platform,

    /// Display-only handle derived from the URL path
    pub username: String,

    /// When the analysis was produced
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub privacy_settings: BTreeMap<String, SettingValue>,

    #[serde(default)]
    pub activity_data: BTreeMap<String, MetricValue>,

    pub risk_assessment: RiskAssessment,

    /// Present when the analysis failed. A failed analysis still renders,
    /// but none of its other fields are trusted and aggregates skip it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProfileAnalysis {
    /// Build the failed shape for a URL whose analysis errored out.
    /// Sibling URLs in the same submission are unaffected.
    pub fn failed(platform: Platform, username: String, message: impl Into<String>) -> Self {
        Self {
            platform,
            username,
            timestamp: Utc::now(),
            privacy_settings: BTreeMap::new(),
            activity_data: BTreeMap::new(),
            risk_assessment: RiskAssessment::new(0, RiskLevel::High, Vec::new(), Vec::new()),
            error: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_analysis() -> ProfileAnalysis {
        ProfileAnalysis {
            platform: Platform::Twitter,
            username: "alice".to_string(),
            timestamp: Utc::now(),
            privacy_settings: BTreeMap::from([
                ("account_privacy".to_string(), SettingValue::from("public")),
                ("location_sharing".to_string(), SettingValue::from(true)),
            ]),
            activity_data: BTreeMap::from([
                ("post_count".to_string(), MetricValue::from(423)),
                ("verification_status".to_string(), MetricValue::from(false)),
            ]),
            risk_assessment: RiskAssessment::new(
                35,
                RiskLevel::High,
                vec!["Public account exposes your content to anyone".to_string()],
                vec!["Set your account to private".to_string()],
            ),
            error: None,
        }
    }

    #[test]
    fn test_error_field_omitted_when_absent() {
        let json = serde_json::to_value(healthy_analysis()).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["risk_assessment"]["privacy_score"], 35);
        assert_eq!(json["risk_assessment"]["risk_level"], "high");
    }

    #[test]
    fn test_error_field_present_when_failed() {
        let failed =
            ProfileAnalysis::failed(Platform::Unknown, "ghost".to_string(), "crawl timed out");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["error"], "crawl timed out");
        assert!(failed.is_failed());
    }

    #[test]
    fn test_setting_values_serialize_untagged() {
        let json = serde_json::to_value(healthy_analysis()).unwrap();
        assert_eq!(json["privacy_settings"]["account_privacy"], "public");
        assert_eq!(json["privacy_settings"]["location_sharing"], true);
        assert_eq!(json["activity_data"]["post_count"], 423);
        assert_eq!(json["activity_data"]["verification_status"], false);
    }

    #[test]
    fn test_analysis_roundtrip() {
        let analysis = healthy_analysis();
        let json = serde_json::to_string(&analysis).unwrap();
        let parsed: ProfileAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(analysis, parsed);
    }

    #[test]
    fn test_score_clamped_to_100() {
        let assessment = RiskAssessment::new(250, RiskLevel::Low, Vec::new(), Vec::new());
        assert_eq!(assessment.privacy_score, 100);
    }
}
