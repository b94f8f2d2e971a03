//! PrivaLens Core Types and Traits
//!
//! This crate provides the fundamental types and traits used throughout PrivaLens:
//! - Profile analysis data model (platforms, settings, risk assessments)
//! - Session types and the session store abstraction
//! - Analyzer trait abstraction
//! - Core error types

pub mod analyzer;
pub mod error;
pub mod platform;
pub mod session;
pub mod session_store;
pub mod types;

pub use analyzer::ProfileAnalyzer;
pub use error::{Error, Result};
pub use platform::Platform;
pub use session::{Session, SessionId};
pub use session_store::SessionStore;
pub use types::{MetricValue, ProfileAnalysis, RiskAssessment, RiskLevel, SettingValue};
