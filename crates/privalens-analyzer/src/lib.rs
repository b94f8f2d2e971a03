//! PrivaLens Profile Analyzer
//!
//! Simulated crawler behind the `ProfileAnalyzer` trait: classifies the
//! URL, derives a display username, and seeds the assessment from a fixed
//! per-platform template. A real crawler replaces `SimulatedAnalyzer`
//! without touching any caller.

mod simulated;
mod templates;

pub use simulated::SimulatedAnalyzer;
