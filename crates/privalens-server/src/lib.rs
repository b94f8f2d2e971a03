//! PrivaLens HTTP Server
//!
//! Exposes the profile engine as a JSON API: submit profile URLs, read a
//! session's results and aggregates back, clear a session. Session ids
//! travel as opaque `user_id` strings; the caller persists them between
//! visits.

pub mod config;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{router, AppState};
