//! Shared runtime helpers for the launchboard workspace.
//!
//! - `utils::logging`: tracing subscriber setup (compact or JSON)
//! - `env`: `.env` loading and seed directory sanity checks

pub mod env;
pub mod utils;
