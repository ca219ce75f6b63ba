//! Storage abstractions for service layer
//!
//! In-memory state seeded at construction and resettable, plus helpers that
//! read seed records from JSON files.

pub mod seeded_store;
pub mod seed_loader;
