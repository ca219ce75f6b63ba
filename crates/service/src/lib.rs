//! Service layer for the launchboard product catalog.
//! - Categories, products and the vote ledger over seeded in-memory state.
//! - Every call awaits an injected latency and returns owned copies.
//! - `ServiceContext` wires the services together; no global instances.

pub mod errors;
pub mod clock;
pub mod latency;
pub mod storage;
pub mod services;
pub mod context;
pub mod optimistic;
#[cfg(test)]
pub mod test_support;

pub use context::ServiceContext;
pub use errors::ServiceError;
