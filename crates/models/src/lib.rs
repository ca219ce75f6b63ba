//! Domain records for the launchboard service layer.
//! - Products, categories and vote ledger entries, serialized in camelCase.
//! - Typed create/patch inputs that reject server-owned fields at the boundary.
//! - The built-in seed dataset.

pub mod errors;
pub mod category;
pub mod product;
pub mod vote;
pub mod timeframe;
pub mod feed;
pub mod seed;
