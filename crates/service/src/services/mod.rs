//! Category, product and vote services over seeded in-memory state.

pub mod category_service;
pub mod product_service;
pub mod vote_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
pub use vote_service::VoteService;
