use serde::{Deserialize, Serialize};

pub type CategoryId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Unique, URL-safe.
    pub slug: String,
    /// Display hint only.
    pub color: String,
}
