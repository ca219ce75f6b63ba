use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use models::seed::Seed;

use crate::errors::ServiceError;

pub const PRODUCTS_FILE: &str = "products.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const VOTES_FILE: &str = "votes.json";

/// Load `products.json`, `categories.json` and `votes.json` from a directory.
/// All three files are required.
pub async fn load_seed_dir<P: Into<PathBuf>>(dir: P) -> Result<Seed, ServiceError> {
    let dir = dir.into();
    let products = read_part(&dir, PRODUCTS_FILE).await?;
    let categories = read_part(&dir, CATEGORIES_FILE).await?;
    let votes = read_part(&dir, VOTES_FILE).await?;
    let seed = Seed::from_json_parts(&products, &categories, &votes)?;
    info!(
        dir = %dir.display(),
        products = seed.products.len(),
        categories = seed.categories.len(),
        votes = seed.votes.len(),
        "seed_loaded"
    );
    Ok(seed)
}

async fn read_part(dir: &Path, name: &str) -> Result<String, ServiceError> {
    let path = dir.join(name);
    fs::read_to_string(&path)
        .await
        .map_err(|e| ServiceError::Storage(format!("{}: {}", path.display(), e)))
}
