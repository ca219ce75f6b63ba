//! Environment/runtime helpers
//!
//! Loads `.env` early and sanity-checks an optional seed directory at startup.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Seed files expected inside a seed directory.
pub const SEED_FILES: [&str; 3] = ["products.json", "categories.json", "votes.json"];

/// Load `.env` if present so `RUST_LOG` and `CONFIG_PATH` take effect.
/// Runs before logging is set up, so the loaded path is returned for the
/// caller to log.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Ensure the seed directory exists and warn on missing seed files.
pub async fn ensure_seed_dir(seed_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(seed_dir).await.is_err() {
        return Err(anyhow::anyhow!("seed directory {seed_dir} not found"));
    }
    for file in SEED_FILES {
        let path = Path::new(seed_dir).join(file);
        if tokio::fs::metadata(&path).await.is_err() {
            warn!(path = %path.display(), "seed file missing; loading will fail");
        }
    }
    Ok(())
}
