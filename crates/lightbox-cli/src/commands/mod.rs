pub mod info;
pub mod scan;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use lightbox_core::content::Article;

/// Read and parse a TOML article file.
pub(crate) fn load_article(path: &Path) -> Result<Article> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid article file {}", path.display()))
}
