//! Content loaders for reading shrine data from files.
//!
//! Recipe definitions are JSON (the same `"type"`-tagged format the action
//! registry emits); engine configuration and tag tables are TOML.

pub mod config;
pub mod factory;
pub mod recipes;
pub mod source;
pub mod tags;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use recipes::RecipeLoader;
pub use source::{RecipeDir, RecipeSource, build_store};
pub use tags::TagLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
