//! Tag table loader.
//!
//! ```toml
//! "minecraft:logs" = ["oak_log", "birch_log"]
//! "c:gems" = ["emerald", "diamond"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use shrine_core::{ResourceId, TagTable};

use crate::loaders::{LoadResult, read_file};

pub struct TagLoader;

impl TagLoader {
    pub fn load(path: &Path) -> LoadResult<TagTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load tags {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TagTable> {
        let raw: BTreeMap<String, Vec<String>> = toml::from_str(content)?;

        let mut table = TagTable::new();
        for (tag, members) in raw {
            let tag = ResourceId::parse(&tag)?;
            for member in members {
                table.insert(tag.clone(), ResourceId::parse(&member)?);
            }
        }
        Ok(table)
    }
}
