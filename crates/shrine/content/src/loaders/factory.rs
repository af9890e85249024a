//! Content factory for building recipe stores from data files.

use std::path::{Path, PathBuf};

use shrine_core::{EngineConfig, Recipe, RecipeId, RecipeStore, TagTable};
use tracing::info;

use crate::loaders::{
    ConfigLoader, LoadResult, RecipeLoader, RecipeSource, TagLoader, build_store,
};

/// Content factory that loads all shrine content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── tags/
/// │   ├── blocks.toml    (optional)
/// │   └── items.toml     (optional)
/// └── recipes/
///     └── *.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            info!(target: "shrine::content", path = %path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Recipe directory named by `config`.
    pub fn recipes_dir(&self, config: &EngineConfig) -> PathBuf {
        self.data_dir.join(&config.recipes_dir)
    }

    /// Load recipe definitions from the configured recipe directory.
    pub fn load_recipes(&self, config: &EngineConfig) -> LoadResult<Vec<(RecipeId, Recipe)>> {
        RecipeLoader::load_dir(&self.recipes_dir(config), &config.namespace)
    }

    /// Load block tags from `tags/blocks.toml`.
    pub fn load_block_tags(&self) -> LoadResult<TagTable> {
        self.load_tags("blocks")
    }

    /// Load item tags from `tags/items.toml`.
    pub fn load_item_tags(&self) -> LoadResult<TagTable> {
        self.load_tags("items")
    }

    fn load_tags(&self, kind: &str) -> LoadResult<TagTable> {
        let path = self.data_dir.join("tags").join(format!("{kind}.toml"));
        if !path.exists() {
            return Ok(TagTable::new());
        }
        TagLoader::load(&path)
    }

    /// Sorted recipe store with item tags, falling back to the built-in
    /// recipes when none load and the config allows it.
    pub fn build_recipe_store(&self) -> LoadResult<RecipeStore> {
        let config = self.load_config()?;
        let item_tags = self.load_item_tags()?;
        Ok(build_store(self, item_tags, config.use_builtin_defaults))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl RecipeSource for ContentFactory {
    fn load_recipes(&self) -> LoadResult<Vec<(RecipeId, Recipe)>> {
        let config = self.load_config()?;
        ContentFactory::load_recipes(self, &config)
    }

    fn describe(&self) -> String {
        self.data_dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use shrine_core::{ItemStack, ResourceId, Trigger};

    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.recipes_dir(&EngineConfig::default()),
            Path::new("/tmp/data/recipes")
        );
    }

    #[test]
    fn empty_data_dir_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), EngineConfig::default());

        let store = factory.build_recipe_store().unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn configured_directory_and_tags_are_used() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "namespace = \"shrines\"\nrecipes_dir = \"curses\"\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("curses")).unwrap();
        fs::create_dir_all(dir.path().join("tags")).unwrap();
        fs::write(dir.path().join("tags/items.toml"), "\"c:gems\" = [\"emerald\"]\n").unwrap();
        fs::write(
            dir.path().join("curses/gem.json"),
            r#"{
                "trigger": "on_insert",
                "ingredient": { "tag": "c:gems" },
                "actions": { "type": "drop_item", "item": "diamond" }
            }"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let store = factory.build_recipe_store().unwrap();
        assert_eq!(store.len(), 1);

        let found = store
            .find_recipe(Trigger::OnInsert, &ItemStack::single(ResourceId::vanilla("emerald")))
            .unwrap();
        assert_eq!(found.id.to_string(), "shrines:gem");
    }

    #[test]
    fn shipped_data_directory_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let config = factory.load_config().unwrap();
        let recipes = factory.load_recipes(&config).unwrap();
        assert!(!recipes.is_empty());
        assert!(recipes.iter().all(|(id, _)| id.namespace() == config.namespace));
    }
}
