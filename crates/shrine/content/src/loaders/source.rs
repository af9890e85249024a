//! Recipe sources and store assembly.

use std::path::PathBuf;

use shrine_core::{Recipe, RecipeId, RecipeStore, TagTable};
use tracing::{error, info, warn};

use crate::defaults::register_default_recipes;
use crate::loaders::{LoadResult, RecipeLoader};

/// Anything that can produce recipe definitions on (re)load.
pub trait RecipeSource {
    fn load_recipes(&self) -> LoadResult<Vec<(RecipeId, Recipe)>>;

    /// Short description for logs.
    fn describe(&self) -> String {
        "recipe source".to_string()
    }
}

/// A directory of JSON recipe definitions.
#[derive(Clone, Debug)]
pub struct RecipeDir {
    pub dir: PathBuf,
    pub namespace: String,
}

impl RecipeDir {
    pub fn new(dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            namespace: namespace.into(),
        }
    }
}

impl RecipeSource for RecipeDir {
    fn load_recipes(&self) -> LoadResult<Vec<(RecipeId, Recipe)>> {
        RecipeLoader::load_dir(&self.dir, &self.namespace)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Recipes already in memory.
impl RecipeSource for Vec<(RecipeId, Recipe)> {
    fn load_recipes(&self) -> LoadResult<Vec<(RecipeId, Recipe)>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory recipe(s)", self.len())
    }
}

/// Builds a sorted store from `source`.
///
/// A source that fails or yields nothing falls back to the built-in recipes
/// when `use_builtin_defaults` is set; loaded recipes are never merged with
/// the defaults.
pub fn build_store(
    source: &dyn RecipeSource,
    item_tags: TagTable,
    use_builtin_defaults: bool,
) -> RecipeStore {
    let mut store = RecipeStore::with_item_tags(item_tags);

    let loaded = match source.load_recipes() {
        Ok(recipes) => recipes,
        Err(e) => {
            error!(target: "shrine::content", source = %source.describe(), error = %e, "recipe source failed");
            Vec::new()
        }
    };

    if loaded.is_empty() {
        if use_builtin_defaults {
            warn!(
                target: "shrine::content",
                source = %source.describe(),
                "no recipes found, registering defaults"
            );
            register_default_recipes(&mut store);
        } else {
            warn!(target: "shrine::content", source = %source.describe(), "no recipes found");
        }
        return store;
    }

    for (id, recipe) in loaded {
        store.register(id, recipe);
    }
    store.sort_by_priority();
    info!(
        target: "shrine::content",
        source = %source.describe(),
        count = store.len(),
        "recipe store ready"
    );
    store
}

#[cfg(test)]
mod tests {
    use shrine_core::{DropItem, ResourceId, Trigger};

    use super::*;
    use crate::defaults::default_recipes;

    struct Failing;

    impl RecipeSource for Failing {
        fn load_recipes(&self) -> LoadResult<Vec<(RecipeId, Recipe)>> {
            anyhow::bail!("disk on fire")
        }
    }

    fn one_recipe() -> Vec<(RecipeId, Recipe)> {
        vec![(
            ResourceId::from_parts("kamigami", "only"),
            Recipe::new(Trigger::OnBreak, DropItem::new(ResourceId::vanilla("dirt"), 1)),
        )]
    }

    #[test]
    fn loaded_recipes_replace_defaults() {
        let store = build_store(&one_recipe(), TagTable::new(), true);
        assert_eq!(store.len(), 1);
        assert!(store.is_sorted());
    }

    #[test]
    fn empty_or_failing_source_falls_back() {
        let empty: Vec<(RecipeId, Recipe)> = Vec::new();
        let store = build_store(&empty, TagTable::new(), true);
        assert_eq!(store.len(), default_recipes().len());

        let store = build_store(&Failing, TagTable::new(), true);
        assert_eq!(store.len(), default_recipes().len());
    }

    #[test]
    fn fallback_can_be_disabled() {
        let store = build_store(&Failing, TagTable::new(), false);
        assert!(store.is_empty());
    }
}
