//! Per-world-load recipe store and trigger dispatch.

use shrine_content::{ContentFactory, RecipeSource, build_store};
use shrine_core::{ActionContext, ActionRng, EngineConfig, RecipeStore, World};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::event::{FireOutcome, TriggerEvent};

/// Owns the recipe store of one world load and fires trigger events against
/// host worlds.
#[derive(Clone, Debug, Default)]
pub struct ShrineRuntime {
    config: EngineConfig,
    store: RecipeStore,
}

impl ShrineRuntime {
    /// Runtime over an already assembled store. The store is sorted if it is
    /// not already.
    pub fn new(config: EngineConfig, mut store: RecipeStore) -> Self {
        if !store.is_sorted() {
            store.sort_by_priority();
        }
        Self { config, store }
    }

    /// Loads config, item tags and recipes from a data directory.
    pub fn load(factory: &ContentFactory) -> Result<Self> {
        let config = factory.load_config()?;
        let item_tags = factory.load_item_tags()?;
        let store = build_store(factory, item_tags, config.use_builtin_defaults);
        info!(
            target: "shrine::runtime",
            data_dir = %factory.data_dir().display(),
            recipes = store.len(),
            "runtime loaded"
        );
        Ok(Self { config, store })
    }

    /// Rebuilds the store from `source`, keeping the current item tags.
    pub fn reload(&mut self, source: &dyn RecipeSource) {
        let item_tags = self.store.item_tags().clone();
        self.store = build_store(source, item_tags, self.config.use_builtin_defaults);
        info!(
            target: "shrine::runtime",
            source = %source.describe(),
            recipes = self.store.len(),
            "recipe store reloaded"
        );
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Looks up the recipe for `event` and runs it against `world`.
    pub fn fire(
        &self,
        event: &TriggerEvent,
        world: &mut dyn World,
        rng: &mut ActionRng,
    ) -> FireOutcome {
        let Some(loaded) = self.store.find_recipe(event.trigger, &event.item) else {
            debug!(
                target: "shrine::runtime",
                trigger = %event.trigger,
                pos = %event.origin,
                item = %event.item,
                "no recipe"
            );
            return FireOutcome::NoRecipe;
        };

        if !loaded.recipe.permits(event.protected) {
            info!(
                target: "shrine::runtime",
                recipe = %loaded.id,
                pos = %event.origin,
                "recipe suppressed by protection"
            );
            return FireOutcome::Suppressed {
                recipe: loaded.id.clone(),
            };
        }

        let mut ctx = ActionContext::new(world, event.origin, event.actor, &event.item, rng);
        let outcome = loaded.recipe.actions.execute(&mut ctx);

        if outcome.is_clean() {
            info!(
                target: "shrine::runtime",
                recipe = %loaded.id,
                pos = %event.origin,
                applied = outcome.applied,
                "recipe executed"
            );
        } else {
            warn!(
                target: "shrine::runtime",
                recipe = %loaded.id,
                pos = %event.origin,
                applied = outcome.applied,
                faults = outcome.faults.len(),
                "recipe executed with faults"
            );
        }

        FireOutcome::Executed {
            recipe: loaded.id.clone(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use shrine_core::{
        BlockPos, DropItem, InMemoryWorld, ItemStack, Recipe, RecipeId, ResourceId, Trigger,
    };

    use super::*;

    fn dropping_recipe(path: &str) -> (RecipeId, Recipe) {
        (
            ResourceId::from_parts("kamigami", path),
            Recipe::new(Trigger::OnInsert, DropItem::new(ResourceId::vanilla("diamond"), 1)),
        )
    }

    #[test]
    fn new_sorts_unsorted_store() {
        let mut store = RecipeStore::new();
        let (id, recipe) = dropping_recipe("a");
        store.register(id, recipe);
        let runtime = ShrineRuntime::new(EngineConfig::default(), store);
        assert!(runtime.store().is_sorted());
    }

    #[test]
    fn fire_without_match() {
        let runtime = ShrineRuntime::default();
        let mut world = InMemoryWorld::new(1);
        let mut rng = ActionRng::new(1);
        let event = TriggerEvent::new(Trigger::OnTick, BlockPos::ORIGIN)
            .with_item(ItemStack::single(ResourceId::vanilla("stick")));
        assert_eq!(runtime.fire(&event, &mut world, &mut rng), FireOutcome::NoRecipe);
    }

    #[test]
    fn reload_replaces_recipes() {
        let mut runtime = ShrineRuntime::default();
        runtime.reload(&vec![dropping_recipe("a"), dropping_recipe("b")]);
        assert_eq!(runtime.store().len(), 2);

        runtime.reload(&vec![dropping_recipe("c")]);
        assert_eq!(runtime.store().len(), 1);
        assert!(runtime.store().is_sorted());
    }
}
