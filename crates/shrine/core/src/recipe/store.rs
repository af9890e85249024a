use tracing::{debug, info, warn};

use super::{LoadedRecipe, Recipe, Trigger};
use crate::types::{ItemStack, RecipeId};
use crate::world::TagTable;

/// Ordered recipe collection for one world load.
///
/// Register everything, call [`sort_by_priority`](Self::sort_by_priority)
/// once, then look up. Lookups on an unsorted store still work but may pick a
/// lower-priority recipe; they are logged.
#[derive(Clone, Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<LoadedRecipe>,
    item_tags: TagTable,
    sorted: bool,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that resolves tag ingredients against `item_tags`.
    pub fn with_item_tags(item_tags: TagTable) -> Self {
        Self {
            item_tags,
            ..Self::default()
        }
    }

    pub fn item_tags(&self) -> &TagTable {
        &self.item_tags
    }

    /// Appends a recipe. Ids are not deduplicated.
    pub fn register(&mut self, id: RecipeId, recipe: Recipe) {
        info!(target: "shrine::recipe", %id, priority = recipe.priority, "registered recipe");
        self.recipes.push(LoadedRecipe { id, recipe });
        self.sorted = false;
    }

    /// Stable sort, highest priority first.
    pub fn sort_by_priority(&mut self) {
        self.recipes
            .sort_by(|a, b| b.recipe.priority.cmp(&a.recipe.priority));
        self.sorted = true;
        info!(target: "shrine::recipe", count = self.recipes.len(), "sorted recipes by priority");
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// First recipe matching `trigger` and `item`, in store order.
    pub fn find_recipe(&self, trigger: Trigger, item: &ItemStack) -> Option<&LoadedRecipe> {
        if !self.sorted && self.recipes.len() > 1 {
            warn!(
                target: "shrine::recipe",
                count = self.recipes.len(),
                "recipe lookup on an unsorted store"
            );
        }

        let found = self
            .recipes
            .iter()
            .find(|loaded| loaded.recipe.matches(trigger, item, &self.item_tags));
        debug!(
            target: "shrine::recipe",
            %trigger,
            %item,
            recipe = ?found.map(|l| &l.id),
            "recipe lookup"
        );
        found
    }

    pub fn get(&self, id: &RecipeId) -> Option<&LoadedRecipe> {
        self.recipes.iter().find(|loaded| &loaded.id == id)
    }

    pub fn recipes(&self) -> &[LoadedRecipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
        self.sorted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::DropItem;
    use crate::recipe::Ingredient;
    use crate::types::ResourceId;

    fn recipe_id(path: &str) -> RecipeId {
        ResourceId::from_parts("kamigami", path)
    }

    fn dropping(path: &str) -> Recipe {
        Recipe::new(Trigger::OnBreak, DropItem::new(ResourceId::vanilla(path), 1))
    }

    fn charm() -> ResourceId {
        ResourceId::from_parts("kamigami", "charm_of_swamp_deity")
    }

    #[test]
    fn highest_priority_wins_after_sort() {
        let mut store = RecipeStore::new();
        store.register(
            recipe_id("generic"),
            dropping("dirt").with_ingredient(Ingredient::item(charm())),
        );
        store.register(
            recipe_id("swamp"),
            dropping("clay").with_ingredient(Ingredient::item(charm())).with_priority(100),
        );
        assert!(!store.is_sorted());

        // unsorted: registration order decides
        let first = store.find_recipe(Trigger::OnBreak, &ItemStack::single(charm()));
        assert_eq!(first.map(|l| l.id.path()), Some("generic"));

        store.sort_by_priority();
        let best = store.find_recipe(Trigger::OnBreak, &ItemStack::single(charm()));
        assert_eq!(best.map(|l| l.id.path()), Some("swamp"));
    }

    #[test]
    fn equal_priorities_keep_registration_order() {
        let mut store = RecipeStore::new();
        for path in ["a", "b", "c"] {
            store.register(recipe_id(path), dropping("dirt"));
        }
        store.register(recipe_id("low"), dropping("dirt").with_priority(-5));
        store.sort_by_priority();

        let order: Vec<_> = store.recipes().iter().map(|l| l.id.path()).collect();
        assert_eq!(order, vec!["a", "b", "c", "low"]);
        assert_eq!(
            store
                .find_recipe(Trigger::OnBreak, &ItemStack::empty())
                .map(|l| l.id.path()),
            Some("a")
        );
    }

    #[test]
    fn no_match_is_none() {
        let mut store = RecipeStore::new();
        store.register(recipe_id("empty_only"), dropping("dirt"));
        store.sort_by_priority();
        assert!(
            store
                .find_recipe(Trigger::OnBreak, &ItemStack::single(charm()))
                .is_none()
        );
        assert!(
            store
                .find_recipe(Trigger::OnInsert, &ItemStack::empty())
                .is_none()
        );
    }

    #[test]
    fn tag_ingredients_use_store_tags() {
        let gems = ResourceId::from_parts("c", "gems");
        let tags = TagTable::new().with(gems.clone(), [ResourceId::vanilla("emerald")]);
        let mut store = RecipeStore::with_item_tags(tags);
        store.register(recipe_id("gem"), dropping("dirt").with_ingredient(Ingredient::tag(gems)));
        store.sort_by_priority();

        let emerald = ItemStack::single(ResourceId::vanilla("emerald"));
        assert!(store.find_recipe(Trigger::OnBreak, &emerald).is_some());
    }

    #[test]
    fn accessors_and_clear() {
        let mut store = RecipeStore::new();
        assert!(store.is_empty());
        store.register(recipe_id("one"), dropping("dirt"));
        store.sort_by_priority();
        assert_eq!(store.len(), 1);
        assert!(store.get(&recipe_id("one")).is_some());
        assert!(store.get(&recipe_id("two")).is_none());

        store.clear();
        assert!(store.is_empty());
        assert!(!store.is_sorted());
    }
}
