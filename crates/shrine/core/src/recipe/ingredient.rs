use serde::{Deserialize, Serialize};

use crate::types::{ItemId, ItemStack, TagId};
use crate::world::TagTable;

/// Item predicate of a recipe.
///
/// JSON forms: `{"item": "kamigami:charm_of_fire_deity"}`, `{"tag": "c:gems"}`,
/// or a list of those meaning any-of.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Item { item: ItemId },
    Tag { tag: TagId },
    AnyOf(Vec<Ingredient>),
}

impl Ingredient {
    pub fn item(item: ItemId) -> Self {
        Self::Item { item }
    }

    pub fn tag(tag: TagId) -> Self {
        Self::Tag { tag }
    }

    /// Whether a non-empty `stack` satisfies this predicate. Empty stacks never
    /// satisfy an ingredient.
    pub fn test(&self, stack: &ItemStack, item_tags: &TagTable) -> bool {
        let Some(id) = stack.id() else {
            return false;
        };
        match self {
            Self::Item { item } => item == id,
            Self::Tag { tag } => item_tags.contains(tag, id),
            Self::AnyOf(options) => options.iter().any(|o| o.test(stack, item_tags)),
        }
    }
}
