//! Recipes: which action tree runs for which trigger and held item.

mod ingredient;
mod store;
mod trigger;

pub use ingredient::Ingredient;
pub use store::RecipeStore;
pub use trigger::Trigger;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::Action;
use crate::error::{ErrorSeverity, ShrineError};
use crate::types::{ItemStack, RecipeId};
use crate::world::TagTable;

/// Trigger and item predicate plus the consequence tree they unlock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub trigger: Trigger,

    /// `None` matches only an empty shrine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Ingredient>,

    /// Suppress the recipe when the trigger came with protection (for a
    /// broken shrine: the breaking tool had silk touch).
    #[serde(
        default,
        rename = "require_no_silk_touch",
        alias = "require_no_protection"
    )]
    pub require_no_protection: bool,

    pub actions: Action,

    /// Higher priorities are consulted first.
    #[serde(default)]
    pub priority: i32,
}

impl Recipe {
    pub fn new(trigger: Trigger, actions: impl Into<Action>) -> Self {
        Self {
            trigger,
            ingredient: None,
            require_no_protection: false,
            actions: actions.into(),
            priority: 0,
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredient = Some(ingredient);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn requiring_no_protection(mut self) -> Self {
        self.require_no_protection = true;
        self
    }

    pub fn matches(&self, trigger: Trigger, stack: &ItemStack, item_tags: &TagTable) -> bool {
        if self.trigger != trigger {
            return false;
        }
        match &self.ingredient {
            None => stack.is_empty(),
            Some(ingredient) => ingredient.test(stack, item_tags),
        }
    }

    /// Whether the recipe may fire given the trigger's protection state.
    pub fn permits(&self, protected: bool) -> bool {
        !(self.require_no_protection && protected)
    }

    pub fn from_json(value: Value) -> Result<Self, RecipeError> {
        serde_json::from_value(value).map_err(|err| RecipeError::Decode(err.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RecipeError> {
        serde_json::from_str(raw).map_err(|err| RecipeError::Decode(err.to_string()))
    }

    pub fn to_json(&self) -> Result<Value, RecipeError> {
        serde_json::to_value(self).map_err(|err| RecipeError::Encode(err.to_string()))
    }
}

/// Recipe registered under an id.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedRecipe {
    pub id: RecipeId,
    pub recipe: Recipe,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe definition is invalid: {0}")]
    Decode(String),

    #[error("recipe could not be encoded: {0}")]
    Encode(String),
}

impl ShrineError for RecipeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Decode(_) => ErrorSeverity::Validation,
            Self::Encode(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "RECIPE_DECODE",
            Self::Encode(_) => "RECIPE_ENCODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::action::DropItem;
    use crate::types::ResourceId;

    fn charm() -> ResourceId {
        ResourceId::from_parts("kamigami", "charm_of_swamp_deity")
    }

    #[test]
    fn empty_ingredient_matches_only_empty_items() {
        let tags = TagTable::new();
        let recipe = Recipe::new(Trigger::OnBreak, DropItem::new(ResourceId::vanilla("dirt"), 1));

        assert!(recipe.matches(Trigger::OnBreak, &ItemStack::empty(), &tags));
        assert!(!recipe.matches(Trigger::OnBreak, &ItemStack::single(charm()), &tags));
        assert!(!recipe.matches(Trigger::OnTick, &ItemStack::empty(), &tags));
    }

    #[test]
    fn ingredient_recipes_never_match_empty_items() {
        let tags = TagTable::new();
        let recipe = Recipe::new(Trigger::OnBreak, DropItem::new(ResourceId::vanilla("dirt"), 1))
            .with_ingredient(Ingredient::item(charm()));
        assert!(recipe.matches(Trigger::OnBreak, &ItemStack::single(charm()), &tags));
        assert!(!recipe.matches(Trigger::OnBreak, &ItemStack::empty(), &tags));
    }

    #[test]
    fn protection_gate() {
        let open = Recipe::new(Trigger::OnBreak, DropItem::new(ResourceId::vanilla("dirt"), 1));
        let guarded = open.clone().requiring_no_protection();
        assert!(open.permits(true));
        assert!(guarded.permits(false));
        assert!(!guarded.permits(true));
    }

    #[test]
    fn decodes_authored_definition() {
        let recipe = Recipe::from_json(json!({
            "trigger": "ON_BREAK",
            "ingredient": { "item": "kamigami:charm_of_swamp_deity" },
            "require_no_silk_touch": true,
            "actions": { "type": "drop_item", "item": "clay_ball", "count": 3 },
            "priority": 100
        }))
        .unwrap();

        assert_eq!(recipe.trigger, Trigger::OnBreak);
        assert!(recipe.require_no_protection);
        assert_eq!(recipe.priority, 100);

        let encoded = recipe.to_json().unwrap();
        assert_eq!(encoded["trigger"], json!("on_break"));
        assert_eq!(encoded["require_no_silk_touch"], json!(true));
        assert_eq!(Recipe::from_json(encoded).unwrap(), recipe);
    }

    #[test]
    fn defaults_apply_to_optional_fields() {
        let recipe = Recipe::from_json_str(
            r#"{"trigger": "on_tick", "actions": {"type": "sequence", "steps": []}}"#,
        )
        .unwrap();
        assert_eq!(recipe.priority, 0);
        assert!(!recipe.require_no_protection);
        assert!(recipe.ingredient.is_none());
    }

    #[test]
    fn rejects_unknown_trigger() {
        let err = Recipe::from_json(json!({
            "trigger": "on_explode",
            "actions": { "type": "sequence", "steps": [] }
        }))
        .unwrap_err();
        assert_eq!(err.error_code(), "RECIPE_DECODE");
    }
}
