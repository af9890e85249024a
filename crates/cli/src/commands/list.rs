//! List the recipes a world load would use

use anyhow::Result;
use clap::Parser;
use shrine_content::ContentFactory;
use shrine_core::{Ingredient, Trigger};
use shrine_runtime::ShrineRuntime;

use crate::config::CliConfig;

/// List recipes in lookup order
#[derive(Parser, Debug)]
pub struct List {
    /// Only recipes fired by this trigger (on_break, on_insert, on_tick)
    #[arg(long)]
    pub trigger: Option<Trigger>,
}

impl List {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let runtime = ShrineRuntime::load(&ContentFactory::new(&config.data_dir))?;

        println!(
            "{:>8}  {:<10}  {:<44}  {:<36}  ACTIONS",
            "PRIORITY", "TRIGGER", "RECIPE", "INGREDIENT"
        );
        for loaded in runtime.store().recipes() {
            let recipe = &loaded.recipe;
            if self.trigger.is_some_and(|t| t != recipe.trigger) {
                continue;
            }
            let guard = if recipe.require_no_protection { " (no silk touch)" } else { "" };
            println!(
                "{:>8}  {:<10}  {:<44}  {:<36}  {}{}",
                recipe.priority,
                recipe.trigger,
                loaded.id,
                describe(recipe.ingredient.as_ref()),
                recipe.actions.type_tag(),
                guard
            );
        }
        Ok(())
    }
}

fn describe(ingredient: Option<&Ingredient>) -> String {
    match ingredient {
        None => "(empty)".to_string(),
        Some(Ingredient::Item { item }) => item.to_string(),
        Some(Ingredient::Tag { tag }) => format!("#{tag}"),
        Some(Ingredient::AnyOf(options)) => options
            .iter()
            .map(|o| describe(Some(o)))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

#[cfg(test)]
mod tests {
    use shrine_core::ResourceId;

    use super::*;

    #[test]
    fn describes_ingredients() {
        assert_eq!(describe(None), "(empty)");
        let any = Ingredient::AnyOf(vec![
            Ingredient::item(ResourceId::vanilla("emerald")),
            Ingredient::tag(ResourceId::from_parts("c", "gems")),
        ]);
        assert_eq!(describe(Some(&any)), "minecraft:emerald | #c:gems");
    }
}
