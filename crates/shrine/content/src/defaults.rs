//! Built-in shrine curses and the creature catalog they spawn.
//!
//! The defaults are registered only when no recipe definition loads; they are
//! a fallback, never merged with loaded content.

use shrine_core::{
    Action, Area, AreaBox, BlockPos, BlockState, Chance, ConditionalReplace, EntityArchetype,
    Ingredient, PaletteEntry, PlayEffects, Recipe, RecipeId, RecipeStore, ReplaceBlock,
    ResourceId, Sequence, SpawnEntity, Trigger, Vec3,
};
use tracing::info;

const NAMESPACE: &str = "kamigami";

/// Priority of charm-specific curses; the plain shrine curse sits at 0.
pub const CHARM_PRIORITY: i32 = 100;

fn mod_id(path: &str) -> ResourceId {
    ResourceId::from_parts(NAMESPACE, path)
}

fn block(path: &str) -> BlockState {
    BlockState::of(ResourceId::vanilla(path))
}

fn uniform_palette(paths: &[&str]) -> ReplaceBlock {
    ReplaceBlock::palette(paths.iter().map(|path| PaletteEntry::from(block(path))))
}

fn explosion(volume: f32, pitch: f32, particle: &str) -> Action {
    PlayEffects::default()
        .sound(ResourceId::vanilla("entity.generic.explode"), volume, pitch)
        .particle(ResourceId::vanilla(particle), 1)
        .into()
}

fn layer(y_min: i32, y_max: i32) -> AreaBox {
    AreaBox::blocks(BlockPos::new(-2, y_min, -2), BlockPos::new(2, y_max, 2))
}

fn charm_curse(charm: &str, actions: Vec<Action>) -> Recipe {
    Recipe::new(Trigger::OnBreak, Sequence::new(actions))
        .with_ingredient(Ingredient::item(mod_id(charm)))
        .requiring_no_protection()
        .with_priority(CHARM_PRIORITY)
}

// ============================================================================
// Recipes
// ============================================================================

/// Empty shrine broken: a small tatari slime.
fn normal_shrine_curse() -> Recipe {
    let actions = Sequence::new([
        explosion(0.5, 1.2, "explosion"),
        SpawnEntity::new(mod_id("tatari_slime"))
            .at(Vec3::BLOCK_CENTER)
            .with_size(1)
            .into(),
    ]);
    Recipe::new(Trigger::OnBreak, actions).requiring_no_protection()
}

/// Swamp charm: clear logs around the shrine, seed clay, dirt and moss, then a
/// large non-splitting slime.
fn swamp_deity_shrine_curse() -> Recipe {
    let per_position = Sequence::new([
        Action::from(ConditionalReplace::remove_tagged(ResourceId::vanilla("logs"))),
        Action::from(Chance::new(
            0.4,
            uniform_palette(&["clay", "dirt", "moss_block"]).when_air(),
        )),
    ]);
    charm_curse(
        "charm_of_swamp_deity",
        vec![
            explosion(1.0, 1.0, "explosion_emitter"),
            Area::new(layer(-2, 0), per_position).into(),
            SpawnEntity::new(mod_id("swamp_tatari_slime"))
                .at(Vec3::BLOCK_CENTER)
                .with_size(4)
                .into(),
        ],
    )
}

/// Fertility charm: scatter soil and logs around the shrine.
///
/// All layers use the same 40% chance; a per-height probability is not
/// expressible with the current step vocabulary.
fn fertility_deity_shrine_curse() -> Recipe {
    let scatter = Chance::new(
        0.4,
        uniform_palette(&["oak_log", "podzol", "gravel", "sand", "coarse_dirt"]).when_air(),
    );
    charm_curse(
        "charm_of_fertility",
        vec![
            explosion(1.5, 0.8, "explosion_emitter"),
            Area::new(layer(-2, 0), Sequence::new([Action::from(scatter)])).into(),
            SpawnEntity::new(mod_id("tatari_fertility"))
                .at(Vec3::new(0.5, 0.0, 0.5))
                .into(),
        ],
    )
}

/// Fire charm: lava under the shrine, a scorched floor, scattered rubble at
/// shrine height, then a fire golem.
fn fire_deity_shrine_curse() -> Recipe {
    const SCORCHED: [&str; 4] = ["gravel", "sand", "netherrack", "basalt"];
    let below = BlockPos::new(0, -1, 0);
    charm_curse(
        "charm_of_fire_deity",
        vec![
            explosion(1.5, 1.0, "explosion_emitter"),
            Area::new(AreaBox::blocks(below, below), uniform_palette(&["lava"])).into(),
            Area::new(layer(-1, -1), uniform_palette(&SCORCHED).when_air()).into(),
            Area::new(
                layer(0, 0),
                Chance::new(0.4, uniform_palette(&SCORCHED).when_air()),
            )
            .into(),
            SpawnEntity::new(mod_id("fire_golem"))
                .at(Vec3::new(0.5, 0.0, 0.5))
                .into(),
        ],
    )
}

/// Built-in recipes with their ids, in registration order.
pub fn default_recipes() -> Vec<(RecipeId, Recipe)> {
    vec![
        (mod_id("normal_shrine_curse"), normal_shrine_curse()),
        (mod_id("swamp_deity_shrine_curse"), swamp_deity_shrine_curse()),
        (mod_id("fertility_deity_shrine_curse"), fertility_deity_shrine_curse()),
        (mod_id("fire_deity_shrine_curse"), fire_deity_shrine_curse()),
    ]
}

/// Registers the built-in recipes and sorts the store.
pub fn register_default_recipes(store: &mut RecipeStore) {
    info!(target: "shrine::content", "registering default shrine recipes");
    for (id, recipe) in default_recipes() {
        store.register(id, recipe);
    }
    store.sort_by_priority();
}

// ============================================================================
// Archetypes
// ============================================================================

/// Creatures spawned by the built-in recipes.
pub fn builtin_archetypes() -> Vec<EntityArchetype> {
    vec![
        EntityArchetype::new(mod_id("tatari_slime")).sized().splitting(),
        EntityArchetype::new(mod_id("swamp_tatari_slime"))
            .sized()
            .with_fixed_size(4),
        EntityArchetype::new(mod_id("tatari_fertility")),
        EntityArchetype::new(mod_id("fire_golem")),
    ]
}

#[cfg(test)]
mod tests {
    use shrine_core::{ActionRegistry, ItemStack};

    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        for (id, recipe) in default_recipes() {
            let json = recipe.to_json().unwrap();
            let back = Recipe::from_json(json).unwrap();
            assert_eq!(back, recipe, "{id}");
            assert!(ActionRegistry::builtin().encode(&recipe.actions).is_ok());
        }
    }

    #[test]
    fn charm_curses_outrank_the_plain_curse() {
        let mut store = RecipeStore::new();
        register_default_recipes(&mut store);
        assert_eq!(store.len(), 4);
        assert!(store.is_sorted());
        assert_eq!(store.recipes()[3].id, mod_id("normal_shrine_curse"));

        let empty = store.find_recipe(Trigger::OnBreak, &ItemStack::empty());
        assert_eq!(empty.map(|l| l.id.path()), Some("normal_shrine_curse"));

        let fire = ItemStack::single(mod_id("charm_of_fire_deity"));
        let found = store.find_recipe(Trigger::OnBreak, &fire);
        assert_eq!(found.map(|l| l.id.path()), Some("fire_deity_shrine_curse"));
    }

    #[test]
    fn every_spawned_archetype_is_cataloged() {
        let catalog: Vec<_> = builtin_archetypes().into_iter().map(|a| a.id).collect();
        for path in ["tatari_slime", "swamp_tatari_slime", "tatari_fertility", "fire_golem"] {
            assert!(catalog.contains(&mod_id(path)), "{path}");
        }
    }
}
