//! Data-driven consequences for shrine fixtures.
//!
//! `shrine-core` decides what happens when a shrine is broken, offered an item
//! or ticked. A [`RecipeStore`] picks the highest-priority [`Recipe`] for the
//! trigger and held item, and the recipe's [`Action`] tree runs against a
//! [`World`] through an [`ActionContext`]. Execution is fail-soft and every
//! random draw is deterministic for a given seed.
pub mod action;
pub mod config;
pub mod error;
pub mod recipe;
pub mod types;
pub mod world;

pub use action::{
    Action, ActionCodec, ActionContext, ActionError, ActionFault, ActionRegistry, Area, AreaBox,
    Chance, ConditionalReplace, DropItem, Outcome, PaletteEntry, PlayEffects, RegistryError,
    ReplaceBlock, SIZE_PROPERTY, Sequence, SpawnEntity,
};
pub use config::EngineConfig;
pub use error::{ErrorSeverity, ShrineError};
pub use recipe::{Ingredient, LoadedRecipe, Recipe, RecipeError, RecipeStore, Trigger};
pub use types::{
    ActorId, ArchetypeId, BlockId, BlockPos, BlockState, ItemId, ItemStack, ParseError,
    ParticleId, PropertyBag, PropertyValue, RecipeId, ResourceId, SoundId, TagId, Vec3,
};
pub use world::{
    ActionRng, Entity, EntityArchetype, FaultInjection, InMemoryWorld, TagTable, World,
    WorldError,
};
