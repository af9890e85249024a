//! World boundary consumed by actions.
//!
//! The engine never owns world state. Everything an action observes or changes
//! goes through the [`World`] trait, which hosts implement over their own
//! block, entity and effect systems. [`InMemoryWorld`] is a complete
//! implementation used by tests and tooling.

mod entity;
mod error;
mod memory;
mod rng;
mod tags;

pub use entity::{Entity, EntityArchetype, MAX_ENTITY_SIZE, MIN_ENTITY_SIZE};
pub use error::WorldError;
pub use memory::{DroppedItem, FaultInjection, InMemoryWorld, ParticleEvent, SoundEvent};
pub use rng::{AREA_SEED_SALT, ActionRng, area_seed, position_hash};
pub use tags::TagTable;

use crate::types::{
    ArchetypeId, BlockId, BlockPos, BlockState, ItemStack, ParticleId, SoundId, TagId, Vec3,
};

/// Host world as seen by actions.
///
/// Mutating calls return `Err` when the host refuses or fails; the calling
/// action turns that into a logged fault and a `false` result.
pub trait World {
    /// Seed of the loaded world, used for per-position area seeds.
    fn seed(&self) -> u64;

    fn block_state(&self, pos: BlockPos) -> Result<BlockState, WorldError>;

    fn set_block_state(&mut self, pos: BlockPos, state: BlockState) -> Result<(), WorldError>;

    /// Whether `block` belongs to the block tag `tag`.
    fn block_in_tag(&self, block: &BlockId, tag: &TagId) -> bool;

    /// Instantiates an entity of `archetype`. `Ok(None)` means the host knows
    /// no such archetype.
    fn create_entity(&mut self, archetype: &ArchetypeId) -> Result<Option<Entity>, WorldError>;

    /// Spawn-finalization hook run after positioning and sizing.
    fn finalize_spawn(&mut self, entity: &mut Entity, _origin: BlockPos) -> Result<(), WorldError> {
        entity.finalize();
        Ok(())
    }

    /// Inserts the entity. `Ok(false)` means the host declined it.
    fn add_entity(&mut self, entity: Entity) -> Result<bool, WorldError>;

    fn play_sound(
        &mut self,
        at: BlockPos,
        sound: &SoundId,
        volume: f32,
        pitch: f32,
    ) -> Result<(), WorldError>;

    fn spawn_particles(
        &mut self,
        at: Vec3,
        particle: &ParticleId,
        count: u32,
    ) -> Result<(), WorldError>;

    fn drop_item(&mut self, at: Vec3, stack: ItemStack) -> Result<(), WorldError>;
}
