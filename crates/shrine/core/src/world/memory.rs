//! In-memory [`World`] with event recording and fault injection.

use std::collections::{HashMap, HashSet};

use super::{Entity, EntityArchetype, TagTable, World, WorldError};
use crate::types::{
    ArchetypeId, BlockId, BlockPos, BlockState, ItemStack, ParticleId, SoundId, TagId, Vec3,
};

#[derive(Clone, Debug, PartialEq)]
pub struct SoundEvent {
    pub at: BlockPos,
    pub sound: SoundId,
    pub volume: f32,
    pub pitch: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleEvent {
    pub at: Vec3,
    pub particle: ParticleId,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DroppedItem {
    pub at: Vec3,
    pub stack: ItemStack,
}

/// Switches that make the in-memory world fail on purpose.
#[derive(Clone, Debug, Default)]
pub struct FaultInjection {
    pub fail_sounds: bool,
    pub fail_particles: bool,
    pub fail_drops: bool,
    /// `add_entity` returns `Ok(false)`.
    pub refuse_entities: bool,
    /// `add_entity` returns `Err`.
    pub fail_entities: bool,
    /// Positions reported as unloaded.
    pub unloaded: HashSet<BlockPos>,
}

/// Sparse block grid plus recorded side effects. Absent blocks read as air.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWorld {
    seed: u64,
    blocks: HashMap<BlockPos, BlockState>,
    block_tags: TagTable,
    archetypes: HashMap<ArchetypeId, EntityArchetype>,
    entities: Vec<Entity>,
    sounds: Vec<SoundEvent>,
    particles: Vec<ParticleEvent>,
    drops: Vec<DroppedItem>,
    pub faults: FaultInjection,
}

impl InMemoryWorld {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    pub fn with_block_tags(mut self, tags: TagTable) -> Self {
        self.block_tags = tags;
        self
    }

    pub fn with_archetypes<I>(mut self, archetypes: I) -> Self
    where
        I: IntoIterator<Item = EntityArchetype>,
    {
        for archetype in archetypes {
            self.archetypes.insert(archetype.id.clone(), archetype);
        }
        self
    }

    pub fn with_faults(mut self, faults: FaultInjection) -> Self {
        self.faults = faults;
        self
    }

    /// Places a block directly, bypassing fault injection.
    pub fn put_block(&mut self, pos: BlockPos, state: BlockState) {
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Fills the inclusive box between `a` and `b` with `state`.
    pub fn fill(&mut self, a: BlockPos, b: BlockPos, state: &BlockState) {
        let (lo, hi) = (a.min(b), a.max(b));
        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    self.put_block(BlockPos::new(x, y, z), state.clone());
                }
            }
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn block(&self, pos: BlockPos) -> BlockState {
        self.blocks.get(&pos).cloned().unwrap_or_else(BlockState::air)
    }

    /// Number of non-air positions holding `block`.
    pub fn count_blocks(&self, block: &BlockId) -> usize {
        self.blocks.values().filter(|s| s.block() == block).count()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }

    pub fn particles(&self) -> &[ParticleEvent] {
        &self.particles
    }

    pub fn drops(&self) -> &[DroppedItem] {
        &self.drops
    }

    fn ensure_loaded(&self, pos: BlockPos) -> Result<(), WorldError> {
        if self.faults.unloaded.contains(&pos) {
            return Err(WorldError::Unloaded(pos));
        }
        Ok(())
    }
}

impl World for InMemoryWorld {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn block_state(&self, pos: BlockPos) -> Result<BlockState, WorldError> {
        self.ensure_loaded(pos)?;
        Ok(self.block(pos))
    }

    fn set_block_state(&mut self, pos: BlockPos, state: BlockState) -> Result<(), WorldError> {
        self.ensure_loaded(pos)?;
        self.put_block(pos, state);
        Ok(())
    }

    fn block_in_tag(&self, block: &BlockId, tag: &TagId) -> bool {
        self.block_tags.contains(tag, block)
    }

    fn create_entity(&mut self, archetype: &ArchetypeId) -> Result<Option<Entity>, WorldError> {
        Ok(self.archetypes.get(archetype).cloned().map(Entity::new))
    }

    fn add_entity(&mut self, entity: Entity) -> Result<bool, WorldError> {
        if self.faults.fail_entities {
            return Err(WorldError::EntityRejected(
                entity.id().clone(),
                "insertion failed".to_string(),
            ));
        }
        if self.faults.refuse_entities {
            return Ok(false);
        }
        self.entities.push(entity);
        Ok(true)
    }

    fn play_sound(
        &mut self,
        at: BlockPos,
        sound: &SoundId,
        volume: f32,
        pitch: f32,
    ) -> Result<(), WorldError> {
        if self.faults.fail_sounds {
            return Err(WorldError::Sound(format!("cannot play {sound}")));
        }
        self.sounds.push(SoundEvent {
            at,
            sound: sound.clone(),
            volume,
            pitch,
        });
        Ok(())
    }

    fn spawn_particles(
        &mut self,
        at: Vec3,
        particle: &ParticleId,
        count: u32,
    ) -> Result<(), WorldError> {
        if self.faults.fail_particles {
            return Err(WorldError::Particle(format!("cannot emit {particle}")));
        }
        self.particles.push(ParticleEvent {
            at,
            particle: particle.clone(),
            count,
        });
        Ok(())
    }

    fn drop_item(&mut self, at: Vec3, stack: ItemStack) -> Result<(), WorldError> {
        if self.faults.fail_drops {
            return Err(WorldError::Drop(format!("cannot drop {stack}")));
        }
        self.drops.push(DroppedItem { at, stack });
        Ok(())
    }
}
