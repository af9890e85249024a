//! Errors raised by [`World`](super::World) implementations.

use crate::error::{ErrorSeverity, ShrineError};
use crate::types::{ArchetypeId, BlockPos, BlockState};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WorldError {
    /// The position is not loaded or is outside the world.
    #[error("block at {0} is not loaded")]
    Unloaded(BlockPos),

    #[error("block at {pos} rejected state {state}")]
    BlockRejected { pos: BlockPos, state: BlockState },

    #[error("unknown entity archetype '{0}'")]
    UnknownArchetype(ArchetypeId),

    #[error("entity '{0}' rejected by host: {1}")]
    EntityRejected(ArchetypeId, String),

    #[error("sound emission failed: {0}")]
    Sound(String),

    #[error("particle emission failed: {0}")]
    Particle(String),

    #[error("item drop failed: {0}")]
    Drop(String),

    /// Any other host failure.
    #[error("host error: {0}")]
    Host(String),
}

impl ShrineError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        use WorldError::*;
        match self {
            Unloaded(_) | BlockRejected { .. } | EntityRejected(..) => ErrorSeverity::Recoverable,
            UnknownArchetype(_) => ErrorSeverity::Validation,
            Sound(_) | Particle(_) | Drop(_) | Host(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use WorldError::*;
        match self {
            Unloaded(_) => "WORLD_UNLOADED",
            BlockRejected { .. } => "WORLD_BLOCK_REJECTED",
            UnknownArchetype(_) => "WORLD_UNKNOWN_ARCHETYPE",
            EntityRejected(..) => "WORLD_ENTITY_REJECTED",
            Sound(_) => "WORLD_SOUND",
            Particle(_) => "WORLD_PARTICLE",
            Drop(_) => "WORLD_DROP",
            Host(_) => "WORLD_HOST",
        }
    }
}
