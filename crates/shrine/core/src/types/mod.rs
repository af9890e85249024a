//! Value types shared by actions, recipes and the world boundary.

mod block;
pub(crate) mod id;
mod item;
mod position;
mod properties;

pub use block::BlockState;
pub use id::{
    ArchetypeId, BlockId, DEFAULT_NAMESPACE, ItemId, ParticleId, RecipeId, ResourceId, SoundId,
    TagId,
};
pub use item::{ActorId, ItemStack};
pub use position::{BlockPos, Vec3};
pub use properties::{PropertyBag, PropertyValue};

use crate::error::{ErrorSeverity, ShrineError};

/// Failure to parse a textual identifier or block state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid resource id '{0}'")]
    InvalidResourceId(String),

    #[error("invalid block state '{0}'")]
    InvalidBlockState(String),
}

impl ShrineError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidResourceId(_) => "PARSE_INVALID_RESOURCE_ID",
            Self::InvalidBlockState(_) => "PARSE_INVALID_BLOCK_STATE",
        }
    }
}
