//! Action execution errors.
//!
//! Nothing here crosses `Action::perform`: each error is wrapped in an
//! [`ActionFault`](super::ActionFault), logged, and folded into the outcome.

use crate::error::{ErrorSeverity, ShrineError};
use crate::types::ArchetypeId;
use crate::world::WorldError;

// ============================================================================
// Action Execution Errors
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// A world call failed.
    #[error(transparent)]
    World(#[from] WorldError),

    /// The world could not instantiate the requested archetype.
    #[error("could not instantiate entity '{0}'")]
    InstantiationFailed(ArchetypeId),

    /// The world declined to insert a freshly spawned entity.
    #[error("world refused to add entity '{0}'")]
    InsertionRefused(ArchetypeId),

    /// The step is structurally valid but cannot do anything.
    #[error("misconfigured {action} step: {reason}")]
    Misconfigured {
        action: &'static str,
        reason: String,
    },
}

impl ActionError {
    pub fn misconfigured(action: &'static str, reason: impl Into<String>) -> Self {
        Self::Misconfigured {
            action,
            reason: reason.into(),
        }
    }
}

impl ShrineError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::World(err) => err.severity(),
            Self::InstantiationFailed(_) | Self::Misconfigured { .. } => ErrorSeverity::Validation,
            Self::InsertionRefused(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::World(err) => err.error_code(),
            Self::InstantiationFailed(_) => "ACTION_INSTANTIATION_FAILED",
            Self::InsertionRefused(_) => "ACTION_INSERTION_REFUSED",
            Self::Misconfigured { .. } => "ACTION_MISCONFIGURED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockPos;

    #[test]
    fn world_errors_keep_their_classification() {
        let err = ActionError::from(WorldError::Unloaded(BlockPos::ORIGIN));
        assert_eq!(err.error_code(), "WORLD_UNLOADED");
        assert!(err.severity().is_recoverable());

        let err = ActionError::misconfigured("replace_block", "no target");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "misconfigured replace_block step: no target");
    }
}
