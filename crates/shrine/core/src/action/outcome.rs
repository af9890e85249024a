use tracing::warn;

use super::{ActionContext, ActionError};
use crate::error::ShrineError;
use crate::types::BlockPos;

/// A failure absorbed during execution.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionFault {
    /// Type tag of the step that failed.
    pub action: &'static str,
    /// Origin of the context the step ran in.
    pub origin: BlockPos,
    pub error: ActionError,
}

impl ActionFault {
    /// Records and logs a fault raised by `action` in `ctx`.
    pub fn raise(action: &'static str, ctx: &ActionContext<'_>, error: impl Into<ActionError>) -> Self {
        let error = error.into();
        warn!(
            target: "shrine::action",
            action,
            pos = %ctx.origin,
            code = error.error_code(),
            severity = error.severity().as_str(),
            error = %error,
            "action step failed"
        );
        Self {
            action,
            origin: ctx.origin,
            error,
        }
    }
}

/// Result of executing an action tree.
///
/// `applied` is true iff some observable effect happened. Faults never flip
/// `applied` back; a sequence whose first step worked and second step faulted
/// is still applied.
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Outcome {
    pub applied: bool,
    pub faults: Vec<ActionFault>,
}

impl Outcome {
    pub fn applied() -> Self {
        Self {
            applied: true,
            faults: Vec::new(),
        }
    }

    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn failed(fault: ActionFault) -> Self {
        Self {
            applied: false,
            faults: vec![fault],
        }
    }

    pub fn with_fault(mut self, fault: ActionFault) -> Self {
        self.faults.push(fault);
        self
    }

    /// OR of `applied`, concatenation of faults.
    pub fn merge(&mut self, other: Outcome) {
        self.applied |= other.applied;
        self.faults.extend(other.faults);
    }

    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Outcome::skipped(), |mut acc, next| {
            acc.merge(next);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault() -> ActionFault {
        ActionFault {
            action: "drop_item",
            origin: BlockPos::ORIGIN,
            error: ActionError::misconfigured("drop_item", "test"),
        }
    }

    #[test]
    fn merge_is_or_and_keeps_faults() {
        let combined: Outcome = [
            Outcome::applied(),
            Outcome::failed(fault()),
            Outcome::skipped(),
        ]
        .into_iter()
        .collect();
        assert!(combined.applied);
        assert_eq!(combined.faults.len(), 1);
    }

    #[test]
    fn empty_fold_is_not_applied() {
        let combined: Outcome = std::iter::empty().collect();
        assert!(!combined.applied);
        assert!(combined.is_clean());
    }
}
