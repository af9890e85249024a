//! Trigger events reported by the host and what firing them produced.

use shrine_core::{ActorId, BlockPos, ItemStack, Outcome, RecipeId, Trigger};

/// A fixture was broken, filled or ticked.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerEvent {
    pub trigger: Trigger,

    /// Position of the fixture.
    pub origin: BlockPos,

    pub actor: Option<ActorId>,

    /// Item held by the fixture.
    pub item: ItemStack,

    /// The trigger came with protection (a silk touch tool on break).
    pub protected: bool,
}

impl TriggerEvent {
    pub fn new(trigger: Trigger, origin: BlockPos) -> Self {
        Self {
            trigger,
            origin,
            actor: None,
            item: ItemStack::empty(),
            protected: false,
        }
    }

    pub fn with_item(mut self, item: ItemStack) -> Self {
        self.item = item;
        self
    }

    pub fn by(mut self, actor: ActorId) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }
}

/// What happened when an event was fired.
#[derive(Clone, Debug, PartialEq)]
pub enum FireOutcome {
    /// No recipe matched the trigger and item.
    NoRecipe,

    /// A recipe matched but the event was protected.
    Suppressed { recipe: RecipeId },

    /// The recipe's action tree ran.
    Executed { recipe: RecipeId, outcome: Outcome },
}

impl FireOutcome {
    pub fn recipe(&self) -> Option<&RecipeId> {
        match self {
            Self::NoRecipe => None,
            Self::Suppressed { recipe } | Self::Executed { recipe, .. } => Some(recipe),
        }
    }

    /// Whether the tree produced any observable effect.
    pub fn applied(&self) -> bool {
        matches!(self, Self::Executed { outcome, .. } if outcome.applied)
    }

    /// The host removes the offered item only when something happened.
    pub fn consumes_item(&self) -> bool {
        self.applied()
    }
}

#[cfg(test)]
mod tests {
    use shrine_core::{ActionError, ActionFault, ResourceId};

    use super::*;

    fn id() -> RecipeId {
        ResourceId::from_parts("kamigami", "normal_shrine_curse")
    }

    #[test]
    fn only_applied_executions_consume() {
        assert!(!FireOutcome::NoRecipe.consumes_item());
        assert!(!FireOutcome::Suppressed { recipe: id() }.consumes_item());
        assert!(
            !FireOutcome::Executed {
                recipe: id(),
                outcome: Outcome::skipped()
            }
            .consumes_item()
        );

        let faulted = Outcome::applied().with_fault(ActionFault {
            action: "drop_item",
            origin: BlockPos::ORIGIN,
            error: ActionError::misconfigured("drop_item", "test"),
        });
        let executed = FireOutcome::Executed {
            recipe: id(),
            outcome: faulted,
        };
        assert!(executed.consumes_item());
        assert_eq!(executed.recipe(), Some(&id()));
    }

    #[test]
    fn event_builders() {
        let event = TriggerEvent::new(Trigger::OnBreak, BlockPos::new(1, 2, 3))
            .by(ActorId(7))
            .protected();
        assert_eq!(event.actor, Some(ActorId(7)));
        assert!(event.protected);
        assert!(event.item.is_empty());
    }
}
