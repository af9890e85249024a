use crate::types::{ActorId, BlockPos, ItemStack};
use crate::world::{ActionRng, World};

/// Everything an action step can see while executing.
///
/// A context is never modified in place. Area steps derive a child context per
/// visited position with [`ActionContext::at`].
pub struct ActionContext<'a> {
    /// World the tree runs against.
    pub world: &'a mut dyn World,

    /// Position of the triggered fixture, or of the current area cell.
    pub origin: BlockPos,

    /// Actor that caused the trigger, if any.
    pub actor: Option<ActorId>,

    /// Item held by the fixture when it was triggered.
    pub item: &'a ItemStack,

    pub rng: &'a mut ActionRng,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        world: &'a mut dyn World,
        origin: BlockPos,
        actor: Option<ActorId>,
        item: &'a ItemStack,
        rng: &'a mut ActionRng,
    ) -> Self {
        Self {
            world,
            origin,
            actor,
            item,
            rng,
        }
    }

    /// Child context at `origin` drawing from `rng`; world, actor and item are
    /// shared with the parent.
    pub fn at<'b>(&'b mut self, origin: BlockPos, rng: &'b mut ActionRng) -> ActionContext<'b> {
        ActionContext {
            world: &mut *self.world,
            origin,
            actor: self.actor,
            item: self.item,
            rng,
        }
    }
}
