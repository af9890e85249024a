use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{ActionContext, ActionFault, Outcome};
use crate::types::{BlockState, ItemId, ItemStack, TagId};

/// Replaces the origin block when it is in `match_tag` or equals
/// `match_state`, optionally dropping an item where it stood.
///
/// With neither predicate set nothing ever matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalReplace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_tag: Option<TagId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_state: Option<BlockState>,
    pub replace_with: BlockState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_item: Option<ItemId>,
    #[serde(default = "one")]
    pub drop_count: u32,
}

fn one() -> u32 {
    1
}

impl ConditionalReplace {
    pub const TAG: &'static str = "conditional_replace";

    /// Clears every block in `tag` to air.
    pub fn remove_tagged(tag: TagId) -> Self {
        Self {
            match_tag: Some(tag),
            match_state: None,
            replace_with: BlockState::air(),
            drop_item: None,
            drop_count: one(),
        }
    }

    pub fn dropping(mut self, item: ItemId, count: u32) -> Self {
        self.drop_item = Some(item);
        self.drop_count = count;
        self
    }

    fn matches(&self, ctx: &ActionContext<'_>, current: &BlockState) -> bool {
        let by_tag = self
            .match_tag
            .as_ref()
            .is_some_and(|tag| ctx.world.block_in_tag(current.block(), tag));
        let by_state = self.match_state.as_ref() == Some(current);
        by_tag || by_state
    }

    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        if self.match_tag.is_none() && self.match_state.is_none() {
            return Outcome::skipped();
        }

        let current = match ctx.world.block_state(ctx.origin) {
            Ok(state) => state,
            Err(err) => return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err)),
        };
        if !self.matches(ctx, &current) {
            return Outcome::skipped();
        }

        if let Err(err) = ctx
            .world
            .set_block_state(ctx.origin, self.replace_with.clone())
        {
            return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err));
        }
        debug!(
            target: "shrine::action",
            pos = %ctx.origin,
            from = %current,
            to = %self.replace_with,
            "block conditionally replaced"
        );

        if let Some(item) = &self.drop_item {
            let stack = ItemStack::new(item.clone(), self.drop_count);
            if let Err(err) = ctx.world.drop_item(ctx.origin.corner(), stack) {
                return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err));
            }
        }

        Outcome::applied()
    }
}
