use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{ActionContext, ActionFault, Outcome};
use crate::types::{ItemId, ItemStack};

/// Drops `count` of `item` at the origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropItem {
    pub item: ItemId,
    #[serde(default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

impl DropItem {
    pub const TAG: &'static str = "drop_item";

    pub fn new(item: ItemId, count: u32) -> Self {
        Self { item, count }
    }

    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        let stack = ItemStack::new(self.item.clone(), self.count);
        match ctx.world.drop_item(ctx.origin.corner(), stack) {
            Ok(()) => {
                debug!(
                    target: "shrine::action",
                    item = %self.item,
                    count = self.count,
                    pos = %ctx.origin,
                    "item dropped"
                );
                Outcome::applied()
            }
            Err(err) => Outcome::failed(ActionFault::raise(Self::TAG, ctx, err)),
        }
    }
}
