use core::fmt;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Item held by a shrine or offered to it.
///
/// A stack with no item, or with a count of zero, is empty. Empty stacks are
/// what an ingredient-less recipe matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl ItemStack {
    pub fn empty() -> Self {
        Self {
            item: None,
            count: 0,
        }
    }

    pub fn new(item: ItemId, count: u32) -> Self {
        Self {
            item: Some(item),
            count,
        }
    }

    pub fn single(item: ItemId) -> Self {
        Self::new(item, 1)
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none() || self.count == 0
    }

    /// Item id when the stack is not empty.
    pub fn id(&self) -> Option<&ItemId> {
        if self.is_empty() { None } else { self.item.as_ref() }
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(item) => write!(f, "{}x {item}", self.count),
            None => f.write_str("empty"),
        }
    }
}

/// Opaque handle to the actor that caused a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}
