use std::collections::{BTreeSet, HashMap};

use crate::types::{ResourceId, TagId};

/// Tag membership table (`#minecraft:logs` -> blocks, `#c:gems` -> items).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagTable {
    tags: HashMap<TagId, BTreeSet<ResourceId>>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: TagId, member: ResourceId) {
        self.tags.entry(tag).or_default().insert(member);
    }

    pub fn with<I>(mut self, tag: TagId, members: I) -> Self
    where
        I: IntoIterator<Item = ResourceId>,
    {
        let entry = self.tags.entry(tag).or_default();
        entry.extend(members);
        self
    }

    pub fn contains(&self, tag: &TagId, member: &ResourceId) -> bool {
        self.tags.get(tag).is_some_and(|members| members.contains(member))
    }

    pub fn members(&self, tag: &TagId) -> impl Iterator<Item = &ResourceId> {
        self.tags.get(tag).into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
