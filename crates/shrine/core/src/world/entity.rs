use serde::{Deserialize, Serialize};

use crate::types::{ArchetypeId, PropertyBag, Vec3};

/// Smallest size a sized entity may have.
pub const MIN_ENTITY_SIZE: i32 = 1;

/// Largest size a sized entity may have.
pub const MAX_ENTITY_SIZE: i32 = 127;

/// Description of a spawnable creature, composed from capability flags.
///
/// - `sized`: accepts an explicit size (the `"Size"` spawn property)
/// - `splits`: breaks into smaller copies on death (host behaviour)
/// - `fixed_size`: size applied at finalization when none was requested
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityArchetype {
    pub id: ArchetypeId,
    #[serde(default)]
    pub sized: bool,
    #[serde(default)]
    pub splits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<i32>,
}

impl EntityArchetype {
    pub fn new(id: ArchetypeId) -> Self {
        Self {
            id,
            sized: false,
            splits: false,
            fixed_size: None,
        }
    }

    pub fn sized(mut self) -> Self {
        self.sized = true;
        self
    }

    pub fn splitting(mut self) -> Self {
        self.splits = true;
        self
    }

    pub fn with_fixed_size(mut self, size: i32) -> Self {
        self.fixed_size = Some(size);
        self
    }
}

/// Entity instance created by the world but not necessarily inserted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub archetype: EntityArchetype,
    pub position: Vec3,
    pub properties: PropertyBag,
    size: Option<i32>,
    finalized: bool,
}

impl Entity {
    pub fn new(archetype: EntityArchetype) -> Self {
        Self {
            archetype,
            position: Vec3::ZERO,
            properties: PropertyBag::new(),
            size: None,
            finalized: false,
        }
    }

    pub fn id(&self) -> &ArchetypeId {
        &self.archetype.id
    }

    pub fn size(&self) -> Option<i32> {
        self.size
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Applies an explicit size. Returns false when the archetype is not sized.
    pub fn set_size(&mut self, size: i32) -> bool {
        if !self.archetype.sized {
            return false;
        }
        self.size = Some(size.clamp(MIN_ENTITY_SIZE, MAX_ENTITY_SIZE));
        true
    }

    /// Default spawn finalization: sized archetypes without an explicit size
    /// get their fixed size, or the minimum.
    pub fn finalize(&mut self) {
        if self.archetype.sized && self.size.is_none() {
            let size = self.archetype.fixed_size.unwrap_or(MIN_ENTITY_SIZE);
            self.size = Some(size.clamp(MIN_ENTITY_SIZE, MAX_ENTITY_SIZE));
        }
        self.finalized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceId;

    #[test]
    fn size_ignored_for_unsized_archetypes() {
        let mut golem = Entity::new(EntityArchetype::new(ResourceId::vanilla("golem")));
        assert!(!golem.set_size(3));
        golem.finalize();
        assert_eq!(golem.size(), None);
        assert!(golem.is_finalized());
    }

    #[test]
    fn finalize_applies_fixed_size_only_when_unset() {
        let archetype = EntityArchetype::new(ResourceId::vanilla("slime"))
            .sized()
            .with_fixed_size(4);

        let mut implicit = Entity::new(archetype.clone());
        implicit.finalize();
        assert_eq!(implicit.size(), Some(4));

        let mut explicit = Entity::new(archetype);
        assert!(explicit.set_size(200));
        explicit.finalize();
        assert_eq!(explicit.size(), Some(MAX_ENTITY_SIZE));
    }
}
