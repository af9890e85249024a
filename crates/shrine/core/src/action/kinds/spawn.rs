use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::action::{ActionContext, ActionError, ActionFault, Outcome};
use crate::types::{ArchetypeId, PropertyBag, Vec3};

/// Property that sets the size of sized archetypes.
pub const SIZE_PROPERTY: &str = "Size";

/// Spawns one entity at `origin + offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntity {
    pub entity: ArchetypeId,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub offset: Vec3,
    #[serde(default, alias = "nbt", skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
}

fn is_zero(offset: &Vec3) -> bool {
    *offset == Vec3::ZERO
}

impl SpawnEntity {
    pub const TAG: &'static str = "spawn_entity";

    pub fn new(entity: ArchetypeId) -> Self {
        Self {
            entity,
            offset: Vec3::ZERO,
            properties: PropertyBag::new(),
        }
    }

    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.properties.insert(SIZE_PROPERTY.to_string(), size.into());
        self
    }

    /// Instantiate, position, size, finalize, insert. Any failing stage ends
    /// the step with a fault and `false`.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        let mut entity = match ctx.world.create_entity(&self.entity) {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                let err = ActionError::InstantiationFailed(self.entity.clone());
                return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err));
            }
            Err(err) => return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err)),
        };

        entity.position = ctx.origin.offset_by(self.offset);
        entity.properties = self.properties.clone();

        if let Some(value) = self.properties.get(SIZE_PROPERTY) {
            match value.as_i32() {
                Some(size) => {
                    if !entity.set_size(size) {
                        debug!(
                            target: "shrine::action",
                            entity = %self.entity,
                            size,
                            "archetype has no size, ignoring Size"
                        );
                    }
                }
                None => warn!(
                    target: "shrine::action",
                    entity = %self.entity,
                    value = ?value,
                    "non-numeric Size ignored"
                ),
            }
        }

        if let Err(err) = ctx.world.finalize_spawn(&mut entity, ctx.origin) {
            return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err));
        }

        let position = entity.position;
        match ctx.world.add_entity(entity) {
            Ok(true) => {
                debug!(
                    target: "shrine::action",
                    entity = %self.entity,
                    at = %position,
                    "entity spawned"
                );
                Outcome::applied()
            }
            Ok(false) => {
                let err = ActionError::InsertionRefused(self.entity.clone());
                Outcome::failed(ActionFault::raise(Self::TAG, ctx, err))
            }
            Err(err) => Outcome::failed(ActionFault::raise(Self::TAG, ctx, err)),
        }
    }
}
