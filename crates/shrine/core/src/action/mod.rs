//! Action trees.
//!
//! An [`Action`] is a closed set of step kinds. Composite kinds hold child
//! actions, so a recipe's consequences form a tree that is executed depth
//! first against one [`ActionContext`].
//!
//! Execution is fail-soft: a step that hits a world error records an
//! [`ActionFault`], logs it, and reports `false`. Nothing propagates past
//! [`Action::perform`].

mod context;
mod error;
pub mod kinds;
mod outcome;
mod registry;

pub use context::ActionContext;
pub use error::ActionError;
pub use kinds::{
    Area, AreaBox, Chance, ConditionalReplace, DropItem, PaletteEntry, PlayEffects, ReplaceBlock,
    SIZE_PROPERTY, Sequence, SpawnEntity,
};
pub use outcome::{ActionFault, Outcome};
pub use registry::{ActionCodec, ActionRegistry, DecodeFn, EncodeFn, RegistryError};

/// One step of a recipe's consequence tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ========================================================================
    // Composites
    // ========================================================================
    Sequence(Sequence),
    Chance(Chance),
    Area(Area),

    // ========================================================================
    // Entities & Effects
    // ========================================================================
    SpawnEntity(SpawnEntity),
    PlayEffects(PlayEffects),
    DropItem(DropItem),

    // ========================================================================
    // Blocks
    // ========================================================================
    ReplaceBlock(ReplaceBlock),
    ConditionalReplace(ConditionalReplace),
}

impl Action {
    /// Stable tag used as the `"type"` discriminator.
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Sequence(_) => Sequence::TAG,
            Self::Chance(_) => Chance::TAG,
            Self::Area(_) => Area::TAG,
            Self::SpawnEntity(_) => SpawnEntity::TAG,
            Self::PlayEffects(_) => PlayEffects::TAG,
            Self::DropItem(_) => DropItem::TAG,
            Self::ReplaceBlock(_) => ReplaceBlock::TAG,
            Self::ConditionalReplace(_) => ConditionalReplace::TAG,
        }
    }

    /// Runs the tree and reports whether any observable effect happened.
    pub fn perform(&self, ctx: &mut ActionContext<'_>) -> bool {
        self.execute(ctx).applied
    }

    /// Runs the tree and returns the full outcome, including absorbed faults.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        match self {
            Self::Sequence(step) => step.execute(ctx),
            Self::Chance(step) => step.execute(ctx),
            Self::Area(step) => step.execute(ctx),
            Self::SpawnEntity(step) => step.execute(ctx),
            Self::PlayEffects(step) => step.execute(ctx),
            Self::DropItem(step) => step.execute(ctx),
            Self::ReplaceBlock(step) => step.execute(ctx),
            Self::ConditionalReplace(step) => step.execute(ctx),
        }
    }
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Action {
                fn from(step: $kind) -> Self {
                    Self::$kind(step)
                }
            }
        )*
    };
}

impl_from_kind!(
    Sequence,
    Chance,
    Area,
    SpawnEntity,
    PlayEffects,
    DropItem,
    ReplaceBlock,
    ConditionalReplace,
);
