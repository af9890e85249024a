//! Concrete action steps.
//!
//! Composites (`Sequence`, `Chance`, `Area`) own child actions; leaves talk to
//! the world directly.

mod area;
mod chance;
mod conditional;
mod drop;
mod effects;
mod replace;
mod sequence;
mod spawn;

pub use area::{Area, AreaBox};
pub use chance::Chance;
pub use conditional::ConditionalReplace;
pub use drop::DropItem;
pub use effects::PlayEffects;
pub use replace::{PaletteEntry, ReplaceBlock};
pub use sequence::Sequence;
pub use spawn::{SIZE_PROPERTY, SpawnEntity};
