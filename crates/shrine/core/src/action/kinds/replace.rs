use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{ActionContext, ActionError, ActionFault, Outcome};
use crate::types::BlockState;
use crate::world::ActionRng;

/// Weighted candidate in a replacement palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub state: BlockState,
    #[serde(default = "unit_weight")]
    pub weight: i32,
}

fn unit_weight() -> i32 {
    1
}

impl PaletteEntry {
    pub fn new(state: BlockState, weight: i32) -> Self {
        Self { state, weight }
    }

    /// Weighted pick. Non-positive weights count as zero; a palette with no
    /// positive weight yields its first entry.
    pub fn pick<'p>(palette: &'p [PaletteEntry], rng: &mut ActionRng) -> Option<&'p BlockState> {
        let first = palette.first()?;
        let total: u64 = palette.iter().map(|e| e.weight.max(0) as u64).sum();
        if total == 0 {
            return Some(&first.state);
        }

        let draw = rng.next_int(total);
        let mut running = 0u64;
        for entry in palette {
            running += entry.weight.max(0) as u64;
            if draw < running {
                return Some(&entry.state);
            }
        }
        Some(&first.state)
    }
}

impl From<BlockState> for PaletteEntry {
    fn from(state: BlockState) -> Self {
        Self::new(state, unit_weight())
    }
}

/// Replaces the origin block with `with`, or with a weighted pick from
/// `palette`, behind a `chance` gate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplaceBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with: Option<BlockState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<PaletteEntry>>,
    #[serde(default = "always")]
    pub chance: f32,
    #[serde(default)]
    pub when_air: bool,
}

fn always() -> f32 {
    1.0
}

impl ReplaceBlock {
    pub const TAG: &'static str = "replace_block";

    pub fn with(state: BlockState) -> Self {
        Self {
            with: Some(state),
            palette: None,
            chance: always(),
            when_air: false,
        }
    }

    pub fn palette(entries: impl IntoIterator<Item = PaletteEntry>) -> Self {
        Self {
            with: None,
            palette: Some(entries.into_iter().collect()),
            chance: always(),
            when_air: false,
        }
    }

    pub fn chance(mut self, chance: f32) -> Self {
        self.chance = chance;
        self
    }

    pub fn when_air(mut self) -> Self {
        self.when_air = true;
        self
    }

    /// Gate, air check, target resolution, write.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        if ctx.rng.next_float() >= self.chance {
            return Outcome::skipped();
        }

        if self.when_air {
            match ctx.world.block_state(ctx.origin) {
                Ok(current) if !current.is_air() => return Outcome::skipped(),
                Ok(_) => {}
                Err(err) => return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err)),
            }
        }

        let target = match (&self.with, self.palette.as_deref()) {
            (Some(state), _) => state.clone(),
            (None, Some(palette)) => match PaletteEntry::pick(palette, ctx.rng) {
                Some(state) => state.clone(),
                None => {
                    let err = ActionError::misconfigured(Self::TAG, "palette is empty");
                    return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err));
                }
            },
            (None, None) => {
                let err = ActionError::misconfigured(Self::TAG, "neither 'with' nor 'palette' given");
                return Outcome::failed(ActionFault::raise(Self::TAG, ctx, err));
            }
        };

        match ctx.world.set_block_state(ctx.origin, target.clone()) {
            Ok(()) => {
                debug!(target: "shrine::action", pos = %ctx.origin, state = %target, "block replaced");
                Outcome::applied()
            }
            Err(err) => Outcome::failed(ActionFault::raise(Self::TAG, ctx, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockPos, ItemStack, ResourceId};
    use crate::world::InMemoryWorld;

    fn state(path: &str) -> BlockState {
        BlockState::of(ResourceId::vanilla(path))
    }

    #[test]
    fn pick_converges_to_weights() {
        let palette = vec![
            PaletteEntry::new(state("clay"), 1),
            PaletteEntry::new(state("dirt"), 3),
        ];
        let mut rng = ActionRng::new(2024);
        let trials = 10_000;
        let dirt = (0..trials)
            .filter(|_| PaletteEntry::pick(&palette, &mut rng) == Some(&state("dirt")))
            .count();
        let ratio = dirt as f64 / trials as f64;
        assert!((ratio - 0.75).abs() < 0.03, "dirt ratio {ratio}");
    }

    #[test]
    fn gated_palette_converges_through_execute() {
        let replace = ReplaceBlock::palette([
            PaletteEntry::new(state("clay"), 1),
            PaletteEntry::new(state("dirt"), 3),
        ])
        .chance(0.5);
        let mut world = InMemoryWorld::new(7);
        let item = ItemStack::empty();

        let trials = 10_000;
        let (mut placed, mut dirt) = (0u32, 0u32);
        for x in 0..trials {
            let pos = BlockPos::new(x, 0, 0);
            let mut rng = ActionRng::for_position(7, pos);
            let mut ctx = ActionContext::new(&mut world, pos, None, &item, &mut rng);
            if replace.execute(&mut ctx).applied {
                placed += 1;
                if world.block(pos) == state("dirt") {
                    dirt += 1;
                }
            }
        }

        let gate = f64::from(placed) / f64::from(trials);
        let ratio = f64::from(dirt) / f64::from(placed);
        assert!((gate - 0.5).abs() < 0.03, "gate ratio {gate}");
        assert!((ratio - 0.75).abs() < 0.03, "dirt ratio {ratio}");
    }

    #[test]
    fn non_positive_weights_fall_back_to_first() {
        let palette = vec![
            PaletteEntry::new(state("clay"), 0),
            PaletteEntry::new(state("dirt"), -4),
        ];
        let mut rng = ActionRng::new(1);
        assert_eq!(PaletteEntry::pick(&palette, &mut rng), Some(&state("clay")));
        assert_eq!(PaletteEntry::pick(&[], &mut rng), None);
    }

    #[test]
    fn negative_weights_are_never_picked() {
        let palette = vec![
            PaletteEntry::new(state("clay"), -10),
            PaletteEntry::new(state("dirt"), 1),
        ];
        let mut rng = ActionRng::new(3);
        for _ in 0..200 {
            assert_eq!(PaletteEntry::pick(&palette, &mut rng), Some(&state("dirt")));
        }
    }

    #[test]
    fn weight_defaults_to_one() {
        let entry: PaletteEntry = serde_json::from_str(r#"{"state": "minecraft:clay"}"#).unwrap();
        assert_eq!(entry.weight, 1);
    }
}
