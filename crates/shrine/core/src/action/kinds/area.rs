use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{Action, ActionContext, Outcome};
use crate::types::{BlockPos, Vec3};
use crate::world::ActionRng;

/// Inclusive box relative to the context origin. Corners are floored to
/// block coordinates and may be given in either order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl AreaBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box between two block offsets.
    pub fn blocks(min: BlockPos, max: BlockPos) -> Self {
        Self::new(min.corner(), max.corner())
    }

    /// Absolute lower and upper corners around `origin`.
    pub fn bounds(&self, origin: BlockPos) -> (BlockPos, BlockPos) {
        let a = origin + self.min.block();
        let b = origin + self.max.block();
        (a.min(b), a.max(b))
    }

    /// Every position in the box: x varies fastest, then y, then z.
    pub fn positions(self, origin: BlockPos) -> impl Iterator<Item = BlockPos> {
        let (lo, hi) = self.bounds(origin);
        (lo.z..=hi.z).flat_map(move |z| {
            (lo.y..=hi.y).flat_map(move |y| (lo.x..=hi.x).map(move |x| BlockPos::new(x, y, z)))
        })
    }

    /// Number of positions in the box.
    pub fn volume(&self) -> u128 {
        let (lo, hi) = self.bounds(BlockPos::ORIGIN);
        let span = |a: i32, b: i32| (i64::from(b) - i64::from(a) + 1) as u128;
        span(lo.x, hi.x) * span(lo.y, hi.y) * span(lo.z, hi.z)
    }
}

/// Runs `per_position` once for every position in `shape`.
///
/// Each position gets a fresh context whose rng is seeded from the world seed
/// and the position alone, so the same world always produces the same layout
/// no matter how many draws earlier steps made.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub shape: AreaBox,
    pub per_position: Box<Action>,
}

impl Area {
    pub const TAG: &'static str = "area";

    pub fn new(shape: AreaBox, per_position: impl Into<Action>) -> Self {
        Self {
            shape,
            per_position: Box::new(per_position.into()),
        }
    }

    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        let world_seed = ctx.world.seed();
        let origin = ctx.origin;

        let mut outcome = Outcome::skipped();
        let mut visited: u64 = 0;
        for pos in self.shape.positions(origin) {
            let mut rng = ActionRng::for_position(world_seed, pos);
            let mut cell = ctx.at(pos, &mut rng);
            outcome.merge(self.per_position.execute(&mut cell));
            visited += 1;
        }

        debug!(
            target: "shrine::action",
            origin = %origin,
            visited,
            applied = outcome.applied,
            faults = outcome.faults.len(),
            "area processed"
        );
        outcome
    }
}
