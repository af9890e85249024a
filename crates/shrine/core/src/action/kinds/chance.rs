use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::{Action, ActionContext, Outcome};

/// Runs `action` with the given probability.
///
/// Exactly one draw is taken per invocation, whether or not the child runs,
/// so sibling steps see the same rng stream regardless of the outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chance {
    pub probability: f32,
    pub action: Box<Action>,
}

impl Chance {
    pub const TAG: &'static str = "chance";

    pub fn new(probability: f32, action: impl Into<Action>) -> Self {
        Self {
            probability,
            action: Box::new(action.into()),
        }
    }

    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        let sample = ctx.rng.next_float();
        if sample < self.probability {
            self.action.execute(ctx)
        } else {
            trace!(
                target: "shrine::action",
                pos = %ctx.origin,
                sample,
                probability = self.probability,
                "chance roll failed"
            );
            Outcome::skipped()
        }
    }
}
