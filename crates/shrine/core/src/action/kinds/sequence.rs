use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionContext, Outcome};

/// Runs every step in order. A failing step never stops the ones after it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub steps: Vec<Action>,
}

impl Sequence {
    pub const TAG: &'static str = "sequence";

    pub fn new(steps: impl IntoIterator<Item = Action>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// OR of the step results.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        self.steps.iter().map(|step| step.execute(ctx)).collect()
    }
}
