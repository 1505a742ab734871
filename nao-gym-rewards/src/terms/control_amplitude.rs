use crate::{Reward, RewardContext};
use anyhow::Result;

/// Sum of squares of the action; penalizes large actuator commands.
pub struct ControlAmplitudePenalty;

impl Reward for ControlAmplitudePenalty {
    fn name(&self) -> &str {
        "control_amplitude"
    }

    fn evaluate(&mut self, context: &RewardContext) -> Result<f64> {
        Ok(context.action.dot(context.action))
    }
}
