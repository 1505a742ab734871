use crate::{Reward, RewardContext};
use anyhow::Result;

/// Height of the head above the ground; higher is better.
pub struct HeadHeightReward {
    body: String,
}

impl HeadHeightReward {
    /// Tracks the body named `Head`.
    pub fn new() -> Self {
        Self::with_body("Head")
    }

    /// Tracks the named body instead of the head.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Default for HeadHeightReward {
    fn default() -> Self {
        Self::new()
    }
}

impl Reward for HeadHeightReward {
    fn name(&self) -> &str {
        "head_height"
    }

    fn evaluate(&mut self, context: &RewardContext) -> Result<f64> {
        Ok(context.nao.body_position(&self.body)?[2])
    }
}
