use crate::{Reward, RewardContext};
use anyhow::Result;
use nao_gym_core::error::NaoGymError;
use ndarray::Array1;

/// Rate of change of the control signal.
///
/// Returns `sum(|a_t - a_{t-1}|) / (n_actuators * dt)`. Without a previous
/// action, i.e. on the first evaluation after construction or
/// [`Reward::reset`], the change is taken as zero.
pub struct TorqueChangeRatePenalty {
    n_actuators: usize,
    dt: f64,
    previous_action: Option<Array1<f64>>,
}

impl TorqueChangeRatePenalty {
    /// Constructs the term for `n_actuators` actuators and a control period of `dt` seconds.
    pub fn new(n_actuators: usize, dt: f64) -> Self {
        Self {
            n_actuators,
            dt,
            previous_action: None,
        }
    }
}

impl Reward for TorqueChangeRatePenalty {
    fn name(&self) -> &str {
        "torque_change_rate"
    }

    fn evaluate(&mut self, context: &RewardContext) -> Result<f64> {
        let action = context.action;
        if action.len() != self.n_actuators {
            return Err(
                NaoGymError::dimension_mismatch("action", self.n_actuators, action.len()).into(),
            );
        }

        let value = match &self.previous_action {
            Some(previous) => {
                let change: f64 = (action - previous).mapv(f64::abs).sum();
                change / (self.n_actuators as f64 * self.dt)
            }
            None => 0.0,
        };
        self.previous_action = Some(action.clone());
        Ok(value)
    }

    fn reset(&mut self) {
        self.previous_action = None;
    }
}
