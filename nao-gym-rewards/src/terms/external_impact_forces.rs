use crate::{Reward, RewardContext};
use anyhow::Result;

/// Sum of squares of the external forces and torques on all bodies.
///
/// Zero when nothing touches the robot.
pub struct ExternalImpactForcesPenalty;

impl Reward for ExternalImpactForcesPenalty {
    fn name(&self) -> &str {
        "external_impact_forces"
    }

    fn evaluate(&mut self, context: &RewardContext) -> Result<f64> {
        Ok(context.nao.external_forces().iter().map(|f| f * f).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::test_util::nao;
    use nao_gym_sim::{Simulator, N_JOINTS};
    use ndarray::Array1;

    #[test]
    fn test_zero_without_contacts() -> Result<()> {
        let nao = nao();
        let action = Array1::zeros(N_JOINTS);
        let value = ExternalImpactForcesPenalty.evaluate(&RewardContext::new(&nao, &action))?;
        assert_eq!(value, 0.0);
        Ok(())
    }

    #[test]
    fn test_applied_force() -> Result<()> {
        let mut nao = nao();
        let action = Array1::zeros(N_JOINTS);
        nao.apply_external_force("Torso", [3.0, 4.0, 0.0])?;
        nao.do_simulation(&action, 1)?;
        let value = ExternalImpactForcesPenalty.evaluate(&RewardContext::new(&nao, &action))?;
        assert!((value - 25.0).abs() < 1e-9);
        Ok(())
    }
}
