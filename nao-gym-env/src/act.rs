use nao_gym_core::{error::NaoGymError, Act};
use ndarray::Array1;

/// Control vector with one element per actuator.
#[derive(Clone, Debug, PartialEq)]
pub struct NaoAct {
    /// Stores the action.
    pub act: Array1<f64>,
}

impl NaoAct {
    /// Constructs an action.
    pub fn new(act: Array1<f64>) -> Self {
        Self { act }
    }

    /// An action of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self::new(Array1::zeros(n))
    }

    /// Checks that the action has `n_actuators` finite elements.
    pub fn validate(&self, n_actuators: usize) -> Result<(), NaoGymError> {
        if self.act.len() != n_actuators {
            return Err(NaoGymError::dimension_mismatch(
                "action",
                n_actuators,
                self.act.len(),
            ));
        }
        match self.act.iter().position(|a| !a.is_finite()) {
            Some(ix) => Err(NaoGymError::NonFiniteAction(ix)),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for NaoAct {
    fn from(act: Vec<f64>) -> Self {
        Self::new(Array1::from(act))
    }
}

impl Act for NaoAct {
    fn len(&self) -> usize {
        self.act.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(NaoAct::zeros(3).validate(3), Ok(()));
        assert_eq!(
            NaoAct::zeros(2).validate(3),
            Err(NaoGymError::dimension_mismatch("action", 3, 2))
        );
        assert_eq!(
            NaoAct::from(vec![0.0, f64::NAN, 0.0]).validate(3),
            Err(NaoGymError::NonFiniteAction(1))
        );
        assert_eq!(
            NaoAct::from(vec![f64::INFINITY]).validate(1),
            Err(NaoGymError::NonFiniteAction(0))
        );
    }
}
