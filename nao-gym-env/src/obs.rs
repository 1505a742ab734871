use nao_gym_core::Obs;
use nao_gym_sim::Simulator;
use ndarray::Array1;

/// Observation of a NAO environment: generalized positions followed by
/// generalized velocities.
#[derive(Clone, Debug, PartialEq)]
pub struct NaoObs {
    /// Stores the observation.
    pub obs: Array1<f64>,
}

impl NaoObs {
    /// Reads the observation from the simulator state.
    pub fn from_simulator(nao: &dyn Simulator) -> Self {
        let obs = nao.qpos().iter().chain(nao.qvel().iter()).cloned().collect();
        Self { obs }
    }
}

impl Obs for NaoObs {
    fn len(&self) -> usize {
        self.obs.len()
    }
}
