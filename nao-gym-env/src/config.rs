//! Configuration of [`NaoStandup`](crate::NaoStandup).
use nao_gym_core::YamlConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// How the environment shows its frames.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum RenderMode {
    /// Render every step for a human watching.
    Human,
}

/// Weights of the reward terms of the standup task.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RewardWeights {
    /// Weight of the head height.
    pub head_height: f64,

    /// Weight of the squared action amplitude.
    pub control_amplitude: f64,

    /// Weight of the squared external forces.
    pub external_impact_forces: f64,

    /// Weight of the control change rate.
    pub torque_change_rate: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            head_height: 1.0,
            control_amplitude: -0.1,
            external_impact_forces: -0.5e-6,
            torque_change_rate: -0.01,
        }
    }
}

/// Projectiles thrown at the robot when `throw_tomatoes` is set.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TomatoConfig {
    /// Steps between two throws.
    pub interval: usize,

    /// Smallest impact force in newtons.
    pub min_force: f64,

    /// Largest impact force in newtons.
    pub max_force: f64,

    /// Body that is hit.
    pub target: String,
}

impl Default for TomatoConfig {
    fn default() -> Self {
        Self {
            interval: 50,
            min_force: 5.0,
            max_force: 20.0,
            target: "Head".to_string(),
        }
    }
}

/// Configuration of [`NaoStandup`](crate::NaoStandup).
///
/// `C` is the configuration of the simulator. The configuration holds every
/// constructor argument of the environment, so storing it is enough to
/// rebuild an equivalent environment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NaoStandupConfig<C> {
    /// Configuration of the simulator.
    pub sim_config: C,

    /// Simulation frames per environment step.
    pub frame_skip: usize,

    /// Render mode.
    pub render_mode: Option<RenderMode>,

    /// Wait after rendering a frame, in milliseconds.
    pub wait_in_millis: u64,

    /// Throw tomatoes at the robot.
    pub throw_tomatoes: bool,

    /// Tomato settings, used if `throw_tomatoes` is set.
    pub tomatoes: TomatoConfig,

    /// Reward weights.
    pub weights: RewardWeights,
}

impl<C: Default> Default for NaoStandupConfig<C> {
    fn default() -> Self {
        Self {
            sim_config: C::default(),
            frame_skip: 4,
            render_mode: None,
            wait_in_millis: 0,
            throw_tomatoes: false,
            tomatoes: TomatoConfig::default(),
            weights: RewardWeights::default(),
        }
    }
}

impl<C> NaoStandupConfig<C> {
    /// Sets the simulator configuration.
    pub fn sim_config(mut self, v: C) -> Self {
        self.sim_config = v;
        self
    }

    /// Sets the number of simulation frames per step.
    pub fn frame_skip(mut self, v: usize) -> Self {
        self.frame_skip = v;
        self
    }

    /// Sets the render mode.
    pub fn render_mode(mut self, v: Option<RenderMode>) -> Self {
        self.render_mode = v;
        self
    }

    /// Sets the wait after rendering a frame.
    pub fn set_wait_in_millis(mut self, v: u64) -> Self {
        self.wait_in_millis = v;
        self
    }

    /// Enables or disables tomato throwing.
    pub fn throw_tomatoes(mut self, v: bool) -> Self {
        self.throw_tomatoes = v;
        self
    }

    /// Sets the tomato settings.
    pub fn tomatoes(mut self, v: TomatoConfig) -> Self {
        self.tomatoes = v;
        self
    }

    /// Sets the reward weights.
    pub fn weights(mut self, v: RewardWeights) -> Self {
        self.weights = v;
        self
    }
}

impl<C: Serialize + DeserializeOwned> YamlConfig for NaoStandupConfig<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use nao_gym_sim::KinematicSimulatorConfig;
    use tempdir::TempDir;

    #[test]
    fn test_serde_nao_standup_config() -> Result<()> {
        let config = NaoStandupConfig::<KinematicSimulatorConfig>::default()
            .frame_skip(5)
            .render_mode(Some(RenderMode::Human))
            .throw_tomatoes(true)
            .sim_config(KinematicSimulatorConfig::default().timestep(0.002));

        let dir = TempDir::new("nao_standup_config")?;
        let path = dir.path().join("nao_standup.yaml");
        config.save(&path)?;
        let config_ = NaoStandupConfig::<KinematicSimulatorConfig>::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_default_weights() {
        let weights = RewardWeights::default();
        assert_eq!(weights.head_height, 1.0);
        assert_eq!(weights.control_amplitude, -0.1);
        assert_eq!(weights.external_impact_forces, -0.5e-6);
        assert_eq!(weights.torque_change_rate, -0.01);
    }
}
