//! The standup task.
use crate::{NaoAct, NaoObs, NaoStandupConfig, RenderMode, TomatoThrower};
use anyhow::Result;
use log::{debug, info};
use nao_gym_core::{
    error::NaoGymError,
    record::{Record, RecordValue::Scalar},
    Configurable, Env, Step,
};
use nao_gym_rewards::{
    ControlAmplitudePenalty, ExternalImpactForcesPenalty, HeadHeightReward, RewardBreakdown,
    RewardComposer, RewardContext, TorqueChangeRatePenalty,
};
use nao_gym_sim::{KinematicSimulator, Simulator, PENALIZED_POSE};
use std::time::Duration;

/// Root position the robot is reset to, lying on the ground.
pub const ROOT_POSITION: [f64; 3] = [-0.13252355, -0.0909888, 0.05897925];

/// Root orientation `[w, x, y, z]` the robot is reset to.
pub const ROOT_QUATERNION: [f64; 4] = [0.69360432, 0.13973604, -0.692682, 0.13992331];

#[cfg_attr(doc, aquamarine::aquamarine)]
/// The NAO lies on the ground and has to get up.
///
/// The reward is the sum of four weighted terms: head height, squared
/// action amplitude, squared external forces and the change rate of the
/// control signal. The per-term values are returned as the [`Step::info`]
/// and in the step's [`Record`].
///
/// ```mermaid
/// graph LR
///     Act --> Simulator
///     Simulator --> RewardContext
///     Act --> RewardContext
///     RewardContext --> RewardComposer
///     RewardComposer --> RewardBreakdown
///     Simulator --> NaoObs
/// ```
///
/// The task neither terminates nor truncates episodes; wrap the environment in a
/// [`TimeLimit`](nao_gym_core::TimeLimit) to bound them. Resetting is
/// deterministic unless tomatoes are thrown, and even then the robot always
/// starts from the same state.
pub struct NaoStandup<S: Simulator + Configurable = KinematicSimulator> {
    nao: S,
    reward: RewardComposer,
    config: NaoStandupConfig<S::Config>,
    tomatoes: Option<TomatoThrower>,
    seed: i64,
    count_steps: usize,
    is_reset: bool,
}

impl<S: Simulator + Configurable> NaoStandup<S> {
    /// The simulated robot.
    pub fn nao(&self) -> &S {
        &self.nao
    }

    /// The configuration the environment was built with.
    pub fn config(&self) -> &NaoStandupConfig<S::Config> {
        &self.config
    }

    /// Number of actuators, i.e. the length of an action.
    pub fn n_actuators(&self) -> usize {
        self.nao.n_actuators()
    }

    /// Duration of one environment step in seconds.
    pub fn dt(&self) -> f64 {
        self.nao.timestep() * self.config.frame_skip as f64
    }

    /// Steps since the last reset.
    pub fn count_steps(&self) -> usize {
        self.count_steps
    }

    /// Names of the reward terms in the order of the breakdown.
    pub fn reward_names(&self) -> Vec<String> {
        self.reward.names().map(str::to_string).collect()
    }

    /// The current observation.
    pub fn observation(&self) -> NaoObs {
        NaoObs::from_simulator(&self.nao)
    }

    fn reset_model(&mut self) -> Result<NaoObs> {
        let qpos = self.nao.init_qpos().clone();
        let qvel = self.nao.init_qvel().clone();
        self.nao.set_state(&qpos, &qvel)?;
        self.nao.reset_pose(&PENALIZED_POSE);
        self.nao.set_transform(ROOT_POSITION, ROOT_QUATERNION);

        self.reward.reset();
        self.count_steps = 0;
        self.is_reset = true;

        Ok(self.observation())
    }

    fn render(&mut self) -> Result<()> {
        self.nao.render()?;
        if self.config.wait_in_millis > 0 {
            std::thread::sleep(Duration::from_millis(self.config.wait_in_millis));
        }
        Ok(())
    }
}

fn composer(config: &crate::RewardWeights, n_actuators: usize, dt: f64) -> RewardComposer {
    RewardComposer::new()
        .add(config.head_height, HeadHeightReward::new())
        .add(config.control_amplitude, ControlAmplitudePenalty)
        .add(config.external_impact_forces, ExternalImpactForcesPenalty)
        .add(
            config.torque_change_rate,
            TorqueChangeRatePenalty::new(n_actuators, dt),
        )
}

impl<S: Simulator + Configurable> Env for NaoStandup<S> {
    type Config = NaoStandupConfig<S::Config>;
    type Obs = NaoObs;
    type Act = NaoAct;
    type Info = RewardBreakdown;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let nao = S::build(&config.sim_config)?;
        let dt = nao.timestep() * config.frame_skip as f64;
        let reward = composer(&config.weights, nao.n_actuators(), dt);
        let tomatoes = if config.throw_tomatoes {
            Some(TomatoThrower::new(config.tomatoes.clone(), seed as u64))
        } else {
            None
        };
        info!(
            "Built NaoStandup with {} actuators, dt = {}, tomatoes = {}",
            nao.n_actuators(),
            dt,
            config.throw_tomatoes
        );

        Ok(Self {
            nao,
            reward,
            config: config.clone(),
            tomatoes,
            seed,
            count_steps: 0,
            is_reset: false,
        })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        if !self.is_reset {
            return Err(NaoGymError::EnvNotReset.into());
        }
        a.validate(self.nao.n_actuators())?;

        if let Some(tomatoes) = self.tomatoes.as_mut() {
            tomatoes.step(&mut self.nao)?;
        }
        self.nao.do_simulation(&a.act, self.config.frame_skip)?;
        self.count_steps += 1;

        let rewards = self
            .reward
            .rewards(&RewardContext::new(&self.nao, &a.act))?;
        let reward = rewards.total();

        if self.config.render_mode == Some(RenderMode::Human) {
            self.render()?;
        }

        let mut record = Record::from(&rewards);
        record.insert("reward", Scalar(reward as f32));

        let step = Step::new(
            self.observation(),
            a.clone(),
            vec![reward as f32],
            vec![0],
            vec![0],
            rewards,
            None,
        );

        Ok((step, record))
    }

    /// Resets the environment if `is_done` is `None` or flags the end of the
    /// episode. Tomatoes keep drawing from the same stream across episodes.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        match is_done {
            Some(is_done) if is_done.first() != Some(&1) => Ok(self.observation()),
            _ => {
                if let Some(tomatoes) = self.tomatoes.as_mut() {
                    tomatoes.reset(None);
                }
                debug!("Reset NaoStandup");
                self.reset_model()
            }
        }
    }

    /// Resets the environment; `ix` offsets the seed of the tomatoes so that
    /// evaluation episodes are reproducible.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        if let Some(tomatoes) = self.tomatoes.as_mut() {
            tomatoes.reset(Some((self.seed as u64).wrapping_add(ix as u64)));
        }
        self.reset_model()
    }
}
