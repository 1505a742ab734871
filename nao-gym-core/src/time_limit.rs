//! Episode truncation by a step limit.
use crate::{
    record::{Record, RecordValue::Scalar},
    Env, Step,
};
use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Configuration of [`TimeLimit`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TimeLimitConfig<C> {
    /// Configuration of the wrapped environment.
    pub env_config: C,

    /// The number of steps after which an episode is truncated.
    pub max_steps: usize,
}

impl<C> TimeLimitConfig<C> {
    /// Constructs a configuration.
    pub fn new(env_config: C, max_steps: usize) -> Self {
        Self {
            env_config,
            max_steps,
        }
    }

    /// Sets the step limit.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }
}

/// Truncates episodes of the wrapped environment after a fixed number of steps.
///
/// Environments like the NAO standup task never end an episode by themselves.
/// This wrapper sets `is_truncated` at the `max_steps`-th step and inserts
/// `episode_length` into the record of that step.
pub struct TimeLimit<E: Env> {
    env: E,
    max_steps: usize,
    count_steps: usize,
}

impl<E: Env> TimeLimit<E> {
    /// Wraps an environment.
    pub fn new(env: E, max_steps: usize) -> Self {
        Self {
            env,
            max_steps,
            count_steps: 0,
        }
    }

    /// The number of steps taken in the current episode.
    pub fn count_steps(&self) -> usize {
        self.count_steps
    }

    /// Returns a reference to the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Config = TimeLimitConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self::new(
            E::build(&config.env_config, seed)?,
            config.max_steps,
        ))
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        let (step, mut record) = self.env.step(a)?;
        self.count_steps += 1;

        let mut is_truncated = step.is_truncated;
        if self.count_steps >= self.max_steps {
            is_truncated[0] = 1;
        }

        if (step.is_terminated[0] | is_truncated[0]) == 1 {
            debug!("Episode ends after {} steps", self.count_steps);
            record.insert("episode_length", Scalar(self.count_steps as _));
            self.count_steps = 0;
        }

        let step = Step::new(
            step.obs,
            step.act,
            step.reward,
            step.is_terminated,
            is_truncated,
            step.info,
            step.init_obs,
        );

        Ok((step, record))
    }

    /// The step counter is only cleared if the wrapped environment is reset,
    /// i.e. `is_done` is `None` or flags the end of the episode.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        match is_done {
            Some(is_done) if is_done.first() != Some(&1) => {}
            _ => self.count_steps = 0,
        }
        self.env.reset(is_done)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.count_steps = 0;
        self.env.reset_with_index(ix)
    }
}
