//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Represents an environment, typically an MDP.
///
/// An environment starts uninitialized. [`Env::reset`] brings it into the
/// ready state and every [`Env::step`] keeps it there until the episode ends
/// by termination or truncation.
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Uninitialized
///     Uninitialized --> Ready: reset
///     Ready --> Ready: step
///     Ready --> Ready: reset
/// ```
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    ///
    /// Returns an error if the action does not fit the environment.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    ///
    /// `is_done` is kept for compatibility with vectorized environments,
    /// which are not supported. The environment is reset if `is_done` is
    /// `None` or `is_done[0] == 1`.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs>;

    /// Performes an environment step and resets the environment if the episode ends.
    ///
    /// The observation after the reset is put in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            step.init_obs = Some(self.reset(None)?);
        }
        Ok((step, record))
    }

    /// Resets the environment with a given index.
    ///
    /// The index is used in an arbitrary way, for example as a random seed
    /// of an evaluation episode.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}
