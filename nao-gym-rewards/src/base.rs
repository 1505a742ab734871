//! Reward term interface.
use anyhow::Result;
use nao_gym_sim::Simulator;
use ndarray::Array1;

/// State a reward term sees after one environment step.
///
/// Built fresh for every step and only borrowed by the terms.
#[derive(Clone, Copy)]
pub struct RewardContext<'a> {
    /// The simulated robot after the step.
    pub nao: &'a dyn Simulator,

    /// The action applied in the step.
    pub action: &'a Array1<f64>,
}

impl<'a> RewardContext<'a> {
    /// Constructs a context.
    pub fn new(nao: &'a dyn Simulator, action: &'a Array1<f64>) -> Self {
        Self { nao, action }
    }
}

/// A scalar reward term.
///
/// Penalty terms return non-negative magnitudes; the sign of their
/// contribution comes from the weight they are registered with in a
/// [`RewardComposer`](crate::RewardComposer).
pub trait Reward {
    /// Stable name of the term, used as key of the reward breakdown.
    fn name(&self) -> &str;

    /// Evaluates the term.
    ///
    /// Given the same context and internal state, the result is the same.
    fn evaluate(&mut self, context: &RewardContext) -> Result<f64>;

    /// Forgets any state carried over from previous evaluations.
    fn reset(&mut self) {}
}
