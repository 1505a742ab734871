//! Weighted sum of reward terms.
use crate::{Reward, RewardBreakdown, RewardContext};
use anyhow::Result;
use log::trace;

/// An ordered list of `(weight, term)` pairs.
///
/// ```rust
/// use nao_gym_rewards::{ControlAmplitudePenalty, HeadHeightReward, RewardComposer};
///
/// let composer = RewardComposer::new()
///     .add(1.0, HeadHeightReward::new())
///     .add(-0.1, ControlAmplitudePenalty);
/// assert_eq!(composer.names().collect::<Vec<_>>(), vec!["head_height", "control_amplitude"]);
/// ```
#[derive(Default)]
pub struct RewardComposer {
    terms: Vec<(f64, Box<dyn Reward>)>,
}

impl RewardComposer {
    /// Creates a composer without terms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a weighted term.
    pub fn add(mut self, weight: f64, term: impl Reward + 'static) -> Self {
        debug_assert!(weight.is_finite(), "weight of {} is not finite", term.name());
        self.terms.push((weight, Box::new(term)));
        self
    }

    /// Evaluates every term against `context` and returns the weighted values.
    ///
    /// The first error of a term is returned as is; terms after it are not
    /// evaluated.
    pub fn rewards(&mut self, context: &RewardContext) -> Result<RewardBreakdown> {
        let mut breakdown = RewardBreakdown::new();
        for (weight, term) in self.terms.iter_mut() {
            let value = *weight * term.evaluate(context)?;
            trace!("{} = {}", term.name(), value);
            breakdown.insert(term.name(), value);
        }
        Ok(breakdown)
    }

    /// Resets the state of every term.
    pub fn reset(&mut self) {
        for (_, term) in self.terms.iter_mut() {
            term.reset();
        }
    }

    /// Term names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(_, term)| term.name())
    }

    /// The number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no term is registered.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
