#![warn(missing_docs)]
//! Reward terms and their weighted composition.
//!
//! A task describes its reward as a [`RewardComposer`]: a list of weighted
//! [`Reward`] terms evaluated against the same [`RewardContext`] after every
//! environment step.
//!
//! ```rust
//! use nao_gym_rewards::{
//!     ControlAmplitudePenalty, HeadHeightReward, RewardComposer, RewardContext,
//! };
//! use nao_gym_core::Configurable;
//! use nao_gym_sim::{KinematicSimulator, KinematicSimulatorConfig, N_JOINTS};
//! use ndarray::Array1;
//!
//! let nao = KinematicSimulator::build(&KinematicSimulatorConfig::default()).unwrap();
//! let action = Array1::from_elem(N_JOINTS, 0.1);
//!
//! let mut composer = RewardComposer::new()
//!     .add(1.0, HeadHeightReward::new())
//!     .add(-0.1, ControlAmplitudePenalty);
//! let rewards = composer.rewards(&RewardContext::new(&nao, &action)).unwrap();
//! assert_eq!(rewards.len(), 2);
//! ```
mod base;
mod breakdown;
mod composer;
mod terms;

pub use base::{Reward, RewardContext};
pub use breakdown::RewardBreakdown;
pub use composer::RewardComposer;
pub use terms::{
    ControlAmplitudePenalty, ExternalImpactForcesPenalty, HeadHeightReward,
    TorqueChangeRatePenalty,
};
