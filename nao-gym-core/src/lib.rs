#![warn(missing_docs)]
//! Core contract of the NAO reinforcement learning environments.
//!
//! An environment implements [`Env`]: it is built from a configuration and a
//! seed, reset into an initial state and stepped with actions. Every step
//! produces a [`Step`] and a [`Record`](record::Record) with metrics for
//! logging.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};

mod config;
pub use config::{Configurable, YamlConfig};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod time_limit;
pub use time_limit::{TimeLimit, TimeLimitConfig};

#[cfg(test)]
mod dummy;
