#![warn(missing_docs)]
//! NAO standup environment.
//!
//! [`NaoStandup`] starts every episode with the robot lying on the ground in
//! the penalized pose and rewards it for raising its head while penalizing
//! large, jerky actuator commands and impacts.
//!
//! ```rust
//! use nao_gym_core::Env;
//! use nao_gym_env::{NaoAct, NaoStandup, NaoStandupConfig};
//!
//! let mut env: NaoStandup = NaoStandup::build(&NaoStandupConfig::default(), 0).unwrap();
//! env.reset(None).unwrap();
//! let (step, record) = env.step(&NaoAct::zeros(env.n_actuators())).unwrap();
//! assert_eq!(step.info.len(), 4);
//! assert!(record.get_scalar("head_height").is_ok());
//! ```
mod act;
mod config;
mod obs;
mod standup;
mod tomatoes;

pub use act::NaoAct;
pub use config::{NaoStandupConfig, RenderMode, RewardWeights, TomatoConfig};
pub use obs::NaoObs;
pub use standup::{NaoStandup, ROOT_POSITION, ROOT_QUATERNION};
pub use tomatoes::TomatoThrower;
