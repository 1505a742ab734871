#![warn(missing_docs)]
//! Simulator interface of the NAO environments.
//!
//! Environments never integrate physics themselves. They talk to a
//! [`Simulator`], which owns the generalized state of the robot and advances
//! it. [`KinematicSimulator`] is a deterministic implementation of the
//! interface with a free-floating root and servo-driven joints.
mod joints;
mod kinematic;
mod simulator;

pub use joints::{ArmJoints, HeadJoints, Joints, LegJoints, JOINT_NAMES, N_JOINTS, PENALIZED_POSE};
pub use kinematic::{KinematicSimulator, KinematicSimulatorConfig, BODY_NAMES};
pub use simulator::{Simulator, ROOT_NQ, ROOT_NV};
