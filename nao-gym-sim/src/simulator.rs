//! Interface to a physics simulator of the NAO robot.
use crate::Joints;
use anyhow::Result;
use ndarray::{Array1, Array2};

/// Number of generalized position coordinates of the free root joint
/// (position and unit quaternion `[w, x, y, z]`).
pub const ROOT_NQ: usize = 7;

/// Number of generalized velocity coordinates of the free root joint
/// (linear and angular velocity).
pub const ROOT_NV: usize = 6;

/// A simulated NAO robot.
///
/// The generalized position `qpos` starts with the root pose
/// (`ROOT_NQ` values) followed by one value per joint, and `qvel` starts
/// with the root velocity (`ROOT_NV` values) followed by the joint
/// velocities. Joints are ordered as in [`JOINT_NAMES`](crate::JOINT_NAMES).
///
/// The trait is object safe so that reward terms can read the state through
/// `&dyn Simulator`.
pub trait Simulator {
    /// Number of actuators, i.e. the length of a control vector.
    fn n_actuators(&self) -> usize;

    /// Duration of one simulation frame in seconds.
    fn timestep(&self) -> f64;

    /// Generalized positions.
    fn qpos(&self) -> &Array1<f64>;

    /// Generalized velocities.
    fn qvel(&self) -> &Array1<f64>;

    /// Generalized positions of the model in its initial configuration.
    fn init_qpos(&self) -> &Array1<f64>;

    /// Generalized velocities of the model in its initial configuration.
    fn init_qvel(&self) -> &Array1<f64>;

    /// Overwrites the generalized state and clears pending external forces.
    ///
    /// Fails if the lengths do not match the model.
    fn set_state(&mut self, qpos: &Array1<f64>, qvel: &Array1<f64>) -> Result<()>;

    /// Puts the joints into `pose` and zeroes the joint velocities.
    fn reset_pose(&mut self, pose: &Joints<f64>);

    /// Forces the root pose: `position` in world frame and orientation as a
    /// quaternion `[w, x, y, z]`.
    fn set_transform(&mut self, position: [f64; 3], quaternion: [f64; 4]);

    /// Returns the root pose as set by [`Simulator::set_transform`].
    fn transform(&self) -> ([f64; 3], [f64; 4]);

    /// Applies the control vector `ctrl` for `n_frames` simulation frames.
    ///
    /// Fails if `ctrl` does not have [`Simulator::n_actuators`] elements.
    fn do_simulation(&mut self, ctrl: &Array1<f64>, n_frames: usize) -> Result<()>;

    /// World position of the named body.
    fn body_position(&self, name: &str) -> Result<[f64; 3]>;

    /// External forces acting on each body, one row per body with
    /// `[torque_x, torque_y, torque_z, force_x, force_y, force_z]`.
    fn external_forces(&self) -> &Array2<f64>;

    /// Applies `force` to the named body during the next call of
    /// [`Simulator::do_simulation`].
    fn apply_external_force(&mut self, body: &str, force: [f64; 3]) -> Result<()>;

    /// Renders the current frame.
    fn render(&mut self) -> Result<()> {
        Ok(())
    }
}
