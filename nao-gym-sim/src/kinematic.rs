//! Deterministic kinematic model of the NAO robot.
use crate::{Joints, Simulator, N_JOINTS, ROOT_NQ, ROOT_NV};
use anyhow::Result;
use log::trace;
use nalgebra::{Isometry3, Point3, Quaternion, Translation3, UnitQuaternion, Vector3};
use nao_gym_core::{error::NaoGymError, Configurable, YamlConfig};
use ndarray::{s, Array1, Array2};
use serde::{Deserialize, Serialize};

/// Bodies reported by [`KinematicSimulator`], in the row order of
/// [`Simulator::external_forces`].
pub const BODY_NAMES: [&str; 3] = ["world", "Torso", "Head"];

const TORSO: usize = 1;
const HEAD: usize = 2;

/// Configuration of [`KinematicSimulator`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct KinematicSimulatorConfig {
    /// Duration of one frame in seconds.
    pub timestep: f64,

    /// Proportional gain of the joint position servos.
    pub kp: f64,

    /// Derivative gain of the joint position servos.
    pub kd: f64,

    /// Rotational inertia of every joint.
    pub joint_inertia: f64,

    /// Maximum absolute actuator torque.
    pub torque_limit: f64,

    /// Position of the neck in the torso frame.
    pub neck_offset: [f64; 3],

    /// Position of the head center in the neck frame.
    pub head_center_offset: [f64; 3],

    /// Radius of the contact spheres around torso and head.
    pub contact_radius: f64,

    /// Stiffness of the ground penalty spring.
    pub ground_stiffness: f64,

    /// Root position of the initial configuration.
    pub init_root_position: [f64; 3],
}

impl Default for KinematicSimulatorConfig {
    fn default() -> Self {
        Self {
            timestep: 0.005,
            kp: 50.0,
            kd: 1.0,
            joint_inertia: 0.05,
            torque_limit: 5.0,
            neck_offset: [0.0, 0.0, 0.1265],
            head_center_offset: [0.0, 0.0, 0.05],
            contact_radius: 0.06,
            ground_stiffness: 5000.0,
            init_root_position: [0.0, 0.0, 0.333],
        }
    }
}

impl KinematicSimulatorConfig {
    /// Sets the frame duration.
    pub fn timestep(mut self, v: f64) -> Self {
        self.timestep = v;
        self
    }

    /// Sets the maximum absolute actuator torque.
    pub fn torque_limit(mut self, v: f64) -> Self {
        self.torque_limit = v;
        self
    }

    /// Sets the stiffness of the ground.
    pub fn ground_stiffness(mut self, v: f64) -> Self {
        self.ground_stiffness = v;
        self
    }
}

impl YamlConfig for KinematicSimulatorConfig {}

/// A NAO robot whose root is placed, not simulated.
///
/// The root pose only changes through [`Simulator::set_transform`] or
/// [`Simulator::set_state`]. Every joint is driven by a saturated PD servo
/// towards the commanded position and integrated with semi-implicit Euler.
/// Torso and head are spheres that touch the ground plane `z = 0` through a
/// penalty spring, which is what [`Simulator::external_forces`] reports
/// together with forces given to [`Simulator::apply_external_force`].
pub struct KinematicSimulator {
    config: KinematicSimulatorConfig,
    qpos: Array1<f64>,
    qvel: Array1<f64>,
    init_qpos: Array1<f64>,
    init_qvel: Array1<f64>,
    cfrc_ext: Array2<f64>,
    pending_forces: Vec<(usize, [f64; 3])>,
    time: f64,
}

impl Configurable for KinematicSimulator {
    type Config = KinematicSimulatorConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        let mut init_qpos: Array1<f64> = Array1::zeros(ROOT_NQ + N_JOINTS);
        init_qpos
            .slice_mut(s![0..3])
            .assign(&Array1::from(config.init_root_position.to_vec()));
        init_qpos[3] = 1.0;
        let init_qvel: Array1<f64> = Array1::zeros(ROOT_NV + N_JOINTS);

        let mut sim = Self {
            config: config.clone(),
            qpos: init_qpos.clone(),
            qvel: init_qvel.clone(),
            init_qpos,
            init_qvel,
            cfrc_ext: Array2::zeros((BODY_NAMES.len(), 6)),
            pending_forces: Vec::new(),
            time: 0.0,
        };
        sim.update_contacts();
        Ok(sim)
    }
}

impl KinematicSimulator {
    /// Simulated time since the last [`Simulator::set_state`].
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The configuration.
    pub fn config(&self) -> &KinematicSimulatorConfig {
        &self.config
    }

    fn body_index(name: &str) -> Result<usize> {
        BODY_NAMES
            .iter()
            .position(|n| *n == name)
            .ok_or_else(|| NaoGymError::UnknownBody(name.to_string()).into())
    }

    fn root_position(&self) -> [f64; 3] {
        [self.qpos[0], self.qpos[1], self.qpos[2]]
    }

    fn root_quaternion(&self) -> [f64; 4] {
        [self.qpos[3], self.qpos[4], self.qpos[5], self.qpos[6]]
    }

    fn root_isometry(&self) -> Isometry3<f64> {
        let [w, x, y, z] = self.root_quaternion();
        Isometry3::from_parts(
            Translation3::from(Vector3::from(self.root_position())),
            UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z)),
        )
    }

    fn head_position(&self) -> [f64; 3] {
        let neck = Isometry3::from_parts(
            Translation3::from(Vector3::from(self.config.neck_offset)),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.qpos[ROOT_NQ + 1]),
        );
        let head = self.root_isometry() * neck * Point3::from(self.config.head_center_offset);
        [head.x, head.y, head.z]
    }

    fn position_of(&self, body: usize) -> [f64; 3] {
        match body {
            TORSO => self.root_position(),
            HEAD => self.head_position(),
            _ => [0.0; 3],
        }
    }

    fn update_contacts(&mut self) {
        self.cfrc_ext.fill(0.0);
        for body in [TORSO, HEAD] {
            let penetration = self.config.contact_radius - self.position_of(body)[2];
            if penetration > 0.0 {
                self.cfrc_ext[[body, 5]] = self.config.ground_stiffness * penetration;
            }
        }
    }

    fn step_joints(&mut self, ctrl: &Array1<f64>) {
        let dt = self.config.timestep;
        let limit = self.config.torque_limit;
        for j in 0..N_JOINTS {
            let q = self.qpos[ROOT_NQ + j];
            let v = self.qvel[ROOT_NV + j];
            let force = (self.config.kp * (ctrl[j] - q) - self.config.kd * v).clamp(-limit, limit);
            let v = v + force / self.config.joint_inertia * dt;
            self.qvel[ROOT_NV + j] = v;
            self.qpos[ROOT_NQ + j] = q + v * dt;
        }
        self.time += dt;
    }
}

impl Simulator for KinematicSimulator {
    fn n_actuators(&self) -> usize {
        N_JOINTS
    }

    fn timestep(&self) -> f64 {
        self.config.timestep
    }

    fn qpos(&self) -> &Array1<f64> {
        &self.qpos
    }

    fn qvel(&self) -> &Array1<f64> {
        &self.qvel
    }

    fn init_qpos(&self) -> &Array1<f64> {
        &self.init_qpos
    }

    fn init_qvel(&self) -> &Array1<f64> {
        &self.init_qvel
    }

    fn set_state(&mut self, qpos: &Array1<f64>, qvel: &Array1<f64>) -> Result<()> {
        if qpos.len() != self.qpos.len() {
            return Err(NaoGymError::dimension_mismatch("qpos", self.qpos.len(), qpos.len()).into());
        }
        if qvel.len() != self.qvel.len() {
            return Err(NaoGymError::dimension_mismatch("qvel", self.qvel.len(), qvel.len()).into());
        }
        self.qpos.assign(qpos);
        self.qvel.assign(qvel);
        self.pending_forces.clear();
        self.time = 0.0;
        self.update_contacts();
        Ok(())
    }

    fn reset_pose(&mut self, pose: &Joints<f64>) {
        self.qpos
            .slice_mut(s![ROOT_NQ..])
            .assign(&Array1::from(pose.to_array().to_vec()));
        self.qvel.slice_mut(s![ROOT_NV..]).fill(0.0);
        self.update_contacts();
    }

    fn set_transform(&mut self, position: [f64; 3], quaternion: [f64; 4]) {
        self.qpos
            .slice_mut(s![0..3])
            .assign(&Array1::from(position.to_vec()));
        self.qpos
            .slice_mut(s![3..ROOT_NQ])
            .assign(&Array1::from(quaternion.to_vec()));
        self.update_contacts();
    }

    fn transform(&self) -> ([f64; 3], [f64; 4]) {
        (self.root_position(), self.root_quaternion())
    }

    fn do_simulation(&mut self, ctrl: &Array1<f64>, n_frames: usize) -> Result<()> {
        if ctrl.len() != N_JOINTS {
            return Err(NaoGymError::dimension_mismatch("ctrl", N_JOINTS, ctrl.len()).into());
        }
        for _ in 0..n_frames {
            self.step_joints(ctrl);
        }

        self.update_contacts();
        for (body, force) in self.pending_forces.drain(..) {
            for (i, f) in force.iter().enumerate() {
                self.cfrc_ext[[body, 3 + i]] += f;
            }
        }
        Ok(())
    }

    fn body_position(&self, name: &str) -> Result<[f64; 3]> {
        Ok(self.position_of(Self::body_index(name)?))
    }

    fn external_forces(&self) -> &Array2<f64> {
        &self.cfrc_ext
    }

    fn apply_external_force(&mut self, body: &str, force: [f64; 3]) -> Result<()> {
        let body = Self::body_index(body)?;
        self.pending_forces.push((body, force));
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        trace!(
            "t = {:.3}, root = {:?}, head = {:?}",
            self.time,
            self.transform(),
            self.head_position()
        );
        Ok(())
    }
}
