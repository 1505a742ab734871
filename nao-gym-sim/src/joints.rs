//! Joint layout of the NAO robot.
use serde::{Deserialize, Serialize};

/// The number of joints (and actuators) of the NAO model.
pub const N_JOINTS: usize = 26;

/// Joint names in the order of [`Joints::to_array`].
pub const JOINT_NAMES: [&str; N_JOINTS] = [
    "head_yaw",
    "head_pitch",
    "left_shoulder_pitch",
    "left_shoulder_roll",
    "left_elbow_yaw",
    "left_elbow_roll",
    "left_wrist_yaw",
    "left_hand",
    "right_shoulder_pitch",
    "right_shoulder_roll",
    "right_elbow_yaw",
    "right_elbow_roll",
    "right_wrist_yaw",
    "right_hand",
    "left_hip_yaw_pitch",
    "left_hip_roll",
    "left_hip_pitch",
    "left_knee_pitch",
    "left_ankle_pitch",
    "left_ankle_roll",
    "right_hip_yaw_pitch",
    "right_hip_roll",
    "right_hip_pitch",
    "right_knee_pitch",
    "right_ankle_pitch",
    "right_ankle_roll",
];

/// Head joints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadJoints<T> {
    /// Yaw.
    pub yaw: T,
    /// Pitch.
    pub pitch: T,
}

/// Joints of one arm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmJoints<T> {
    /// Shoulder pitch.
    pub shoulder_pitch: T,
    /// Shoulder roll.
    pub shoulder_roll: T,
    /// Elbow yaw.
    pub elbow_yaw: T,
    /// Elbow roll.
    pub elbow_roll: T,
    /// Wrist yaw.
    pub wrist_yaw: T,
    /// Hand.
    pub hand: T,
}

/// Joints of one leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegJoints<T> {
    /// Hip yaw pitch.
    pub hip_yaw_pitch: T,
    /// Hip roll.
    pub hip_roll: T,
    /// Hip pitch.
    pub hip_pitch: T,
    /// Knee pitch.
    pub knee_pitch: T,
    /// Ankle pitch.
    pub ankle_pitch: T,
    /// Ankle roll.
    pub ankle_roll: T,
}

/// All joints of the robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Joints<T> {
    /// Head.
    pub head: HeadJoints<T>,
    /// Left arm.
    pub left_arm: ArmJoints<T>,
    /// Right arm.
    pub right_arm: ArmJoints<T>,
    /// Left leg.
    pub left_leg: LegJoints<T>,
    /// Right leg.
    pub right_leg: LegJoints<T>,
}

impl<T: Copy> ArmJoints<T> {
    fn to_array(self) -> [T; 6] {
        [
            self.shoulder_pitch,
            self.shoulder_roll,
            self.elbow_yaw,
            self.elbow_roll,
            self.wrist_yaw,
            self.hand,
        ]
    }

    fn from_slice(s: &[T]) -> Self {
        Self {
            shoulder_pitch: s[0],
            shoulder_roll: s[1],
            elbow_yaw: s[2],
            elbow_roll: s[3],
            wrist_yaw: s[4],
            hand: s[5],
        }
    }
}

impl<T: Copy> LegJoints<T> {
    fn to_array(self) -> [T; 6] {
        [
            self.hip_yaw_pitch,
            self.hip_roll,
            self.hip_pitch,
            self.knee_pitch,
            self.ankle_pitch,
            self.ankle_roll,
        ]
    }

    fn from_slice(s: &[T]) -> Self {
        Self {
            hip_yaw_pitch: s[0],
            hip_roll: s[1],
            hip_pitch: s[2],
            knee_pitch: s[3],
            ankle_pitch: s[4],
            ankle_roll: s[5],
        }
    }
}

impl<T: Copy> Joints<T> {
    /// Flattens the joints in the order of [`JOINT_NAMES`].
    pub fn to_array(self) -> [T; N_JOINTS] {
        let mut out = [self.head.yaw; N_JOINTS];
        out[1] = self.head.pitch;
        out[2..8].copy_from_slice(&self.left_arm.to_array());
        out[8..14].copy_from_slice(&self.right_arm.to_array());
        out[14..20].copy_from_slice(&self.left_leg.to_array());
        out[20..26].copy_from_slice(&self.right_leg.to_array());
        out
    }

    /// Builds joints from values in the order of [`JOINT_NAMES`].
    ///
    /// Returns `None` if `s` does not have exactly [`N_JOINTS`] elements.
    pub fn from_slice(s: &[T]) -> Option<Self> {
        if s.len() != N_JOINTS {
            return None;
        }
        Some(Self {
            head: HeadJoints {
                yaw: s[0],
                pitch: s[1],
            },
            left_arm: ArmJoints::from_slice(&s[2..8]),
            right_arm: ArmJoints::from_slice(&s[8..14]),
            left_leg: LegJoints::from_slice(&s[14..20]),
            right_leg: LegJoints::from_slice(&s[20..26]),
        })
    }
}

/// The pose of a penalized robot: upright, arms hanging, legs slightly bent.
///
/// The standup task resets the joints into this pose before placing the
/// robot on the ground.
pub const PENALIZED_POSE: Joints<f64> = Joints {
    head: HeadJoints {
        yaw: 0.0,
        pitch: 0.0,
    },
    left_arm: ArmJoints {
        shoulder_pitch: 1.57,
        shoulder_roll: 0.1,
        elbow_yaw: 0.0,
        elbow_roll: 0.0,
        wrist_yaw: -1.57,
        hand: 0.0,
    },
    right_arm: ArmJoints {
        shoulder_pitch: 1.57,
        shoulder_roll: -0.1,
        elbow_yaw: 0.0,
        elbow_roll: 0.0,
        wrist_yaw: 1.57,
        hand: 0.0,
    },
    left_leg: LegJoints {
        hip_yaw_pitch: 0.0,
        hip_roll: 0.0,
        hip_pitch: -0.4,
        knee_pitch: 0.8,
        ankle_pitch: -0.4,
        ankle_roll: 0.0,
    },
    right_leg: LegJoints {
        hip_yaw_pitch: 0.0,
        hip_roll: 0.0,
        hip_pitch: -0.4,
        knee_pitch: 0.8,
        ankle_pitch: -0.4,
        ankle_roll: 0.0,
    },
};
