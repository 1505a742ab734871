//! Reward terms of the NAO tasks.
mod control_amplitude;
mod external_impact_forces;
mod head_height;
mod torque_change_rate;

pub use control_amplitude::ControlAmplitudePenalty;
pub use external_impact_forces::ExternalImpactForcesPenalty;
pub use head_height::HeadHeightReward;
pub use torque_change_rate::TorqueChangeRatePenalty;
