//! Key-value records for logging step and evaluation metrics.
//!
//! An environment returns a [`Record`] alongside every [`Step`](crate::Step).
//! The NAO environments put the weighted value of every reward term into it,
//! so a training loop can log the reward breakdown without knowing the
//! environment's info type.
//!
//! ```rust
//! use nao_gym_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("head_height", RecordValue::Scalar(0.12));
//! record.insert("simulator", RecordValue::String("kinematic".to_string()));
//! assert_eq!(record.get_scalar("head_height").unwrap(), 0.12);
//! ```
mod base;

pub use base::{Record, RecordValue};
