//! Counting module - joint angles and rep-counting state machines
//!
//! Re-exports only. All logic in submodules. Nothing in here touches
//! wasm types; the module is plain Rust driven by the bridge.

mod angles;
mod joints;
mod rep_counter;
mod session;

pub use angles::{joint_angle, DegenerateAngle};
pub use joints::{BodyPose, JointTriplet, Side};
pub use rep_counter::{LimbState, RepCounter, Thresholds, Transition};
pub use session::{
    ConfigError, CounterStatus, ExerciseKind, ExerciseSession, SessionStatus,
};
