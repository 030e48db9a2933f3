//! Workout Web - Pose-based Repetition Counter
//!
//! Entry point for WASM module. JavaScript owns the camera, MediaPipe
//! Pose inference, and canvas drawing; this crate owns the per-frame
//! counting state machines. Only contains:
//! - Module declarations
//! - The panic hook start function
//! - Re-exports of the bridge entry points and the counting core

mod bridge;
mod counting;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_session, get_current_angles, get_session_status, get_state_text, get_status_text,
    is_session_active, pose_lost, session_tick, start_session, stop_session, update_landmarks,
};

// Landmark-layer API for embedding without the session bridge
pub use bridge::{body_pose, current_pose, get_all_landmarks, Landmark};

// Counting core, usable as a plain Rust library too
pub use counting::{
    joint_angle, BodyPose, ConfigError, CounterStatus, DegenerateAngle, ExerciseKind,
    ExerciseSession, JointTriplet, LimbState, RepCounter, SessionStatus, Side, Thresholds,
    Transition,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
