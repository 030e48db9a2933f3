//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod adapter;
mod landmarks;
mod session_control;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    pose_lost,
    // Internal API
    get_all_landmarks,
    Landmark,
};

pub use adapter::{body_pose, current_pose};

pub use session_control::{
    start_session,
    session_tick,
    stop_session,
    clear_session,
    is_session_active,
    get_session_status,
    get_status_text,
    get_state_text,
    get_current_angles,
};
