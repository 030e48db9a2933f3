//! Session control - exercise selection and per-frame ticking
//!
//! Holds the active exercise session and exposes its status to
//! JavaScript. JS drives the loop once per video frame:
//! `update_landmarks` (or `pose_lost`), then `session_tick`, then the
//! status getters for the overlay.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::adapter::current_pose;
use crate::counting::{CounterStatus, ExerciseKind, ExerciseSession};

thread_local! {
    static SESSION: RefCell<Option<ExerciseSession>> = RefCell::new(None);
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a new session, replacing any existing one
///
/// `exercise_code` matches the selection menu: 1 = right arm curls,
/// 2 = left arm curls, 3 = both arms curls, 4 = squats. Invalid codes
/// and a zero rep target are rejected before any counting starts.
#[wasm_bindgen]
pub fn start_session(exercise_code: u32, target_reps: u32) -> Result<(), JsValue> {
    let kind =
        ExerciseKind::from_code(exercise_code).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let session =
        ExerciseSession::new(kind, target_reps).map_err(|e| JsValue::from_str(&e.to_string()))?;
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(session);
    });
    web_sys::console::log_1(
        &format!("✅ Session started: {} x{}", kind.label(), target_reps).into(),
    );
    Ok(())
}

/// Apply the current frame to the session
///
/// Consumes whatever the landmark store holds: a detected pose, or
/// nothing (counters hold their state). Returns the completed flag.
/// Safe no-op when no session is active.
#[wasm_bindgen]
pub fn session_tick() -> bool {
    let pose = current_pose();
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(session) = slot.as_mut() else {
            return false;
        };
        let was_completed = session.is_completed();
        let status = session.update(pose.as_ref());
        if status.completed && !was_completed {
            web_sys::console::log_1(&session.status_line().into());
        }
        status.completed
    })
}

/// Freeze counters at their current values; further ticks are no-ops
#[wasm_bindgen]
pub fn stop_session() {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.stop();
        }
    });
}

/// Drop the session entirely (user picked a new exercise or set)
#[wasm_bindgen]
pub fn clear_session() {
    SESSION.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

#[wasm_bindgen]
pub fn is_session_active() -> bool {
    SESSION.with(|cell| cell.borrow().is_some())
}

/// Flat status for JS: [left_reps, right_reps, legs_reps, target, completed]
///
/// Slots the exercise does not track are -1; completed is 0/1.
#[wasm_bindgen]
pub fn get_session_status() -> Vec<i32> {
    let reps = |c: Option<CounterStatus>| c.map(|c| c.reps as i32).unwrap_or(-1);
    SESSION.with(|cell| match cell.borrow().as_ref() {
        Some(session) => {
            let s = session.status();
            vec![
                reps(s.left),
                reps(s.right),
                reps(s.legs),
                s.target as i32,
                s.completed as i32,
            ]
        }
        None => vec![-1, -1, -1, -1, 0],
    })
}

/// Overlay line, e.g. "Right Reps: 3/10" ("" when no session)
#[wasm_bindgen]
pub fn get_status_text() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|s| s.status_line())
            .unwrap_or_default()
    })
}

/// Per-limb phase labels, e.g. "left=down right=up" ("" when no session)
#[wasm_bindgen]
pub fn get_state_text() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|s| s.state_line())
            .unwrap_or_default()
    })
}

/// Last computed [left, right] joint angles for the angle overlay
///
/// NaN until a limb's angle has been computed at least once.
#[wasm_bindgen]
pub fn get_current_angles() -> Vec<f32> {
    SESSION.with(|cell| match cell.borrow().as_ref() {
        Some(session) => {
            let (left, right) = session.last_angles();
            vec![left.unwrap_or(f32::NAN), right.unwrap_or(f32::NAN)]
        }
        None => vec![f32::NAN, f32::NAN],
    })
}
