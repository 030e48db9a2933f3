//! Joint angle calculation from vector headings
//!
//! Calculates the angle at a joint (elbow, knee) from the headings of
//! the two rays leaving the vertex, matching how the detection
//! thresholds were tuned.

use thiserror::Error;

use super::joints::JointTriplet;

/// A coordinate was NaN or infinite, so no meaningful angle exists.
///
/// Callers skip the affected limb for the current frame instead of
/// feeding a garbage angle into the rep counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("non-finite joint coordinate, no angle for this frame")]
pub struct DegenerateAngle;

/// Calculate the joint angle in degrees
///
/// Returns the angle at `triplet.vertex` in [0, 180]:
/// - 180° = limb fully straight
/// - small angles = fully bent (fist near shoulder, deep squat)
///
/// Computed in the 2D image plane; z (relative depth) is ignored.
pub fn joint_angle(triplet: &JointTriplet) -> Result<f32, DegenerateAngle> {
    let (a, b, c) = (triplet.proximal, triplet.vertex, triplet.distal);

    if ![a.x, a.y, b.x, b.y, c.x, c.y].iter().all(|v| v.is_finite()) {
        return Err(DegenerateAngle);
    }

    let heading_distal = (c.y - b.y).atan2(c.x - b.x);
    let heading_proximal = (a.y - b.y).atan2(a.x - b.x);

    let mut angle = (heading_distal - heading_proximal).to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    if angle.is_finite() {
        Ok(angle)
    } else {
        Err(DegenerateAngle)
    }
}
