//! Landmark adapter - raw MediaPipe frame to named joints
//!
//! The counting core works on named joints, not landmark indices. This
//! adapter pulls the 12 exercise-relevant joints out of the raw
//! 33-landmark frame and returns None when no pose is tracked.

use nalgebra::Point3;

use super::landmarks::{
    get_all_landmarks, Landmark, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER,
    LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::counting::BodyPose;

fn point(lm: &Landmark) -> Point3<f32> {
    Point3::new(lm.x, lm.y, lm.z)
}

/// Map a raw landmark frame to the named joints the exercises need
pub fn body_pose(landmarks: &[Landmark; 33]) -> BodyPose {
    BodyPose {
        left_shoulder: point(&landmarks[LEFT_SHOULDER]),
        right_shoulder: point(&landmarks[RIGHT_SHOULDER]),
        left_elbow: point(&landmarks[LEFT_ELBOW]),
        right_elbow: point(&landmarks[RIGHT_ELBOW]),
        left_wrist: point(&landmarks[LEFT_WRIST]),
        right_wrist: point(&landmarks[RIGHT_WRIST]),
        left_hip: point(&landmarks[LEFT_HIP]),
        right_hip: point(&landmarks[RIGHT_HIP]),
        left_knee: point(&landmarks[LEFT_KNEE]),
        right_knee: point(&landmarks[RIGHT_KNEE]),
        left_ankle: point(&landmarks[LEFT_ANKLE]),
        right_ankle: point(&landmarks[RIGHT_ANKLE]),
    }
}

/// Named joints for the current frame, or None when no pose is tracked
///
/// None means "skip this frame": the session must not update counters.
pub fn current_pose() -> Option<BodyPose> {
    get_all_landmarks().map(|landmarks| body_pose(&landmarks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_joints_come_from_the_right_indices() {
        let mut landmarks = [Landmark::default(); 33];
        // Tag each landmark with its own index so mapping mistakes show
        for (i, lm) in landmarks.iter_mut().enumerate() {
            lm.x = i as f32;
            lm.y = i as f32 + 0.25;
            lm.z = i as f32 + 0.5;
        }
        let pose = body_pose(&landmarks);
        assert_eq!(pose.left_shoulder.x, LEFT_SHOULDER as f32);
        assert_eq!(pose.right_elbow.x, RIGHT_ELBOW as f32);
        assert_eq!(pose.left_wrist.x, LEFT_WRIST as f32);
        assert_eq!(pose.right_hip.x, RIGHT_HIP as f32);
        assert_eq!(pose.left_knee.x, LEFT_KNEE as f32);
        assert_eq!(pose.right_ankle.x, RIGHT_ANKLE as f32);
        // And y/z come along with the point
        assert_eq!(pose.left_ankle.y, LEFT_ANKLE as f32 + 0.25);
        assert_eq!(pose.left_ankle.z, LEFT_ANKLE as f32 + 0.5);
    }
}
