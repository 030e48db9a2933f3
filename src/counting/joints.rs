//! Named joint data - shared structures for angle calculations
//!
//! One frame of pose data, reduced to the 12 joints the exercises
//! actually measure. Coordinates are normalized (0-1) image space;
//! z is MediaPipe's relative depth.

use nalgebra::Point3;

/// Body side, used to pick which arm/leg triplet to measure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Three joints defining one measurable angle
///
/// The angle is measured at `vertex` between the rays toward
/// `proximal` and `distal` (e.g. shoulder-ELBOW-wrist).
#[derive(Clone, Copy, Debug)]
pub struct JointTriplet {
    pub proximal: Point3<f32>,
    pub vertex: Point3<f32>,
    pub distal: Point3<f32>,
}

/// Named joints for one detected frame
#[derive(Clone, Copy, Debug)]
pub struct BodyPose {
    pub left_shoulder: Point3<f32>,
    pub right_shoulder: Point3<f32>,
    pub left_elbow: Point3<f32>,
    pub right_elbow: Point3<f32>,
    pub left_wrist: Point3<f32>,
    pub right_wrist: Point3<f32>,
    pub left_hip: Point3<f32>,
    pub right_hip: Point3<f32>,
    pub left_knee: Point3<f32>,
    pub right_knee: Point3<f32>,
    pub left_ankle: Point3<f32>,
    pub right_ankle: Point3<f32>,
}

impl BodyPose {
    /// Shoulder-elbow-wrist triplet (elbow angle, for curls)
    pub fn arm(&self, side: Side) -> JointTriplet {
        match side {
            Side::Left => JointTriplet {
                proximal: self.left_shoulder,
                vertex: self.left_elbow,
                distal: self.left_wrist,
            },
            Side::Right => JointTriplet {
                proximal: self.right_shoulder,
                vertex: self.right_elbow,
                distal: self.right_wrist,
            },
        }
    }

    /// Hip-knee-ankle triplet (knee angle, for squats)
    pub fn leg(&self, side: Side) -> JointTriplet {
        match side {
            Side::Left => JointTriplet {
                proximal: self.left_hip,
                vertex: self.left_knee,
                distal: self.left_ankle,
            },
            Side::Right => JointTriplet {
                proximal: self.right_hip,
                vertex: self.right_knee,
                distal: self.right_ankle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_with_left_arm(shoulder: (f32, f32), elbow: (f32, f32), wrist: (f32, f32)) -> BodyPose {
        let zero = Point3::new(0.0, 0.0, 0.0);
        BodyPose {
            left_shoulder: Point3::new(shoulder.0, shoulder.1, 0.0),
            left_elbow: Point3::new(elbow.0, elbow.1, 0.0),
            left_wrist: Point3::new(wrist.0, wrist.1, 0.0),
            right_shoulder: zero,
            right_elbow: zero,
            right_wrist: zero,
            left_hip: zero,
            right_hip: zero,
            left_knee: zero,
            right_knee: zero,
            left_ankle: zero,
            right_ankle: zero,
        }
    }

    #[test]
    fn arm_triplet_puts_elbow_at_vertex() {
        let pose = pose_with_left_arm((0.1, 0.2), (0.3, 0.4), (0.5, 0.6));
        let triplet = pose.arm(Side::Left);
        assert_eq!(triplet.proximal, Point3::new(0.1, 0.2, 0.0));
        assert_eq!(triplet.vertex, Point3::new(0.3, 0.4, 0.0));
        assert_eq!(triplet.distal, Point3::new(0.5, 0.6, 0.0));
    }

    #[test]
    fn side_labels() {
        assert_eq!(Side::Left.label(), "left");
        assert_eq!(Side::Right.label(), "right");
    }
}
