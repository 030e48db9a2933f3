//! Exercise session - composes rep counters against a target
//!
//! One session per set. The exercise kind decides how many counters run
//! and how they are fed: one arm, both arms independently, or both legs
//! through a single synchronized counter.

use thiserror::Error;

use super::angles::joint_angle;
use super::joints::{BodyPose, Side};
use super::rep_counter::{LimbState, RepCounter, Thresholds};

/// Supported exercises, selector codes match the UI menu (1-4)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseKind {
    RightArmCurls,
    LeftArmCurls,
    BothArmsCurls,
    Squats,
}

impl ExerciseKind {
    pub fn from_code(code: u32) -> Result<Self, ConfigError> {
        match code {
            1 => Ok(ExerciseKind::RightArmCurls),
            2 => Ok(ExerciseKind::LeftArmCurls),
            3 => Ok(ExerciseKind::BothArmsCurls),
            4 => Ok(ExerciseKind::Squats),
            other => Err(ConfigError::UnknownExercise(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::RightArmCurls => "Right arm curls",
            ExerciseKind::LeftArmCurls => "Left arm curls",
            ExerciseKind::BothArmsCurls => "Both arms curls",
            ExerciseKind::Squats => "Squats",
        }
    }

    /// Angle cutoffs for this exercise's joint
    pub fn thresholds(&self) -> Thresholds {
        match self {
            ExerciseKind::Squats => Thresholds::SQUAT,
            _ => Thresholds::CURL,
        }
    }
}

/// Rejected session configuration; nothing starts counting with these
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rep target must be greater than zero")]
    ZeroTarget,
    #[error("unknown exercise code: {0}")]
    UnknownExercise(u32),
}

/// Counter layout per exercise kind
#[derive(Debug)]
enum Counters {
    /// One arm (right- or left-only curls)
    Single { side: Side, arm: RepCounter },
    /// Both arms, each with its own counter and its own triplet
    Independent { left: RepCounter, right: RepCounter },
    /// Both legs driving one counter; transitions need both at once
    Synchronized { legs: RepCounter },
}

/// Snapshot of one counter for the status object
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterStatus {
    pub reps: u32,
    pub state: LimbState,
}

/// Per-frame session output: per-limb counts plus the completed flag
///
/// Slots the exercise does not track are `None` (e.g. `legs` for curls).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub left: Option<CounterStatus>,
    pub right: Option<CounterStatus>,
    pub legs: Option<CounterStatus>,
    pub target: u32,
    pub completed: bool,
}

/// One exercise set: counters, target, completion latch
#[derive(Debug)]
pub struct ExerciseSession {
    kind: ExerciseKind,
    target: u32,
    counters: Counters,
    /// Latched on the first frame every counter reaches the target
    completed: bool,
    /// Frozen by `stop()`; updates become no-ops
    stopped: bool,
    /// Last successfully computed angles, for the JS angle overlay
    last_left_angle: Option<f32>,
    last_right_angle: Option<f32>,
}

impl ExerciseSession {
    pub fn new(kind: ExerciseKind, target: u32) -> Result<Self, ConfigError> {
        if target == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        let thresholds = kind.thresholds();
        let counters = match kind {
            ExerciseKind::RightArmCurls => Counters::Single {
                side: Side::Right,
                arm: RepCounter::new(thresholds),
            },
            ExerciseKind::LeftArmCurls => Counters::Single {
                side: Side::Left,
                arm: RepCounter::new(thresholds),
            },
            ExerciseKind::BothArmsCurls => Counters::Independent {
                left: RepCounter::new(thresholds),
                right: RepCounter::new(thresholds),
            },
            ExerciseKind::Squats => Counters::Synchronized {
                legs: RepCounter::new(thresholds),
            },
        };
        Ok(Self {
            kind,
            target,
            counters,
            completed: false,
            stopped: false,
            last_left_angle: None,
            last_right_angle: None,
        })
    }

    /// Apply one frame of pose data
    ///
    /// `None` means no pose was detected this frame: no counter is
    /// touched, prior state and counts hold. A limb whose angle comes
    /// out degenerate is skipped the same way, individually.
    pub fn update(&mut self, pose: Option<&BodyPose>) -> SessionStatus {
        if self.stopped {
            return self.status();
        }
        if let Some(pose) = pose {
            self.apply(pose);
        }
        if !self.completed && self.targets_met() {
            self.completed = true;
        }
        self.status()
    }

    fn apply(&mut self, pose: &BodyPose) {
        match &mut self.counters {
            Counters::Single { side, arm } => {
                let side = *side;
                if let Ok(angle) = joint_angle(&pose.arm(side)) {
                    arm.update(angle);
                    match side {
                        Side::Left => self.last_left_angle = Some(angle),
                        Side::Right => self.last_right_angle = Some(angle),
                    }
                }
            }
            Counters::Independent { left, right } => {
                if let Ok(angle) = joint_angle(&pose.arm(Side::Left)) {
                    left.update(angle);
                    self.last_left_angle = Some(angle);
                }
                if let Ok(angle) = joint_angle(&pose.arm(Side::Right)) {
                    right.update(angle);
                    self.last_right_angle = Some(angle);
                }
            }
            Counters::Synchronized { legs } => {
                // Either leg failing means the conjunction cannot be
                // confirmed, so the whole pair update is skipped.
                let left = joint_angle(&pose.leg(Side::Left));
                let right = joint_angle(&pose.leg(Side::Right));
                if let (Ok(l), Ok(r)) = (left, right) {
                    legs.update_pair(l, r);
                    self.last_left_angle = Some(l);
                    self.last_right_angle = Some(r);
                }
            }
        }
    }

    fn targets_met(&self) -> bool {
        match &self.counters {
            Counters::Single { arm, .. } => arm.count() >= self.target,
            Counters::Independent { left, right } => {
                left.count() >= self.target && right.count() >= self.target
            }
            Counters::Synchronized { legs } => legs.count() >= self.target,
        }
    }

    /// Current status without consuming a frame
    pub fn status(&self) -> SessionStatus {
        let snapshot = |c: &RepCounter| CounterStatus {
            reps: c.count(),
            state: c.state(),
        };
        let (left, right, legs) = match &self.counters {
            Counters::Single { side: Side::Left, arm } => (Some(snapshot(arm)), None, None),
            Counters::Single { side: Side::Right, arm } => (None, Some(snapshot(arm)), None),
            Counters::Independent { left, right } => {
                (Some(snapshot(left)), Some(snapshot(right)), None)
            }
            Counters::Synchronized { legs } => (None, None, Some(snapshot(legs))),
        };
        SessionStatus {
            left,
            right,
            legs,
            target: self.target,
            completed: self.completed,
        }
    }

    /// Overlay text in the tracker's format, e.g. "Right Reps: 3/10"
    pub fn status_line(&self) -> String {
        if self.completed {
            return format!("{} completed!", self.kind.label());
        }
        match &self.counters {
            Counters::Single { side, arm } => {
                let name = match side {
                    Side::Left => "Left",
                    Side::Right => "Right",
                };
                format!("{} Reps: {}/{}", name, arm.count(), self.target)
            }
            Counters::Independent { left, right } => format!(
                "Right Reps: {}/{}, Left Reps: {}/{}",
                right.count(),
                self.target,
                left.count(),
                self.target
            ),
            Counters::Synchronized { legs } => {
                format!("Squats: {}/{}", legs.count(), self.target)
            }
        }
    }

    /// Per-limb phase labels, e.g. "left=down right=up"
    pub fn state_line(&self) -> String {
        match &self.counters {
            Counters::Single { side, arm } => {
                format!("{}={}", side.label(), arm.state().label())
            }
            Counters::Independent { left, right } => format!(
                "left={} right={}",
                left.state().label(),
                right.state().label()
            ),
            Counters::Synchronized { legs } => format!("legs={}", legs.state().label()),
        }
    }

    /// Freeze counters at their current values; further updates no-op
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Last successfully computed (left, right) angles this session
    pub fn last_angles(&self) -> (Option<f32>, Option<f32>) {
        (self.last_left_angle, self.last_right_angle)
    }
}
