//! Repetition counting state machine
//!
//! One counter per tracked limb (or leg pair). Two angle cutoffs with a
//! dead zone between them provide hysteresis: a rep is exactly one
//! up→down transition, and the matching down→up transition is required
//! before the next rep can be counted. Angle noise inside the dead zone
//! never changes state.

/// Limb phase within a repetition cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimbState {
    Up,
    Down,
}

impl LimbState {
    pub fn label(&self) -> &'static str {
        match self {
            LimbState::Up => "up",
            LimbState::Down => "down",
        }
    }
}

/// What a single update did to the counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Dead zone, or the angle's zone already matches the state
    None,
    /// Entered the down phase; the rep was counted
    Down,
    /// Returned to the up phase; arms the next rep
    Up,
}

/// Hysteresis cutoffs in degrees
///
/// Below `down` the limb counts as fully bent, above `up` as fully
/// extended. The gap between them is the dead zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub down: f32,
    pub up: f32,
}

impl Thresholds {
    /// Elbow angle cutoffs for arm curls
    pub const CURL: Thresholds = Thresholds { down: 40.0, up: 130.0 };

    /// Knee angle cutoffs for squats
    pub const SQUAT: Thresholds = Thresholds { down: 100.0, up: 160.0 };
}

/// Rep counter for one limb or one synchronized pair
#[derive(Debug)]
pub struct RepCounter {
    /// Current phase; starts in `Up` (limb extended)
    state: LimbState,
    /// Completed reps; increments only on the up→down transition
    count: u32,
    /// Angle cutoffs for this exercise
    thresholds: Thresholds,
}

impl RepCounter {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            state: LimbState::Up,
            count: 0,
            thresholds,
        }
    }

    /// Feed one angle sample (one frame) for a single limb
    ///
    /// Frames without a usable angle must not call this at all; the
    /// counter then simply holds its state and count.
    pub fn update(&mut self, angle: f32) -> Transition {
        let t = self.thresholds;
        self.step(angle < t.down, angle > t.up)
    }

    /// Feed one frame of paired angles (synchronized bilateral mode)
    ///
    /// Transitions only when BOTH angles qualify in the same frame:
    /// both under the down cutoff to enter the down phase, both over
    /// the up cutoff to return. One side alone never transitions.
    pub fn update_pair(&mut self, left: f32, right: f32) -> Transition {
        let t = self.thresholds;
        self.step(
            left < t.down && right < t.down,
            left > t.up && right > t.up,
        )
    }

    /// Shared transition core; down takes priority over up
    fn step(&mut self, in_down_zone: bool, in_up_zone: bool) -> Transition {
        if in_down_zone && self.state == LimbState::Up {
            self.state = LimbState::Down;
            self.count += 1;
            Transition::Down
        } else if in_up_zone && self.state == LimbState::Down {
            self.state = LimbState::Up;
            Transition::Up
        } else {
            Transition::None
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn state(&self) -> LimbState {
        self.state
    }

    /// Reset to the initial state (new set)
    pub fn reset(&mut self) {
        self.state = LimbState::Up;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(counter: &mut RepCounter, angles: &[f32]) -> Vec<Transition> {
        angles.iter().map(|&a| counter.update(a)).collect()
    }

    #[test]
    fn one_full_cycle_counts_once() {
        let mut counter = RepCounter::new(Thresholds::CURL);
        let transitions = feed(&mut counter, &[150.0, 150.0, 20.0, 20.0, 150.0]);
        assert_eq!(counter.count(), 1);
        // The rep lands exactly on the third sample
        assert_eq!(
            transitions,
            vec![
                Transition::None,
                Transition::None,
                Transition::Down,
                Transition::None,
                Transition::Up,
            ]
        );
    }

    #[test]
    fn dead_zone_oscillation_never_counts() {
        let mut counter = RepCounter::new(Thresholds::CURL);
        feed(&mut counter, &[150.0, 80.0, 90.0, 80.0, 150.0]);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.state(), LimbState::Up);
    }

    #[test]
    fn retrigger_without_up_transition_does_not_double_count() {
        let mut counter = RepCounter::new(Thresholds::CURL);
        let transitions = feed(&mut counter, &[150.0, 20.0, 20.0, 20.0, 150.0, 20.0]);
        assert_eq!(counter.count(), 2);
        // Second rep only after the up transition at sample 5
        assert_eq!(transitions[4], Transition::Up);
        assert_eq!(transitions[5], Transition::Down);
    }

    #[test]
    fn count_increases_by_at_most_one_per_frame() {
        let mut counter = RepCounter::new(Thresholds::CURL);
        let mut prev = 0;
        for &angle in &[150.0, 10.0, 170.0, 5.0, 160.0, 0.0, 180.0] {
            counter.update(angle);
            let now = counter.count();
            assert!(now == prev || now == prev + 1);
            assert!(now >= prev);
            prev = now;
        }
        assert_eq!(prev, 3);
    }

    #[test]
    fn down_zone_sample_in_down_state_is_a_no_op() {
        let mut counter = RepCounter::new(Thresholds::CURL);
        counter.update(20.0);
        assert_eq!(counter.count(), 1);
        assert_eq!(counter.update(15.0), Transition::None);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn counter_keeps_counting_past_any_target() {
        // The counter itself has no notion of a target
        let mut counter = RepCounter::new(Thresholds::CURL);
        for _ in 0..12 {
            counter.update(20.0);
            counter.update(150.0);
        }
        assert_eq!(counter.count(), 12);
    }

    #[test]
    fn pair_requires_both_legs_down() {
        let mut counter = RepCounter::new(Thresholds::SQUAT);
        // Right leg never drops below the cutoff
        let left = [170.0, 90.0, 170.0];
        let right = [170.0, 170.0, 170.0];
        for i in 0..3 {
            counter.update_pair(left[i], right[i]);
        }
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.state(), LimbState::Up);
    }

    #[test]
    fn pair_requires_both_legs_up_to_rearm() {
        let mut counter = RepCounter::new(Thresholds::SQUAT);
        assert_eq!(counter.update_pair(90.0, 95.0), Transition::Down);
        // Only one leg extended: still in the down phase
        assert_eq!(counter.update_pair(170.0, 120.0), Transition::None);
        assert_eq!(counter.update_pair(90.0, 90.0), Transition::None);
        assert_eq!(counter.count(), 1);
        // Both extended, then both bent: second rep
        assert_eq!(counter.update_pair(170.0, 165.0), Transition::Up);
        assert_eq!(counter.update_pair(95.0, 99.0), Transition::Down);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn squat_thresholds_apply() {
        let mut counter = RepCounter::new(Thresholds::SQUAT);
        // 110° is below the curl up-cutoff but inside the squat dead zone
        counter.update_pair(110.0, 110.0);
        assert_eq!(counter.count(), 0);
        counter.update_pair(99.0, 99.0);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut counter = RepCounter::new(Thresholds::CURL);
        counter.update(20.0);
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.state(), LimbState::Up);
        // And the first rep after reset counts again
        counter.update(20.0);
        assert_eq!(counter.count(), 1);
    }
}
