//! Per-item transition tasks and the render clock.

use std::time::Duration;

use super::transition::Transition;
use crate::layout::Position;

/// Lifecycle of a [`TransitionTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Scheduled but not yet moving; the start position is not known yet.
    Pending,
    /// Moving from its start towards its target.
    Running,
    /// Target written; the task will be dropped.
    Completed,
}

/// One item's move towards one target position.
///
/// Tasks are plain records stored in the animation context's slot arena and
/// advanced by index; they never touch anything but the position they are
/// handed.
#[derive(Debug, Clone)]
pub struct TransitionTask {
    start: Position,
    target: Position,
    transition: Transition,
    elapsed: Duration,
    state: TaskState,
}

impl TransitionTask {
    /// Task that will move to `target` once activated.
    pub(crate) fn pending(target: Position, transition: Transition) -> Self {
        Self {
            start: target,
            target,
            transition,
            elapsed: Duration::ZERO,
            state: TaskState::Pending,
        }
    }

    /// Task already moving from `start` to `target`.
    pub(crate) fn running(
        start: Position,
        target: Position,
        transition: Transition,
    ) -> Self {
        let mut task = Self::pending(target, transition);
        task.activate(start);
        task
    }

    /// Capture the start position and begin moving.
    pub(crate) fn activate(&mut self, start: Position) {
        self.start = start;
        self.elapsed = Duration::ZERO;
        self.state = TaskState::Running;
    }

    /// Advance by `dt` and return the new position plus any time left over
    /// past the end of the transition.
    ///
    /// The completing step writes the target exactly.
    pub(crate) fn advance(&mut self, dt: Duration) -> (Position, Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.transition.duration {
            self.state = TaskState::Completed;
            let leftover = self.elapsed - self.transition.duration;
            return (self.target, leftover);
        }
        let eased = self.transition.eased_t(self.elapsed);
        (self.start.lerp(self.target, eased), Duration::ZERO)
    }

    /// Position the task would write after its current elapsed time.
    #[must_use]
    pub fn current(&self) -> Position {
        match self.state {
            TaskState::Pending => self.start,
            TaskState::Running => self
                .start
                .lerp(self.target, self.transition.eased_t(self.elapsed)),
            TaskState::Completed => self.target,
        }
    }

    /// Where the task ends.
    #[must_use]
    pub fn target(&self) -> Position {
        self.target
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Time until the task completes.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.transition.duration.saturating_sub(self.elapsed)
    }
}

/// Keeps the render callback firing for as long as a transition lasts,
/// independently of how many items are moving.
#[derive(Debug, Clone)]
pub(crate) struct ClockTask {
    duration: Duration,
    elapsed: Duration,
}

impl ClockTask {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Push the end out so at least `remaining` is left. Never shortens.
    pub(crate) fn extend(&mut self, remaining: Duration) {
        if self.remaining() < remaining {
            self.duration = self.elapsed.saturating_add(remaining);
        }
    }

    /// Advance by `dt`; returns `true` once the duration has elapsed.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.elapsed >= self.duration
    }

    pub(crate) fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_pending_task_activates_to_running() {
        let mut task =
            TransitionTask::pending(DVec3::X, Transition::linear(ms(100)));
        assert_eq!(task.state(), TaskState::Pending);
        task.activate(DVec3::ZERO);
        assert_eq!(task.state(), TaskState::Running);
        assert_eq!(task.current(), DVec3::ZERO);
    }

    #[test]
    fn test_linear_task_advances_by_delta() {
        let mut task = TransitionTask::running(
            DVec3::ZERO,
            DVec3::new(10.0, 0.0, 0.0),
            Transition::linear(ms(100)),
        );
        let (p, leftover) = task.advance(ms(25));
        assert!((p.x - 2.5).abs() < 1e-9);
        assert_eq!(leftover, Duration::ZERO);
        let (p, _) = task.advance(ms(50));
        assert!((p.x - 7.5).abs() < 1e-9);
        assert_eq!(task.remaining(), ms(25));
    }

    #[test]
    fn test_completion_writes_exact_target_and_reports_leftover() {
        let target = DVec3::new(1.0 / 3.0, -7.1, 1e6);
        let mut task = TransitionTask::running(
            DVec3::new(5.0, 5.0, 5.0),
            target,
            Transition::exponential(ms(100)),
        );
        let _ = task.advance(ms(60));
        let (p, leftover) = task.advance(ms(70));
        assert_eq!(p, target);
        assert_eq!(leftover, ms(30));
        assert_eq!(task.state(), TaskState::Completed);
    }

    #[test]
    fn test_zero_duration_completes_on_first_advance() {
        let mut task =
            TransitionTask::running(DVec3::ZERO, DVec3::Y, Transition::snap());
        let (p, leftover) = task.advance(Duration::ZERO);
        assert_eq!(p, DVec3::Y);
        assert_eq!(leftover, Duration::ZERO);
        assert_eq!(task.state(), TaskState::Completed);
    }

    #[test]
    fn test_clock_extend_never_shortens() {
        let mut clock = ClockTask::new(ms(100));
        assert!(!clock.advance(ms(40)));
        clock.extend(ms(20));
        assert_eq!(clock.remaining(), ms(60));
        clock.extend(ms(200));
        assert_eq!(clock.remaining(), ms(200));
        assert!(!clock.advance(ms(199)));
        assert!(clock.advance(ms(1)));
    }
}
