//! The animation context: items, their in-flight tasks, and the render
//! clock, advanced together one tick at a time.

use std::collections::VecDeque;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::task::{ClockTask, TaskState, TransitionTask};
use super::transition::Transition;
use crate::error::TilescapeError;
use crate::layout::{Formation, Position};

/// How to handle a new transition arriving while an item is still moving.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Drop the in-flight task (and anything queued behind it) and start
    /// the new one from the item's current mid-flight position.
    #[default]
    Replace,
    /// Let the in-flight task finish, then start the new one from its
    /// target.
    Queue,
}

/// Receives one repaint request per animation tick.
pub trait RenderTarget {
    /// Repaint the scene with the current item positions.
    fn render(&mut self);
}

impl<F: FnMut()> RenderTarget for F {
    fn render(&mut self) {
        self();
    }
}

/// One tile's live position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Where the tile currently is.
    pub position: Position,
}

/// The in-flight handle for one item plus anything queued behind it.
#[derive(Debug, Clone, Default)]
struct TaskSlot {
    running: Option<TransitionTask>,
    queued: VecDeque<TransitionTask>,
}

impl TaskSlot {
    fn is_idle(&self) -> bool {
        self.running.is_none() && self.queued.is_empty()
    }

    fn clear(&mut self) {
        self.running = None;
        self.queued.clear();
    }

    /// Time until everything in this slot has finished.
    fn horizon(&self) -> Duration {
        let running = self
            .running
            .as_ref()
            .map_or(Duration::ZERO, TransitionTask::remaining);
        self.queued
            .iter()
            .map(TransitionTask::remaining)
            .fold(running, Duration::saturating_add)
    }

    /// Advance the slot by `dt`, moving `position` along. Leftover time
    /// from a completed task rolls into the next queued one.
    fn advance(&mut self, position: &mut Position, dt: Duration) {
        let mut budget = dt;
        loop {
            let Some(task) = self.running.as_mut() else {
                return;
            };
            let (next, leftover) = task.advance(budget);
            *position = next;
            if task.state() != TaskState::Completed {
                return;
            }
            self.running = self.queued.pop_front().map(|mut queued| {
                queued.activate(*position);
                queued
            });
            budget = leftover;
        }
    }
}

/// Owns every item and its outstanding transition, and drives them from an
/// external frame pump.
///
/// Single-threaded and cooperative: nothing moves except inside
/// [`tick`](Self::tick). Within a tick every item is updated, in index
/// order, before the render target is called, so a repaint never sees a
/// half-updated frame. The render target is called once per tick while the
/// clock task is alive, regardless of how many items are moving.
#[derive(Debug, Clone)]
pub struct AnimationContext {
    items: Vec<Item>,
    slots: Vec<TaskSlot>,
    clock: Option<ClockTask>,
    overlap: OverlapPolicy,
    easing: EasingFunction,
}

impl AnimationContext {
    /// Context for items starting at the given positions.
    #[must_use]
    pub fn new(initial: Vec<Position>) -> Self {
        let slots = vec![TaskSlot::default(); initial.len()];
        Self {
            items: initial
                .into_iter()
                .map(|position| Item { position })
                .collect(),
            slots,
            clock: None,
            overlap: OverlapPolicy::default(),
            easing: EasingFunction::default(),
        }
    }

    /// Set how overlapping transitions are resolved.
    #[must_use]
    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the easing applied by [`transform`](Self::transform).
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Current overlap policy.
    #[must_use]
    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in index order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current position of item `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        self.items.get(index).map(|item| item.position)
    }

    /// Current positions of every item, in index order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.items.iter().map(|item| item.position)
    }

    /// The in-flight task for item `index`, if it is moving.
    #[must_use]
    pub fn task(&self, index: usize) -> Option<&TransitionTask> {
        self.slots.get(index).and_then(|slot| slot.running.as_ref())
    }

    /// Number of items currently moving.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_idle()).count()
    }

    /// Whether any item is moving or the render clock is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.clock.is_some() || self.slots.iter().any(|slot| !slot.is_idle())
    }

    /// Start moving every item towards `formation` over `duration` using
    /// the context's easing. Returns immediately; motion happens in
    /// [`tick`](Self::tick).
    pub fn transform(
        &mut self,
        formation: &Formation,
        duration: Duration,
    ) -> Result<(), TilescapeError> {
        let transition = Transition::new(duration, self.easing);
        self.transform_with(formation, transition)
    }

    /// Start moving every item towards `formation` with an explicit
    /// transition.
    ///
    /// A formation built for a different item count is rejected and no
    /// tasks are started.
    pub fn transform_with(
        &mut self,
        formation: &Formation,
        transition: Transition,
    ) -> Result<(), TilescapeError> {
        if formation.len() != self.items.len() {
            return Err(TilescapeError::FormationMismatch {
                items: self.items.len(),
                positions: formation.len(),
            });
        }

        log::debug!(
            "transform to {} over {:?} ({} items, {:?})",
            formation.kind(),
            transition.duration,
            self.items.len(),
            self.overlap
        );

        let mut horizon = transition.duration;
        for ((item, slot), &target) in self
            .items
            .iter()
            .zip(self.slots.iter_mut())
            .zip(formation.positions())
        {
            match self.overlap {
                OverlapPolicy::Replace => {
                    slot.clear();
                    slot.running = Some(TransitionTask::running(
                        item.position,
                        target,
                        transition,
                    ));
                }
                OverlapPolicy::Queue => {
                    let ahead = slot.horizon();
                    horizon = horizon
                        .max(ahead.saturating_add(transition.duration));
                    if slot.running.is_some() {
                        slot.queued
                            .push_back(TransitionTask::pending(target, transition));
                    } else {
                        slot.running = Some(TransitionTask::running(
                            item.position,
                            target,
                            transition,
                        ));
                    }
                }
            }
        }

        match self.clock.as_mut() {
            Some(clock) => clock.extend(horizon),
            None => self.clock = Some(ClockTask::new(horizon)),
        }
        Ok(())
    }

    /// Advance every outstanding task by `dt`, then repaint once if the
    /// render clock was running at the start of this tick.
    ///
    /// Returns whether anything is still animating afterwards.
    pub fn tick<R>(&mut self, dt: Duration, render: &mut R) -> bool
    where
        R: RenderTarget + ?Sized,
    {
        for (item, slot) in self.items.iter_mut().zip(self.slots.iter_mut()) {
            slot.advance(&mut item.position, dt);
        }

        if let Some(clock) = self.clock.as_mut() {
            render.render();
            if clock.advance(dt) {
                self.clock = None;
            }
        }

        self.is_animating()
    }

    /// Stop every transition where it is. Items keep their current
    /// positions.
    pub fn cancel(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.clock = None;
    }

    /// Jump every item to the final target of its outstanding transitions.
    pub fn skip(&mut self) {
        for (item, slot) in self.items.iter_mut().zip(self.slots.iter_mut()) {
            let last = slot
                .queued
                .back()
                .or(slot.running.as_ref())
                .map(TransitionTask::target);
            if let Some(target) = last {
                item.position = target;
            }
            slot.clear();
        }
        self.clock = None;
    }

    /// Append an item at `position` with no transition. Returns its index.
    pub fn push_item(&mut self, position: Position) -> usize {
        self.items.push(Item { position });
        self.slots.push(TaskSlot::default());
        self.items.len() - 1
    }

    /// Place item `index` directly, dropping any transition it had.
    pub fn set_position(&mut self, index: usize, position: Position) {
        if let (Some(item), Some(slot)) =
            (self.items.get_mut(index), self.slots.get_mut(index))
        {
            item.position = position;
            slot.clear();
        }
    }
}

impl Default for AnimationContext {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
