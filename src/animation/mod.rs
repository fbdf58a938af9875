//! Transition scheduling for item positions.
//!
//! An [`AnimationContext`] owns the items and one task slot per item. A
//! call to [`AnimationContext::transform`] fills the slots with
//! [`TransitionTask`]s towards a formation and starts a render clock;
//! [`AnimationContext::tick`] then advances everything by the delta handed
//! in by the host's [`FramePump`].
//!
//! # Overlapping transforms
//!
//! Starting a transform while items are still moving is resolved per item
//! by [`OverlapPolicy`]: `Replace` (the default) restarts from the current
//! mid-flight position, `Queue` runs the new move after the current one.
//! Two tasks never write the same item in the same tick.

mod context;
mod easing;
mod frame_pump;
mod task;
mod transition;

pub use context::{AnimationContext, Item, OverlapPolicy, RenderTarget};
pub use easing::EasingFunction;
pub use frame_pump::FramePump;
pub use task::{TaskState, TransitionTask};
pub use transition::Transition;
