use std::time::Duration;

use web_time::Instant;

use super::context::{AnimationContext, RenderTarget};

/// Turns host frame callbacks into [`AnimationContext::tick`] calls with the
/// measured wall-clock delta, and keeps a smoothed FPS estimate.
///
/// Tests and headless drivers call [`pump`](Self::pump) with synthetic
/// deltas instead of [`frame`](Self::frame).
pub struct FramePump {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp; `None` until the first frame
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames pumped so far
    frames: u64,
}

impl FramePump {
    /// Create a new frame pump with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to pump again.
    #[must_use]
    pub fn should_pump(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame
            .is_none_or(|last| last.elapsed() >= self.min_frame_duration)
    }

    /// Pump one frame using the wall-clock time since the previous one.
    ///
    /// The very first frame advances by zero so that time spent before the
    /// host started pumping does not count towards the transition. Calls
    /// arriving faster than the target FPS are dropped without ticking; the
    /// skipped time is picked up by the next frame that does run.
    pub fn frame<R>(
        &mut self,
        ctx: &mut AnimationContext,
        render: &mut R,
    ) -> bool
    where
        R: RenderTarget + ?Sized,
    {
        if !self.should_pump() {
            return ctx.is_animating();
        }
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_frame = Some(now);
        self.pump(ctx, dt, render)
    }

    /// Pump one frame with an explicit delta.
    pub fn pump<R>(
        &mut self,
        ctx: &mut AnimationContext,
        dt: Duration,
        render: &mut R,
    ) -> bool
    where
        R: RenderTarget + ?Sized,
    {
        self.frames += 1;
        let frame_time = dt.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        ctx.tick(dt, render)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames pumped so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FramePump {
    fn default() -> Self {
        Self::new(0)
    }
}
