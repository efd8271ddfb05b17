use std::time::{Duration, Instant};

/// Programmatic list scroll eased towards a target offset.
///
/// Each frame samples the cubic ease-out curve; the host pushes the sampled
/// offset into the scrollable and treats the final frame as momentum end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub(in crate::app) fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub(in crate::app) fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now` and whether the animation has finished.
    pub(in crate::app) fn sample(&self, now: Instant) -> (f32, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}
