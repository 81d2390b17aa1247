use std::time::Duration;

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting for the element to scroll into view.
    Idle,
    Running,
    Finished,
}

/// Animated count from zero to a target, started once the element is visible.
///
/// Timestamps are offsets from mount, as delivered by animation frames.
#[derive(Clone, Debug)]
pub struct Counter {
    target: u64,
    duration: Duration,
    started_at: Option<Duration>,
    value: u64,
    phase: CounterPhase,
}

impl Counter {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started_at: None,
            value: 0,
            phase: CounterPhase::Idle,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Visibility threshold crossed. Only the first report starts the animation.
    pub fn on_visible(&mut self, now: Duration) {
        if self.phase == CounterPhase::Idle {
            self.started_at = Some(now);
            self.phase = CounterPhase::Running;
        }
    }

    /// Advance to the frame at `now` and return the displayed value.
    pub fn tick(&mut self, now: Duration) -> u64 {
        let Some(start) = self.started_at else {
            return self.value;
        };
        if self.phase == CounterPhase::Finished {
            return self.value;
        }

        let elapsed = now.saturating_sub(start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };

        if progress >= 1.0 {
            self.value = self.target;
            self.phase = CounterPhase::Finished;
        } else {
            let eased = (self.target as f64 * ease_out_cubic(progress)).round() as u64;
            self.value = self.value.max(eased.min(self.target));
        }
        self.value
    }
}
