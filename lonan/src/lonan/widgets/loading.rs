use std::time::Duration;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPhase {
    Building,
    Revealing,
    Done,
}

/// Splash shown over the home page while it settles.
#[derive(Clone, Copy, Debug)]
pub struct LoadingScreen {
    min_duration: Duration,
    icon_interval: Duration,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self {
            min_duration: Duration::from_millis(2800),
            icon_interval: Duration::from_millis(500),
        }
    }
}

impl LoadingScreen {
    /// Placeholder dots orbiting when there are no services to show.
    pub const FALLBACK_ORBIT_ITEMS: usize = 5;

    pub fn new(min_duration: Duration) -> Self {
        Self {
            min_duration,
            ..Self::default()
        }
    }

    pub fn min_duration(&self) -> Duration {
        self.min_duration
    }

    /// Progress in percent, capped at 100.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.min_duration.is_zero() {
            return 100.0;
        }
        (elapsed.as_secs_f64() / self.min_duration.as_secs_f64() * 100.0).min(100.0)
    }

    pub fn phase(&self, elapsed: Duration) -> LoadingPhase {
        let progress = self.progress(elapsed);
        if progress >= 100.0 {
            LoadingPhase::Done
        } else if progress > 40.0 {
            LoadingPhase::Revealing
        } else {
            LoadingPhase::Building
        }
    }

    pub fn orbit_count(service_count: usize) -> usize {
        if service_count == 0 {
            Self::FALLBACK_ORBIT_ITEMS
        } else {
            service_count
        }
    }

    /// Which orbiting item is highlighted at `elapsed`.
    pub fn active_item(&self, elapsed: Duration, orbit_count: usize) -> usize {
        let count = orbit_count.max(1) as u128;
        let step = self.icon_interval.as_millis().max(1);
        ((elapsed.as_millis() / step) % count) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_progress() {
        let screen = LoadingScreen::default();
        assert_eq!(screen.phase(Duration::ZERO), LoadingPhase::Building);
        assert_eq!(screen.phase(Duration::from_millis(1200)), LoadingPhase::Revealing);
        assert_eq!(screen.phase(Duration::from_millis(2800)), LoadingPhase::Done);
        assert_eq!(screen.progress(Duration::from_secs(60)), 100.0);
    }

    #[test]
    fn orbit_falls_back_to_placeholders() {
        assert_eq!(LoadingScreen::orbit_count(0), 5);
        assert_eq!(LoadingScreen::orbit_count(3), 3);
    }

    #[test]
    fn active_item_cycles() {
        let screen = LoadingScreen::default();
        assert_eq!(screen.active_item(Duration::from_millis(0), 3), 0);
        assert_eq!(screen.active_item(Duration::from_millis(500), 3), 1);
        assert_eq!(screen.active_item(Duration::from_millis(1500), 3), 0);
        assert_eq!(screen.active_item(Duration::from_millis(700), 0), 0);
    }
}
