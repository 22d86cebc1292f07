use crate::logging::info;

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

#[cfg(all(not(feature = "std"), feature = "embassy"))]
use embassy_time::{Duration, Instant};

/// Logs how many frames were drawn each second.
pub struct FpsTracker {
    name: &'static str,
    last: Instant,
    count: u64,
}

impl FpsTracker {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            last: Instant::now(),
            count: 0,
        }
    }

    /// call once per frame. returns the frame rate when a second has passed
    pub fn tick(&mut self) -> Option<u64> {
        self.count += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);

        if elapsed < Duration::from_secs(1) {
            return None;
        }

        let fps = self.count * 1_000 / (elapsed.as_millis() as u64).max(1);

        self.count = 0;
        self.last = now;

        info!("{} FPS: {}", self.name, fps);

        Some(fps)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::FpsTracker;

    #[test]
    fn test_quiet_until_a_second_passes() {
        let mut fps = FpsTracker::new("test");

        for _ in 0..10 {
            assert_eq!(fps.tick(), None);
        }

        assert_eq!(fps.count, 10);
    }
}
