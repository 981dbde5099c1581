//! Artificial response delays for UX pacing. Zero-length pacers are no-ops.

use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    min: Duration,
    max: Duration,
}

impl Pacer {
    /// Delay drawn uniformly from `[min, max]` (bounds swapped if reversed).
    pub fn new(min: Duration, max: Duration) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    pub fn is_noop(&self) -> bool {
        self.max.is_zero()
    }

    pub fn next_delay(&self) -> Duration {
        if self.min == self.max {
            self.min
        } else {
            rand::thread_rng().gen_range(self.min..=self.max)
        }
    }

    pub async fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_stays_in_range() {
        let pacer = Pacer::new(Duration::from_millis(800), Duration::from_millis(1300));
        for _ in 0..100 {
            let d = pacer.next_delay();
            assert!(d >= Duration::from_millis(800) && d <= Duration::from_millis(1300));
        }
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let pacer = Pacer::new(Duration::from_millis(50), Duration::from_millis(10));
        assert_eq!(pacer, Pacer::new(Duration::from_millis(10), Duration::from_millis(50)));
    }

    #[test]
    fn none_is_noop() {
        assert!(Pacer::none().is_noop());
        assert!(!Pacer::fixed(Duration::from_millis(1)).is_noop());
    }

    #[tokio::test]
    async fn pause_waits_for_fixed_delay() {
        let start = std::time::Instant::now();
        Pacer::fixed(Duration::from_millis(20)).pause().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
