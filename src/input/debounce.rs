//! Click debounce
//!
//! A click is accepted only when the debounce window has passed since the
//! last accepted one. Rejected clicks are dropped, never queued.

use std::time::{Duration, Instant};

/// Default minimum time between two accepted clicks
pub const CLICK_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debounce {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Try to accept an input at `now`, recording it on success
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted
            && now.saturating_duration_since(last) < self.window
        {
            return false;
        }

        self.last_accepted = Some(now);
        true
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(CLICK_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_is_accepted() {
        let mut debounce = Debounce::default();
        assert!(debounce.accept(Instant::now()));
    }

    #[test]
    fn clicks_inside_window_are_dropped() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(250));

        assert!(debounce.accept(start));
        assert!(!debounce.accept(start + Duration::from_millis(10)));
        assert!(!debounce.accept(start + Duration::from_millis(249)));
        assert!(debounce.accept(start + Duration::from_millis(250)));
    }

    #[test]
    fn dropped_clicks_do_not_extend_window() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(100));

        assert!(debounce.accept(start));
        assert!(!debounce.accept(start + Duration::from_millis(90)));
        assert!(debounce.accept(start + Duration::from_millis(110)));
    }

    #[test]
    fn zero_window_accepts_everything() {
        let now = Instant::now();
        let mut debounce = Debounce::new(Duration::ZERO);
        assert!(debounce.accept(now));
        assert!(debounce.accept(now));
    }
}
