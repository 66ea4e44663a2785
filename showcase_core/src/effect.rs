//! Start/stop ownership for timer-driven effects.
//!
//! An [`Effect`] wraps an animated state and decides whether scheduler
//! ticks reach it. Hosts subscribe to their frame clock only while at least
//! one effect reports [`Effect::is_running`], so stopping an effect is the
//! same as deregistering its timer.

use std::time::Duration;

/// State advanced by an external clock.
pub trait Animated {
    /// Moves the state forward by `elapsed`. Returns true if a redraw is needed.
    fn advance(&mut self, elapsed: Duration) -> bool;
}

#[derive(Debug, Clone)]
pub struct Effect<T> {
    state: T,
    running: bool,
    ticks: u64,
}

impl<T: Animated> Effect<T> {
    /// Wraps `state` in a stopped handle.
    pub fn new(state: T) -> Self {
        Self {
            state,
            running: false,
            ticks: 0,
        }
    }

    /// Wraps `state` in a running handle.
    pub fn started(state: T) -> Self {
        let mut effect = Self::new(state);
        effect.start();
        effect
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Starts or stops the handle to match `running`.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Forwards the tick to the state while running. A stopped effect
    /// drops the time on the floor instead of queueing it.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.ticks += 1;
        self.state.advance(elapsed)
    }

    /// Number of ticks the state has received.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        total: Duration,
    }

    impl Animated for Counter {
        fn advance(&mut self, elapsed: Duration) -> bool {
            self.total += elapsed;
            true
        }
    }

    #[test]
    fn test_new_effect_is_stopped_and_ignores_ticks() {
        let mut effect = Effect::new(Counter::default());
        assert!(!effect.is_running());
        assert!(!effect.tick(Duration::from_millis(16)));
        assert_eq!(effect.state().total, Duration::ZERO);
        assert_eq!(effect.ticks(), 0);
    }

    #[test]
    fn test_stop_then_restart_resumes_without_backlog() {
        let mut effect = Effect::started(Counter::default());
        assert!(effect.tick(Duration::from_millis(16)));

        effect.stop();
        effect.tick(Duration::from_secs(10));
        assert_eq!(effect.state().total, Duration::from_millis(16));

        effect.start();
        effect.tick(Duration::from_millis(16));
        assert_eq!(effect.state().total, Duration::from_millis(32));
        assert_eq!(effect.ticks(), 2);
    }

    #[test]
    fn test_set_running_toggles() {
        let mut effect = Effect::new(Counter::default());
        effect.set_running(true);
        assert!(effect.is_running());
        effect.set_running(false);
        assert!(!effect.is_running());
    }
}
