//! Typewriter headline driver.
//!
//! Types a phrase one character per step, holds it, deletes it at twice the
//! typing speed, then moves on to the next phrase. The driver owns no timer;
//! the host feeds it elapsed time through [`Typewriter::advance`].

use crate::utils::config::TypewriterConfig;
use crate::utils::error::ShowcaseError;
use std::time::Duration;

/// Upper bound on steps replayed by a single `advance` call.
const MAX_CATCH_UP_STEPS: usize = 64;

/// Where the driver is within the current phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Step delays for the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub hold_delay: Duration,
}

impl TypewriterTiming {
    /// Zero delays are raised to one millisecond so `advance` always terminates.
    pub fn new(type_delay: Duration, hold_delay: Duration) -> Self {
        let floor = Duration::from_millis(1);
        Self {
            type_delay: type_delay.max(floor),
            hold_delay: hold_delay.max(floor),
        }
    }

    pub fn delete_delay(&self) -> Duration {
        (self.type_delay / 2).max(Duration::from_millis(1))
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), Duration::from_millis(1500))
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    /// Number of chars of the active phrase currently shown
    shown: usize,
    /// Byte length of the shown prefix, kept in sync with `shown`
    shown_bytes: usize,
    phase: Phase,
    owed: Duration,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Result<Self, ShowcaseError> {
        if phrases.is_empty() {
            return Err(ShowcaseError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            index: 0,
            shown: 0,
            shown_bytes: 0,
            phase: Phase::Typing,
            owed: Duration::ZERO,
        })
    }

    pub fn from_config(config: &TypewriterConfig) -> Result<Self, ShowcaseError> {
        Self::new(
            config.phrases.clone(),
            TypewriterTiming::new(
                Duration::from_millis(config.type_delay_ms),
                Duration::from_millis(config.hold_delay_ms),
            ),
        )
    }

    pub fn display(&self) -> &str {
        &self.active_phrase()[..self.shown_bytes]
    }

    pub fn active_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Delay owed before the next step in the current phase.
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_delay,
            Phase::Holding => self.timing.hold_delay,
            Phase::Deleting => self.timing.delete_delay(),
        }
    }

    /// Performs one transition and returns the delay before the next one.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                let next = self.active_phrase()[self.shown_bytes..].chars().next();
                match next {
                    Some(ch) => {
                        self.shown += 1;
                        self.shown_bytes += ch.len_utf8();
                    }
                    None => self.phase = Phase::Holding,
                }
                if self.shown_bytes == self.active_phrase().len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                let last = self.display().chars().next_back();
                if let Some(ch) = last {
                    self.shown -= 1;
                    self.shown_bytes -= ch.len_utf8();
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.next_delay()
    }

    /// Feeds elapsed wall time into the driver and performs every step that
    /// has come due. Returns true if anything changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.owed += elapsed;
        let mut changed = false;
        for _ in 0..MAX_CATCH_UP_STEPS {
            let due = self.next_delay();
            if self.owed < due {
                return changed;
            }
            self.owed -= due;
            self.step();
            changed = true;
        }
        // Long stall (suspended window, debugger): drop the backlog.
        self.owed = Duration::ZERO;
        changed
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.shown_bytes = 0;
        self.phase = Phase::Typing;
        self.owed = Duration::ZERO;
    }
}

/// The stock hero phrases at the stock timing.
impl Default for Typewriter {
    fn default() -> Self {
        Self {
            phrases: TypewriterConfig::default().phrases,
            timing: TypewriterTiming::default(),
            index: 0,
            shown: 0,
            shown_bytes: 0,
            phase: Phase::Typing,
            owed: Duration::ZERO,
        }
    }
}

impl crate::effect::Animated for Typewriter {
    fn advance(&mut self, elapsed: Duration) -> bool {
        Typewriter::advance(self, elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            TypewriterTiming::new(Duration::from_millis(100), Duration::from_millis(1000)),
        )
        .unwrap()
    }

    #[test]
    fn test_default_starts_on_first_stock_phrase() {
        let writer = Typewriter::default();
        assert_eq!(writer.active_phrase(), "Full Stack Developer");
        assert_eq!(writer.display(), "");
    }

    #[test]
    fn test_rejects_empty_phrase_list() {
        let err = Typewriter::new(Vec::new(), TypewriterTiming::default()).unwrap_err();
        assert!(matches!(err, ShowcaseError::NoPhrases));
    }

    #[test]
    fn test_types_one_char_per_step_then_holds() {
        let mut tw = writer(&["Rust"]);
        assert_eq!(tw.display(), "");
        tw.step();
        assert_eq!(tw.display(), "R");
        tw.step();
        tw.step();
        tw.step();
        assert_eq!(tw.display(), "Rust");
        assert_eq!(tw.phase(), Phase::Holding);
        assert_eq!(tw.next_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_deletes_at_half_delay_and_wraps() {
        let mut tw = writer(&["ab", "c"]);
        tw.step();
        tw.step();
        assert_eq!(tw.phase(), Phase::Holding);
        tw.step();
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.next_delay(), Duration::from_millis(50));
        tw.step();
        assert_eq!(tw.display(), "a");
        tw.step();
        assert_eq!(tw.display(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);

        // "c": type, hold, delete, back to the first phrase
        tw.step();
        tw.step();
        tw.step();
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_display_is_always_a_prefix_within_bounds() {
        let mut tw = writer(&["Full Stack", "", "Ünïcödé ✓", "x"]);
        let mut last_len = 0usize;
        let mut last_phase = tw.phase();
        let mut last_index = tw.phrase_index();
        for _ in 0..500 {
            tw.step();
            let shown = tw.display();
            assert!(tw.active_phrase().starts_with(shown));
            assert!(shown.len() <= tw.active_phrase().len());

            let len = shown.chars().count();
            if tw.phrase_index() == last_index {
                match (last_phase, tw.phase()) {
                    (Phase::Typing, Phase::Typing) => assert_eq!(len, last_len + 1),
                    (Phase::Deleting, Phase::Deleting) => assert_eq!(len + 1, last_len),
                    _ => {}
                }
            }
            last_len = len;
            last_phase = tw.phase();
            last_index = tw.phrase_index();
        }
    }

    #[test]
    fn test_index_advances_by_one_each_time_display_empties() {
        let phrases = ["one", "two", "three"];
        let mut tw = writer(&phrases);
        let mut advances = Vec::new();
        let mut prev_index = tw.phrase_index();
        for _ in 0..200 {
            let was_deleting = tw.phase() == Phase::Deleting;
            tw.step();
            if tw.phrase_index() != prev_index {
                assert!(was_deleting);
                assert_eq!(tw.display(), "");
                assert_eq!(tw.phrase_index(), (prev_index + 1) % phrases.len());
                advances.push(tw.phrase_index());
                prev_index = tw.phrase_index();
            }
        }
        assert!(advances.len() >= 3);
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut tw = writer(&["", "a"]);
        tw.step(); // typing -> holding immediately
        assert_eq!(tw.phase(), Phase::Holding);
        tw.step(); // holding -> deleting
        tw.step(); // deleting an empty display advances
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn test_advance_performs_due_steps_only() {
        let mut tw = writer(&["hello"]);
        assert!(!tw.advance(Duration::from_millis(99)));
        assert_eq!(tw.display(), "");
        assert!(tw.advance(Duration::from_millis(1)));
        assert_eq!(tw.display(), "h");
        assert!(tw.advance(Duration::from_millis(250)));
        assert_eq!(tw.display(), "hel");
    }

    #[test]
    fn test_advance_drops_backlog_after_long_stall() {
        let mut tw = writer(&["hello"]);
        tw.advance(Duration::from_secs(3600));
        assert!(!tw.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_zero_delays_are_floored() {
        let timing = TypewriterTiming::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(timing.type_delay, Duration::from_millis(1));
        assert_eq!(timing.delete_delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_reset_returns_to_first_phrase() {
        let mut tw = writer(&["ab", "cd"]);
        for _ in 0..6 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 1);
        tw.reset();
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.display(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_from_config_uses_configured_delays() {
        let config = TypewriterConfig {
            phrases: vec!["x".to_string()],
            type_delay_ms: 80,
            hold_delay_ms: 2000,
        };
        let tw = Typewriter::from_config(&config).unwrap();
        assert_eq!(tw.next_delay(), Duration::from_millis(80));
    }
}
