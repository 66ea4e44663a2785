use super::Spring;
use crate::constants::{
    HEADER_SCROLL_THRESHOLD, HERO_HEIGHT, HOVER_TICK_INCREMENT, PROGRESS_DAMPING,
    PROGRESS_STIFFNESS, SPINNER_TICK_INCREMENT, SPLASH_DURATION_MS,
};
use iced::widget::canvas;
use iced::Point;
use showcase_core::utils::config::BackgroundConfig;
use showcase_core::{Bounds, Effect, ParticleField, ParticleFieldConfig};
use std::time::Duration;

/// State for the particle canvas behind the page.
#[derive(Debug)]
pub struct ParticleBackgroundState {
    pub field: Effect<ParticleField>,
    pub cache: canvas::Cache,
}

impl ParticleBackgroundState {
    pub fn new(config: &BackgroundConfig, width: f32, height: f32) -> Self {
        let field = ParticleField::new(ParticleFieldConfig::from(config), Bounds::new(width, height));
        let mut field = Effect::new(field);
        field.set_running(config.enabled);
        Self {
            field,
            cache: canvas::Cache::default(),
        }
    }

    /// Advances the particles and invalidates the cached frame.
    pub fn update(&mut self, elapsed: Duration) {
        if self.field.tick(elapsed) {
            self.cache.clear();
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.state_mut().resize(Bounds::new(width, height));
        self.cache.clear();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.field.set_running(enabled);
        self.cache.clear();
    }

    pub fn is_running(&self) -> bool {
        self.field.is_running()
    }
}

/// State for a tilt-responsive card.
#[derive(Debug, Default)]
pub struct TiltCardState {
    pub mouse_position: Point,
    pub is_hovered: bool,
    pub hover_tick: f32,
    pub cache: canvas::Cache,
}

impl TiltCardState {
    /// Updates the card hover animation.
    pub fn update(&mut self) -> bool {
        if self.is_hovered {
            self.hover_tick += HOVER_TICK_INCREMENT;
            self.cache.clear();
            true
        } else {
            false
        }
    }

    /// Sets the hover state.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.is_hovered = hovered;
        if !hovered {
            self.hover_tick = 0.0;
        }
        self.cache.clear();
    }

    /// Sets the mouse position for tilt calculation.
    pub fn set_mouse_position(&mut self, position: Point) {
        self.mouse_position = position;
        self.cache.clear();
    }
}

/// Loading splash shown before the page appears.
#[derive(Debug, Default)]
pub struct SplashState {
    elapsed: Duration,
    pub spinner_tick: f32,
    finished: bool,
}

impl SplashState {
    /// Advances the splash clock. Returns true on the frame it finishes.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed += elapsed;
        self.spinner_tick += SPINNER_TICK_INCREMENT;
        if self.elapsed >= Duration::from_millis(SPLASH_DURATION_MS) {
            self.finished = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        !self.finished
    }
}

/// Scroll position of the page and the progress bar chasing it.
#[derive(Debug)]
pub struct ScrollState {
    pub offset_y: f32,
    pub progress: Spring,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            progress: Spring::new(PROGRESS_STIFFNESS, PROGRESS_DAMPING),
        }
    }
}

impl ScrollState {
    /// Records a new viewport position. `relative_y` is the scrolled
    /// fraction of the page in `0.0..=1.0`.
    pub fn scrolled(&mut self, offset_y: f32, relative_y: f32) {
        self.offset_y = offset_y.max(0.0);
        let relative_y = if relative_y.is_finite() { relative_y } else { 0.0 };
        self.progress.set_target(relative_y);
    }

    pub fn update(&mut self) -> bool {
        self.progress.update()
    }

    /// Header switches to its solid style once the page leaves the top.
    pub fn header_solid(&self) -> bool {
        self.offset_y > HEADER_SCROLL_THRESHOLD
    }

    /// True while any part of the hero is inside the viewport.
    pub fn hero_visible(&self) -> bool {
        self.offset_y < HERO_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splash_finishes_once_after_a_second() {
        let mut splash = SplashState::default();
        assert!(!splash.update(Duration::from_millis(600)));
        assert!(splash.is_visible());
        assert!(splash.update(Duration::from_millis(400)));
        assert!(!splash.is_visible());
        assert!(!splash.update(Duration::from_millis(16)));
    }

    #[test]
    fn test_scroll_thresholds() {
        let mut scroll = ScrollState::default();
        scroll.scrolled(20.0, 0.01);
        assert!(!scroll.header_solid());
        assert!(scroll.hero_visible());

        scroll.scrolled(HERO_HEIGHT + 1.0, 0.5);
        assert!(scroll.header_solid());
        assert!(!scroll.hero_visible());
        assert_eq!(scroll.progress.target, 0.5);
    }

    #[test]
    fn test_disabled_background_ignores_ticks() {
        let config = BackgroundConfig {
            enabled: false,
            ..BackgroundConfig::default()
        };
        let mut background = ParticleBackgroundState::new(&config, 800.0, 600.0);
        let before = background.field.state().particles().to_vec();
        background.update(Duration::from_millis(16));
        assert_eq!(background.field.ticks(), 0);
        assert_eq!(background.field.state().particles(), before.as_slice());

        background.set_enabled(true);
        background.update(Duration::from_millis(16));
        assert_eq!(background.field.ticks(), 1);
    }
}
