//! DevShowcase Desktop - the portfolio rendered with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod styles;
pub mod theme;

pub use animation::{ParticleBackgroundState, ScrollState, SplashState, Spring, TiltCardState};
pub use constants::*;
pub use styles::*;
pub use theme::{app_theme, palette, PaletteColors};
