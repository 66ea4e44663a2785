mod spring;
mod states;

pub use spring::Spring;
pub use states::{ParticleBackgroundState, ScrollState, SplashState, TiltCardState};
