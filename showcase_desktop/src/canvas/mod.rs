mod loading_spinner;
mod particle_background;
mod tilt_card;

pub use loading_spinner::{LoadingSpinner, SpinnerState};
pub use particle_background::ParticleBackground;
pub use tilt_card::TiltCardCanvas;
