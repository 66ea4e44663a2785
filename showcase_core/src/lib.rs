//! DevShowcase core: the UI-free half of the portfolio.
//!
//! Effects ([`typewriter`], [`particles`]) are plain state structs advanced
//! by an external clock through [`effect::Effect`]. The contact form and its
//! relay workflow live in [`contact`] and [`api`].

pub mod api;
pub mod contact;
pub mod content;
pub mod effect;
pub mod particles;
pub mod resume;
pub mod typewriter;
pub mod utils;

pub use api::emailjs::EmailJsRelay;
pub use api::{RelayClient, TemplateParams};
pub use contact::{dispatch, ContactController, DispatchReport, Field, SubmissionStatus};
pub use content::{Portfolio, Section};
pub use effect::{Animated, Effect};
pub use particles::{Bounds, ParticleField, ParticleFieldConfig, ParticleShape};
pub use typewriter::{Phase, Typewriter, TypewriterTiming};
pub use utils::config::Config;
pub use utils::error::{RelayError, ShowcaseError};
