//! Decorative particle field behind the page.
//!
//! Every frame each particle moves by its velocity, bounces off the canvas
//! edges, and has its opacity recomputed from the animation clock and its
//! horizontal position. The field never adds or removes particles; resizing
//! only changes the bounds they bounce inside.

use crate::utils::config::BackgroundConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 8-bit sRGB color, converted to the renderer's color type by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const NEON: [Rgb; 3] = [
    Rgb::new(0x00, 0xcc, 0xff),
    Rgb::new(0xff, 0x33, 0xcc),
    Rgb::new(0x33, 0xff, 0x99),
];

const PASTEL: [Rgb; 3] = [
    Rgb::new(0x80, 0xbf, 0xff),
    Rgb::new(0xff, 0x99, 0xdd),
    Rgb::new(0xff, 0xeb, 0x80),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    /// Small neon dots joined by faint links
    #[default]
    Circle,
    /// Large pastel outlines
    Hexagon,
}

impl ParticleShape {
    pub fn default_count(self) -> usize {
        match self {
            ParticleShape::Circle => 80,
            ParticleShape::Hexagon => 30,
        }
    }

    pub fn radius_range(self) -> (f32, f32) {
        match self {
            ParticleShape::Circle => (1.0, 5.0),
            ParticleShape::Hexagon => (10.0, 30.0),
        }
    }

    /// Full width of the per-axis velocity range, in pixels per frame.
    pub fn velocity_span(self) -> f32 {
        match self {
            ParticleShape::Circle => 2.5,
            ParticleShape::Hexagon => 0.5,
        }
    }

    pub fn palette(self) -> &'static [Rgb] {
        match self {
            ParticleShape::Circle => &NEON,
            ParticleShape::Hexagon => &PASTEL,
        }
    }

    /// Maximum distance at which two particles are joined by a line.
    pub fn link_distance(self) -> Option<f32> {
        match self {
            ParticleShape::Circle => Some(150.0),
            ParticleShape::Hexagon => None,
        }
    }
}

/// Canvas size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl Particle {
    /// Moves one frame and bounces off the edges. Positions outside the
    /// bounds are clamped onto the edge with velocity pointing back inside.
    fn advance(&mut self, bounds: Bounds) {
        self.x += self.dx;
        self.y += self.dy;
        (self.x, self.dx) = reflect(self.x, self.dx, bounds.width);
        (self.y, self.dy) = reflect(self.y, self.dy, bounds.height);
    }
}

fn reflect(pos: f32, vel: f32, max: f32) -> (f32, f32) {
    if pos < 0.0 {
        (0.0, vel.abs())
    } else if pos > max {
        (max, -vel.abs())
    } else {
        (pos, vel)
    }
}

/// Opacity pulse: `0.1 + |sin(t * 0.001 + x * 0.01)| * 0.3` with `t` in ms.
pub fn pulse_opacity(clock: Duration, x: f32) -> f32 {
    let t_ms = clock.as_secs_f64() * 1000.0;
    let phase = t_ms * 0.001 + f64::from(x) * 0.01;
    0.1 + (phase.sin().abs() as f32) * 0.3
}

/// Settings a field is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleFieldConfig {
    pub shape: ParticleShape,
    pub count: usize,
    pub speed: f32,
}

impl ParticleFieldConfig {
    pub fn for_shape(shape: ParticleShape) -> Self {
        Self {
            shape,
            count: shape.default_count(),
            speed: 1.0,
        }
    }
}

impl From<&BackgroundConfig> for ParticleFieldConfig {
    fn from(config: &BackgroundConfig) -> Self {
        Self {
            shape: config.shape,
            count: config.count.unwrap_or_else(|| config.shape.default_count()),
            speed: config.speed.max(0.0),
        }
    }
}

/// A pair of particles close enough to be joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// 1.0 when touching, fading to 0.0 at the link distance
    pub strength: f32,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleFieldConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
    clock: Duration,
}

impl ParticleField {
    pub fn new(config: ParticleFieldConfig, bounds: Bounds) -> Self {
        Self::with_rng(config, bounds, fastrand::Rng::new())
    }

    /// Deterministic layout for a given seed.
    pub fn with_seed(config: ParticleFieldConfig, bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(config, bounds, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: ParticleFieldConfig, bounds: Bounds, mut rng: fastrand::Rng) -> Self {
        let shape = config.shape;
        let (min_r, max_r) = shape.radius_range();
        let span = shape.velocity_span() * config.speed;
        let palette = shape.palette();

        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.f32() * bounds.width,
                y: rng.f32() * bounds.height,
                dx: (rng.f32() - 0.5) * span,
                dy: (rng.f32() - 0.5) * span,
                radius: min_r + rng.f32() * (max_r - min_r),
                color: palette[rng.usize(..palette.len())],
                opacity: rng.f32() * 0.3 + 0.1,
            })
            .collect();

        Self {
            config,
            bounds,
            particles,
            clock: Duration::ZERO,
        }
    }

    pub fn step(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        let bounds = self.bounds;
        let clock = self.clock;
        for particle in &mut self.particles {
            particle.advance(bounds);
            particle.opacity = pulse_opacity(clock, particle.x);
        }
    }

    /// Adopts new canvas bounds, keeping every particle and clamping each
    /// one into the new area.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        for particle in &mut self.particles {
            (particle.x, particle.dx) = reflect(particle.x, particle.dx, bounds.width);
            (particle.y, particle.dy) = reflect(particle.y, particle.dy, bounds.height);
        }
    }

    pub fn links(&self, max_distance: f32) -> Vec<Link> {
        let max_sq = max_distance * max_distance;
        let mut links = Vec::new();
        for (a, p) in self.particles.iter().enumerate() {
            for (offset, q) in self.particles[a + 1..].iter().enumerate() {
                let (dx, dy) = (p.x - q.x, p.y - q.y);
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < max_sq {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        strength: 1.0 - dist_sq.sqrt() / max_distance,
                    });
                }
            }
        }
        links
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn shape(&self) -> ParticleShape {
        self.config.shape
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl crate::effect::Animated for ParticleField {
    fn advance(&mut self, elapsed: Duration) -> bool {
        self.step(elapsed);
        !self.particles.is_empty()
    }
}
