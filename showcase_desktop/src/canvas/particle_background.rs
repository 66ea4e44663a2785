use crate::animation::ParticleBackgroundState;
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme};
use showcase_core::particles::{Link, Particle, Rgb};
use showcase_core::ParticleShape;
use std::f32::consts::PI;
use std::marker::PhantomData;

/// Canvas program drawing the particle field: neon dots joined by links,
/// or slow pastel hexagon outlines.
pub struct ParticleBackground<'a, Message> {
    pub state: &'a ParticleBackgroundState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleBackground<'a, Message> {
    pub fn new(state: &'a ParticleBackgroundState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

fn to_color(rgb: Rgb, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

/// Dot fill, following the particle's pulsing opacity.
fn dot_color(particle: &Particle) -> Color {
    to_color(particle.color, particle.opacity)
}

/// Link stroke: fades with distance and with the two endpoints' opacity.
fn link_color(a: &Particle, b: &Particle, link: &Link) -> Color {
    to_color(a.color, link.strength * (a.opacity + b.opacity) * 0.5)
}

/// Hexagons get a solid outline and a translucent body at the pulse.
fn hexagon_colors(particle: &Particle) -> (Color, Color) {
    (
        to_color(particle.color, 1.0),
        to_color(particle.color, particle.opacity),
    )
}

fn hexagon(center: Point, radius: f32) -> Path {
    Path::new(|builder| {
        for i in 0..6 {
            let angle = i as f32 * PI / 3.0;
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.close();
    })
}

impl<'a, Message> canvas::Program<Message> for ParticleBackground<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let background = self.state.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(self.palette.background),
            );

            // A stopped field is drawn frozen where it was.
            let field = self.state.field.state();
            let particles: &[Particle] = field.particles();

            match field.shape() {
                ParticleShape::Circle => {
                    if let Some(distance) = field.shape().link_distance() {
                        for link in field.links(distance) {
                            let (a, b) = (&particles[link.a], &particles[link.b]);
                            frame.stroke(
                                &Path::line(Point::new(a.x, a.y), Point::new(b.x, b.y)),
                                Stroke::default()
                                    .with_width(1.0)
                                    .with_color(link_color(a, b, &link)),
                            );
                        }
                    }
                    for particle in particles {
                        frame.fill(
                            &Path::circle(Point::new(particle.x, particle.y), particle.radius),
                            dot_color(particle),
                        );
                    }
                }
                ParticleShape::Hexagon => {
                    for particle in particles {
                        let (outline, body) = hexagon_colors(particle);
                        let path = hexagon(Point::new(particle.x, particle.y), particle.radius);
                        frame.fill(&path, body);
                        frame.stroke(&path, Stroke::default().with_width(1.0).with_color(outline));
                    }
                }
            }
        });
        vec![background]
    }
}
