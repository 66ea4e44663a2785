//! Spinning ring shown on the splash screen and in the submit button.

use iced::widget::canvas::{self, path, Cache, Geometry, Path, Stroke};
use iced::{Color, Radians, Rectangle, Theme};
use std::f32::consts::TAU;

/// Share of the ring that is drawn; the rest is the gap.
const RING_SWEEP: f32 = 0.75;

#[derive(Debug, Clone, Copy)]
pub struct SpinnerState {
    /// Seconds of animation; the ring turns once per second.
    pub tick: f32,
    /// Ring radius in pixels.
    pub size: f32,
    pub color: Color,
}

pub struct LoadingSpinner {
    state: SpinnerState,
    cache: Cache,
}

impl LoadingSpinner {
    pub fn new(state: SpinnerState) -> Self {
        Self {
            state,
            cache: Cache::new(),
        }
    }
}

/// Start and end angle of the visible arc at `tick`.
fn arc_angles(tick: f32) -> (f32, f32) {
    let start = tick.rem_euclid(1.0) * TAU;
    (start, start + RING_SWEEP * TAU)
}

fn ring_width(size: f32) -> f32 {
    (size / 7.0).max(2.0)
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        vec![self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let width = ring_width(self.state.size);
            let (start, end) = arc_angles(self.state.tick);

            frame.stroke(
                &Path::circle(center, self.state.size),
                Stroke::default().with_width(width).with_color(Color {
                    a: 0.15,
                    ..self.state.color
                }),
            );

            let arc = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius: self.state.size,
                    start_angle: Radians(start),
                    end_angle: Radians(end),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(width)
                    .with_color(self.state.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        })]
    }
}
