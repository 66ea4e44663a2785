use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};
use showcase_core::contact::NoticeKind;

/// Raised card used by the about stats, skill groups and contact panel.
pub fn card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color { a: 0.75, ..palette.surface_raised })),
        text_color: Some(palette.text),
        border: Border {
            color: Color { a: 0.6, ..palette.border },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Header bar; turns solid with a shadow once the page is scrolled.
pub fn header_style(palette: PaletteColors, solid: bool) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| {
        if solid {
            container::Style {
                background: Some(Background::Color(Color { a: 0.92, ..palette.surface })),
                border: Border {
                    color: palette.border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow {
                    color: Color { a: 0.4, ..Color::BLACK },
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 12.0,
                },
                ..Default::default()
            }
        } else {
            container::Style {
                background: None,
                ..Default::default()
            }
        }
    }
}

/// Small pill used for skill and technology tags.
pub fn tag_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..palette.accent_alt })),
        text_color: Some(palette.text),
        border: Border {
            color: Color { a: 0.4, ..palette.accent_alt },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Status line under the contact form.
pub fn notice_style(palette: PaletteColors, kind: NoticeKind) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| {
        let color = match kind {
            NoticeKind::Success => palette.success,
            NoticeKind::Warning => palette.warning,
            NoticeKind::Error => palette.danger,
        };
        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..color })),
            text_color: Some(color),
            border: Border {
                color: Color { a: 0.5, ..color },
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Thin bar across the top showing how far the page is scrolled.
pub fn progress_bar_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(palette.accent)),
        shadow: Shadow {
            color: palette.glow,
            offset: Vector::default(),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Transparent container style.
pub fn transparent_style() -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: None,
        ..Default::default()
    }
}
