use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary accent button style with glow on hover.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color { a: 0.9, ..palette.accent })),
                shadow: Shadow {
                    color: palette.accent,
                    blur_radius: 10.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                ..base
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(Color { a: 0.4, ..palette.accent })),
                ..base
            },
            _ => base,
        }
    }
}

/// Outlined button for secondary actions such as the resume download.
pub fn secondary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let border_color = match status {
            button::Status::Hovered => palette.accent_alt,
            _ => palette.border,
        };
        button::Style {
            background: Some(Background::Color(Color { a: 0.6, ..palette.surface })),
            text_color: palette.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

/// Borderless header link; the active section is drawn in the accent color.
pub fn nav_button_style(
    palette: PaletteColors,
    is_active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = match (is_active, status) {
            (true, _) => palette.accent,
            (false, button::Status::Hovered) => palette.glow,
            _ => palette.muted,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

/// Small round icon button for social links.
pub fn icon_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.surface_raised)),
            text_color: palette.accent,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 20.0.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                border: Border {
                    color: palette.glow,
                    ..base.border
                },
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 8.0,
                    offset: Vector::default(),
                },
                ..base
            },
            _ => base,
        }
    }
}
