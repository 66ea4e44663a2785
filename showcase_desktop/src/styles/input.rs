use crate::constants::INPUT_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::{text_editor, text_input};
use iced::{Background, Border, Color, Theme};

/// Red while the field has a validation error, accent while focused or
/// hovered, plain border otherwise.
fn field_border(palette: PaletteColors, has_error: bool, is_focused: bool) -> Border {
    let color = if has_error {
        palette.danger
    } else if is_focused {
        palette.accent
    } else {
        palette.border
    };
    Border {
        color,
        width: 1.0,
        radius: INPUT_BORDER_RADIUS.into(),
    }
}

fn field_background(palette: PaletteColors) -> Background {
    Background::Color(Color { a: 0.6, ..palette.surface_raised })
}

/// Single-line contact form input.
pub fn input_style(
    palette: PaletteColors,
    has_error: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + Clone {
    move |_, status| {
        let is_focused = matches!(status, text_input::Status::Focused { .. } | text_input::Status::Hovered);
        text_input::Style {
            background: field_background(palette),
            border: field_border(palette, has_error, is_focused),
            icon: palette.muted,
            placeholder: palette.muted,
            value: palette.text,
            selection: palette.accent,
        }
    }
}

/// Multi-line message editor, styled like [`input_style`].
pub fn editor_style(
    palette: PaletteColors,
    has_error: bool,
) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style + Clone {
    move |_, status| {
        let is_focused = matches!(status, text_editor::Status::Focused { .. } | text_editor::Status::Hovered);
        text_editor::Style {
            background: field_background(palette),
            border: field_border(palette, has_error, is_focused),
            placeholder: palette.muted,
            value: palette.text,
            selection: Color { a: 0.3, ..palette.accent },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_border_wins_over_focus() {
        let pal = palette();
        assert_eq!(field_border(pal, true, true).color, pal.danger);
        assert_eq!(field_border(pal, true, false).color, pal.danger);
    }

    #[test]
    fn test_focus_border_without_error() {
        let pal = palette();
        assert_eq!(field_border(pal, false, true).color, pal.accent);
        assert_eq!(field_border(pal, false, false).color, pal.border);
    }
}
