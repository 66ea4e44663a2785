use super::palette::palette;
use iced::{theme, Theme};

/// Creates the custom DevShowcase theme.
pub fn app_theme() -> Theme {
    let p = palette();
    Theme::custom(
        "DevShowcase Neon".to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: p.warning,
            danger: p.danger,
        },
    )
}
