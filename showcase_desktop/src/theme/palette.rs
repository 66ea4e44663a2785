use iced::Color;

/// Core color palette for the DevShowcase neon theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    /// Secondary highlight used for gradients and tags
    pub accent_alt: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(8, 10, 20),      // Night blue
            surface: Color::from_rgb8(16, 20, 36),        // Panel
            surface_raised: Color::from_rgb8(24, 30, 52), // Cards
            border: Color::from_rgb8(44, 54, 90),
            text: Color::from_rgb8(236, 240, 255),
            muted: Color::from_rgb8(140, 150, 185),
            accent: Color::from_rgb8(0, 204, 255),        // Neon cyan
            accent_soft: Color::from_rgb8(0, 150, 200),
            accent_alt: Color::from_rgb8(255, 51, 204),   // Neon pink
            success: Color::from_rgb8(51, 255, 153),
            warning: Color::from_rgb8(255, 204, 80),
            danger: Color::from_rgb8(255, 100, 110),
            glow: Color::from_rgb8(90, 220, 255),
        }
    }
}

/// Returns the palette for the application.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}
