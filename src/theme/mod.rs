//! Theming system for Fovea

mod crt_neon;

pub use crt_neon::CRT_NEON;

use ratatui::style::Color;

use crate::focal::MAX_TIER;

/// A color theme for the reader
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Accents
    /// Titles and bold emphasis
    pub primary: Color,
    /// Italic emphasis
    pub accent: Color,
    /// Selection highlight in the chapter picker
    pub secondary: Color,

    /// Focal fade gradient, center outwards; the last entry is the
    /// attention floor for every row at or beyond `MAX_TIER`
    pub focal: [Color; MAX_TIER as usize + 1],

    // UI chrome
    pub dim: Color,
    pub very_dim: Color,
    pub muted: Color,
}

impl Theme {
    /// Fade color for a tier; saturates at the gradient floor
    pub fn focal_color(&self, tier: u8) -> Color {
        let index = (tier as usize).min(self.focal.len() - 1);
        self.focal[index]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::crt_neon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_crt_neon() {
        let theme = Theme::default();
        assert_eq!(theme.name, "CRT Neon");
    }

    #[test]
    fn focal_color_saturates_beyond_the_gradient() {
        let theme = Theme::default();
        assert_eq!(theme.focal_color(4), theme.focal_color(200));
        assert_ne!(theme.focal_color(0), theme.focal_color(4));
    }

    #[test]
    fn focal_gradient_starts_at_full_brightness() {
        let theme = Theme::default();
        assert_eq!(theme.focal_color(0), Color::Rgb(255, 255, 255));
    }
}
