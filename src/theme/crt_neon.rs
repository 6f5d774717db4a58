//! CRT Neon theme implementation

use ratatui::style::Color;

use super::Theme;

/// CRT Neon color palette
pub const CRT_NEON: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Accents
    primary: Color::Rgb(255, 239, 124),   // #ffef7c
    accent: Color::Rgb(90, 212, 255),     // #5ad4ff
    secondary: Color::Rgb(255, 102, 204), // #ff66cc

    // Focal opacity gradient (center to edge)
    focal: [
        Color::Rgb(255, 255, 255), // 100% brightness (focal line)
        Color::Rgb(176, 176, 176), // 70% (adjacent lines)
        Color::Rgb(128, 128, 128), // 45% (2 lines away)
        Color::Rgb(80, 80, 80),    // 25% (3 lines away)
        Color::Rgb(48, 48, 48),    // 10% (beyond)
    ],

    // UI chrome
    dim: Color::Rgb(68, 68, 68),      // #444444
    very_dim: Color::Rgb(48, 48, 48), // #303030
    muted: Color::Rgb(102, 102, 102), // #666666
};

// Workaround for const String
impl Theme {
    pub fn crt_neon() -> Self {
        Theme { name: "CRT Neon".to_string(), ..CRT_NEON }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crt_neon_has_correct_name() {
        let theme = Theme::crt_neon();
        assert_eq!(theme.name, "CRT Neon");
    }

    #[test]
    fn crt_neon_colors_are_rgb() {
        let theme = Theme::crt_neon();
        assert!(matches!(theme.primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.focal[0], Color::Rgb(_, _, _)));
    }
}
