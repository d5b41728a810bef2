//! Brand theme derived from site settings
//!
//! The four color tokens the rendering layer uses for brand coloring.
//! The theme is an explicit value recomputed by the store whenever
//! settings change; consumers read it from the store rather than from any
//! shared ambient state.

use serde::{Deserialize, Serialize};

use crate::models::SiteSettings;
use crate::seed;

/// An RGB color token
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The four brand color tokens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub dark: Rgb,
}

impl Theme {
    /// Derive the theme from settings.
    ///
    /// Each token is parsed from its `#RRGGBB` settings field; a token
    /// that fails to parse falls back to the seed default for that field.
    pub fn from_settings(settings: &SiteSettings) -> Self {
        let defaults = seed::default_settings();
        Self {
            primary: parse_hex(&settings.primary_color)
                .or_else(|| parse_hex(&defaults.primary_color))
                .unwrap_or(Rgb(0, 0, 0)),
            secondary: parse_hex(&settings.secondary_color)
                .or_else(|| parse_hex(&defaults.secondary_color))
                .unwrap_or(Rgb(0, 0, 0)),
            accent: parse_hex(&settings.accent_color)
                .or_else(|| parse_hex(&defaults.accent_color))
                .unwrap_or(Rgb(0, 0, 0)),
            dark: parse_hex(&settings.dark_color)
                .or_else(|| parse_hex(&defaults.dark_color))
                .unwrap_or(Rgb(0, 0, 0)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_settings(&seed::default_settings())
    }
}

/// Parse a `#RRGGBB` hex color string
fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#D4AF37"), Some(Rgb(0xD4, 0xAF, 0x37)));
        assert_eq!(parse_hex("#000000"), Some(Rgb(0, 0, 0)));
        assert_eq!(parse_hex("D4AF37"), None);
        assert_eq!(parse_hex("#D4AF3"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_theme_from_seed_settings() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Rgb(0xD4, 0xAF, 0x37));
        assert_eq!(theme.secondary, Rgb(0xFD, 0xF5, 0xE6));
        assert_eq!(theme.accent, Rgb(0xE1, 0x9A, 0x9A));
        assert_eq!(theme.dark, Rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_theme_tracks_settings_change() {
        let mut settings = seed::default_settings();
        settings.primary_color = "#FF0000".to_string();

        let theme = Theme::from_settings(&settings);
        assert_eq!(theme.primary, Rgb(0xFF, 0, 0));
        // Other tokens unchanged
        assert_eq!(theme.dark, Rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_malformed_color_falls_back_to_seed() {
        let mut settings = seed::default_settings();
        settings.accent_color = "not-a-color".to_string();

        let theme = Theme::from_settings(&settings);
        assert_eq!(theme.accent, Rgb(0xE1, 0x9A, 0x9A));
    }
}
