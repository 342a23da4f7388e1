//! DDD design system theme

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;
use counter_core::Color;

/// Theme using the DDD palette
#[derive(Clone, Debug)]
pub struct DddTheme {
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    borders: BorderTokens,
}

impl DddTheme {
    /// Create the light variant
    pub fn light() -> Self {
        let primary = Color::from_hex(0x001E44);
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                // Nittany Navy on white
                primary,
                accent: Color::WHITE,
                sky_light: Color::from_hex(0xCCF0FF),
                creek_teal: Color::from_hex(0x3EA39E),
                keystone_yellow: Color::from_hex(0xFFD100),
                atherton_violet: Color::from_hex(0x7F58B0),
                invent_orange: Color::from_hex(0xBF8226),
                original87_pink: Color::from_hex(0xBC204B),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            borders: BorderTokens {
                border_md: Border {
                    width: 2.0,
                    color: primary,
                },
            },
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        let primary = Color::from_hex(0xE4E5E7);
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                primary,
                accent: Color::from_hex(0x001E44),
                sky_light: Color::from_hex(0x1E407C),
                creek_teal: Color::from_hex(0x52BFB9),
                keystone_yellow: Color::from_hex(0xFFE066),
                atherton_violet: Color::from_hex(0xB79BD9),
                invent_orange: Color::from_hex(0xE0A54C),
                original87_pink: Color::from_hex(0xE05A7E),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            borders: BorderTokens {
                border_md: Border {
                    width: 2.0,
                    color: primary,
                },
            },
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("DDD", Self::light(), Self::dark())
    }
}

impl Theme for DddTheme {
    fn name(&self) -> &str {
        "DDD"
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    fn borders(&self) -> &BorderTokens {
        &self.borders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ() {
        let light = DddTheme::light();
        let dark = DddTheme::dark();

        assert_eq!(light.color_scheme(), ColorScheme::Light);
        assert_eq!(dark.color_scheme(), ColorScheme::Dark);
        assert_ne!(light.colors().primary, dark.colors().primary);
    }

    #[test]
    fn test_emphasis_differs_from_primary() {
        for theme in [DddTheme::light(), DddTheme::dark()] {
            let colors = theme.colors();
            assert_ne!(colors.atherton_violet, colors.primary);
        }
    }
}
