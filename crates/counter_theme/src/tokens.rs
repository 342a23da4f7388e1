//! Design token definitions
//!
//! Each token family has a value struct (what a theme supplies) and a key
//! enum (what a component references). Keys also know their CSS custom
//! property name so rendered output can reference the variable directly.

use counter_core::Color;

// ============================================================================
// Colors
// ============================================================================

/// Color token keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    Accent,
    SkyLight,
    CreekTeal,
    KeystoneYellow,
    AthertonViolet,
    InventOrange,
    Original87Pink,
}

impl ColorToken {
    pub const ALL: [ColorToken; 8] = [
        ColorToken::Primary,
        ColorToken::Accent,
        ColorToken::SkyLight,
        ColorToken::CreekTeal,
        ColorToken::KeystoneYellow,
        ColorToken::AthertonViolet,
        ColorToken::InventOrange,
        ColorToken::Original87Pink,
    ];

    /// CSS custom property supplying this token
    pub fn css_var(&self) -> &'static str {
        match self {
            ColorToken::Primary => "--ddd-theme-primary",
            ColorToken::Accent => "--ddd-theme-accent",
            ColorToken::SkyLight => "--ddd-theme-default-skyLight",
            ColorToken::CreekTeal => "--ddd-theme-default-creekTeal",
            ColorToken::KeystoneYellow => "--ddd-theme-default-keystoneYellow",
            ColorToken::AthertonViolet => "--ddd-theme-default-athertonViolet",
            ColorToken::InventOrange => "--ddd-theme-default-inventOrange",
            ColorToken::Original87Pink => "--ddd-theme-default-original87Pink",
        }
    }
}

/// Color values supplied by a theme
#[derive(Clone, Debug)]
pub struct ColorTokens {
    pub primary: Color,
    pub accent: Color,
    pub sky_light: Color,
    pub creek_teal: Color,
    pub keystone_yellow: Color,
    pub atherton_violet: Color,
    pub invent_orange: Color,
    pub original87_pink: Color,
}

impl ColorTokens {
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Accent => self.accent,
            ColorToken::SkyLight => self.sky_light,
            ColorToken::CreekTeal => self.creek_teal,
            ColorToken::KeystoneYellow => self.keystone_yellow,
            ColorToken::AthertonViolet => self.atherton_violet,
            ColorToken::InventOrange => self.invent_orange,
            ColorToken::Original87Pink => self.original87_pink,
        }
    }
}

// ============================================================================
// Spacing
// ============================================================================

/// Spacing token keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    S1,
    S2,
    S4,
}

impl SpacingToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            SpacingToken::S1 => "--ddd-spacing-1",
            SpacingToken::S2 => "--ddd-spacing-2",
            SpacingToken::S4 => "--ddd-spacing-4",
        }
    }
}

/// Spacing values in pixels
#[derive(Clone, Debug)]
pub struct SpacingTokens {
    pub space_1: f32,
    pub space_2: f32,
    pub space_4: f32,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::S1 => self.space_1,
            SpacingToken::S2 => self.space_2,
            SpacingToken::S4 => self.space_4,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_1: 4.0,
            space_2: 8.0,
            space_4: 16.0,
        }
    }
}

// ============================================================================
// Radii
// ============================================================================

/// Corner radius token keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    Sm,
    Lg,
}

impl RadiusToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            RadiusToken::Sm => "--ddd-radius-sm",
            RadiusToken::Lg => "--ddd-radius-lg",
        }
    }
}

/// Corner radii in pixels
#[derive(Clone, Debug)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_lg: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Lg => self.radius_lg,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 4.0,
            radius_lg: 12.0,
        }
    }
}

// ============================================================================
// Typography
// ============================================================================

/// Font family with fallbacks
#[derive(Clone, Debug, PartialEq)]
pub struct FontFamily {
    pub name: String,
    pub fallbacks: Vec<String>,
}

impl FontFamily {
    pub fn new(name: impl Into<String>, fallbacks: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            fallbacks: fallbacks.into_iter().map(String::from).collect(),
        }
    }

    /// CSS `font-family` value
    pub fn css_stack(&self) -> String {
        std::iter::once(format!("\"{}\"", self.name))
            .chain(self.fallbacks.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Font family token keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontToken {
    Navigation,
}

impl FontToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            FontToken::Navigation => "--ddd-font-navigation",
        }
    }
}

/// Font size token keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSizeToken {
    M,
    Xxl,
}

impl FontSizeToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            FontSizeToken::M => "--ddd-font-size-m",
            FontSizeToken::Xxl => "--ddd-font-size-xxl",
        }
    }
}

/// Typography values
#[derive(Clone, Debug)]
pub struct TypographyTokens {
    pub font_navigation: FontFamily,
    /// Font size in pixels
    pub size_m: f32,
    pub size_xxl: f32,
}

impl TypographyTokens {
    pub fn font(&self, token: FontToken) -> &FontFamily {
        match token {
            FontToken::Navigation => &self.font_navigation,
        }
    }

    pub fn size(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::M => self.size_m,
            FontSizeToken::Xxl => self.size_xxl,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_navigation: FontFamily::new("Roboto Condensed", vec!["sans-serif"]),
            size_m: 24.0,
            size_xxl: 48.0,
        }
    }
}

// ============================================================================
// Borders
// ============================================================================

/// Border token keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderToken {
    Md,
}

impl BorderToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            BorderToken::Md => "--ddd-border-md",
        }
    }
}

/// A solid border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub fn to_css(&self) -> String {
        format!("{}px solid {}", self.width, self.color.to_css())
    }
}

/// Border values
#[derive(Clone, Debug)]
pub struct BorderTokens {
    pub border_md: Border,
}

impl BorderTokens {
    pub fn get(&self, token: BorderToken) -> Border {
        match token {
            BorderToken::Md => self.border_md,
        }
    }
}
