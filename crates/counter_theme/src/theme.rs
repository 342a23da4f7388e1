//! Theme trait and light/dark bundles

use crate::tokens::*;
use std::sync::Arc;

/// Light or dark variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// A complete set of design token values
pub trait Theme: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    fn color_scheme(&self) -> ColorScheme;

    fn colors(&self) -> &ColorTokens;

    fn typography(&self) -> &TypographyTokens;

    fn spacing(&self) -> &SpacingTokens;

    fn radii(&self) -> &RadiusTokens;

    fn borders(&self) -> &BorderTokens;
}

/// A named pair of light and dark themes
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: Arc<dyn Theme>,
    dark: Arc<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(
        name: impl Into<String>,
        light: impl Theme + 'static,
        dark: impl Theme + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variant for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> Arc<dyn Theme> {
        match scheme {
            ColorScheme::Light => Arc::clone(&self.light),
            ColorScheme::Dark => Arc::clone(&self.dark),
        }
    }
}
