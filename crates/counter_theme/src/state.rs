//! Global theme state
//!
//! The active theme lives in a process-wide slot that components read at
//! render time. It starts out as the light DDD theme.

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::themes::DddTheme;
use crate::tokens::*;
use counter_core::Color;
use std::sync::{Arc, OnceLock, RwLock};

static THEME_STATE: OnceLock<RwLock<Arc<ThemeState>>> = OnceLock::new();

fn global() -> &'static RwLock<Arc<ThemeState>> {
    THEME_STATE.get_or_init(|| {
        RwLock::new(Arc::new(ThemeState::new(
            DddTheme::bundle(),
            ColorScheme::Light,
        )))
    })
}

/// A resolved theme: a bundle plus the active color scheme
#[derive(Clone, Debug)]
pub struct ThemeState {
    bundle: ThemeBundle,
    scheme: ColorScheme,
    theme: Arc<dyn Theme>,
}

impl ThemeState {
    pub fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        let theme = bundle.for_scheme(scheme);
        Self {
            bundle,
            scheme,
            theme,
        }
    }

    /// Snapshot of the active global theme
    pub fn get() -> Arc<ThemeState> {
        Arc::clone(&global().read().unwrap())
    }

    /// Replace the global theme
    pub fn set(bundle: ThemeBundle, scheme: ColorScheme) {
        tracing::debug!("theme set to {} ({:?})", bundle.name(), scheme);
        *global().write().unwrap() = Arc::new(ThemeState::new(bundle, scheme));
    }

    /// Switch the global theme between light and dark
    pub fn set_color_scheme(scheme: ColorScheme) {
        let bundle = Self::get().bundle.clone();
        Self::set(bundle, scheme);
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.theme.colors().get(token)
    }

    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.theme.spacing().get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.theme.radii().get(token)
    }

    pub fn font(&self, token: FontToken) -> &FontFamily {
        self.theme.typography().font(token)
    }

    pub fn font_size(&self, token: FontSizeToken) -> f32 {
        self.theme.typography().size(token)
    }

    pub fn border(&self, token: BorderToken) -> Border {
        self.theme.borders().get(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_state_resolves_tokens() {
        let state = ThemeState::new(DddTheme::bundle(), ColorScheme::Dark);
        assert_eq!(state.scheme(), ColorScheme::Dark);
        assert_eq!(
            state.color(ColorToken::Primary),
            DddTheme::dark().colors().primary
        );
        assert_eq!(state.spacing(SpacingToken::S2), 8.0);
        assert_eq!(state.radius(RadiusToken::Lg), 12.0);
        assert_eq!(state.font_size(FontSizeToken::Xxl), 48.0);
    }

    // The only test in this crate that touches the global slot
    #[test]
    fn test_global_scheme_switch() {
        assert_eq!(ThemeState::get().theme().name(), "DDD");

        ThemeState::set_color_scheme(ColorScheme::Dark);
        assert_eq!(ThemeState::get().scheme(), ColorScheme::Dark);

        ThemeState::set_color_scheme(ColorScheme::Light);
        assert_eq!(
            ThemeState::get().color(ColorToken::Primary),
            DddTheme::light().colors().primary
        );
    }
}
