//! Counter Theme
//!
//! Design tokens in the style of the DDD design system. Components never
//! hard-code visual values; they name a token (`ColorToken::Primary`,
//! `SpacingToken::S2`, ...) and resolve it through [`ThemeState`].
//!
//! ```rust
//! use counter_theme::{ColorToken, ThemeState};
//!
//! let theme = ThemeState::get();
//! let primary = theme.color(ColorToken::Primary);
//! assert_eq!(ColorToken::Primary.css_var(), "--ddd-theme-primary");
//! # let _ = primary;
//! ```

pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use state::ThemeState;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::DddTheme;
pub use tokens::{
    Border, BorderToken, BorderTokens, ColorToken, ColorTokens, FontFamily, FontSizeToken,
    FontToken, RadiusToken, RadiusTokens, SpacingToken, SpacingTokens, TypographyTokens,
};
