//! Counter styles
//!
//! Styles are kept as design-token references. [`styles`] emits the style
//! sheet with `var(--token)` lookups for hosts that provide the tokens;
//! [`CounterStyles::resolve`] turns the same references into concrete values
//! against the active [`ThemeState`] for headless rendering.

use counter_core::Color;
use counter_theme::{
    BorderToken, ColorToken, FontSizeToken, FontToken, RadiusToken, SpacingToken, ThemeState,
};

/// Host custom property overriding the number's font size
pub const LABEL_FONT_SIZE_VAR: &str = "--counter-app-label-font-size";

/// Opacity applied to a disabled button
pub const DISABLED_OPACITY: f32 = 0.5;

/// Concrete style values for one render
#[derive(Clone, Debug, PartialEq)]
pub struct CounterStyles {
    pub host_color: Color,
    pub host_background: Color,
    pub host_font: String,
    pub host_padding: f32,
    pub host_border: String,
    pub host_radius: f32,

    pub wrapper_padding: f32,

    pub counter_font_size: f32,
    pub counter_margin_bottom: f32,
    pub counter_color: Color,
    pub counter_emphasis_color: Color,

    pub buttons_gap: f32,

    pub button_padding: f32,
    pub button_font_size: f32,
    pub button_background: Color,
    pub button_hover: Color,
    pub button_focus: Color,
    pub button_radius: f32,
}

impl CounterStyles {
    /// Resolve all token references against the current theme
    pub fn resolve(label_font_size: Option<f32>) -> Self {
        Self::resolve_with(&ThemeState::get(), label_font_size)
    }

    pub fn resolve_with(theme: &ThemeState, label_font_size: Option<f32>) -> Self {
        Self {
            host_color: theme.color(ColorToken::Primary),
            host_background: theme.color(ColorToken::Accent),
            host_font: theme.font(FontToken::Navigation).css_stack(),
            host_padding: theme.spacing(SpacingToken::S2),
            host_border: theme.border(BorderToken::Md).to_css(),
            host_radius: theme.radius(RadiusToken::Lg),

            wrapper_padding: theme.spacing(SpacingToken::S4),

            counter_font_size: label_font_size
                .unwrap_or_else(|| theme.font_size(FontSizeToken::Xxl)),
            counter_margin_bottom: theme.spacing(SpacingToken::S2),
            counter_color: theme.color(ColorToken::Primary),
            counter_emphasis_color: theme.color(ColorToken::AthertonViolet),

            buttons_gap: theme.spacing(SpacingToken::S1),

            button_padding: theme.spacing(SpacingToken::S2),
            button_font_size: theme.font_size(FontSizeToken::M),
            button_background: theme.color(ColorToken::SkyLight),
            button_hover: theme.color(ColorToken::CreekTeal),
            button_focus: theme.color(ColorToken::KeystoneYellow),
            button_radius: theme.radius(RadiusToken::Sm),
        }
    }

    /// Color of the number display
    pub fn counter_color(&self, emphasized: bool) -> Color {
        if emphasized {
            self.counter_emphasis_color
        } else {
            self.counter_color
        }
    }

    /// Inline style for the host element
    pub fn host_inline(&self) -> String {
        format!(
            "display: block; color: {}; background-color: {}; font-family: {}; \
             padding: {}px; border: {}; border-radius: {}px",
            self.host_color.to_css(),
            self.host_background.to_css(),
            self.host_font,
            self.host_padding,
            self.host_border,
            self.host_radius,
        )
    }

    pub fn wrapper_inline(&self) -> String {
        format!(
            "display: flex; flex-direction: column; align-items: center; padding: {}px",
            self.wrapper_padding
        )
    }

    pub fn counter_inline(&self, emphasized: bool) -> String {
        format!(
            "font-size: {}px; margin-bottom: {}px; color: {}",
            self.counter_font_size,
            self.counter_margin_bottom,
            self.counter_color(emphasized).to_css(),
        )
    }

    pub fn buttons_inline(&self) -> String {
        format!("display: flex; gap: {}px", self.buttons_gap)
    }

    pub fn button_inline(&self, disabled: bool) -> String {
        let mut style = format!(
            "padding: {}px; font-size: {}px; background-color: {}; border: none; \
             border-radius: {}px",
            self.button_padding,
            self.button_font_size,
            self.button_background.to_css(),
            self.button_radius,
        );
        if disabled {
            style.push_str(&format!("; opacity: {}; cursor: not-allowed", DISABLED_OPACITY));
        } else {
            style.push_str("; cursor: pointer");
        }
        style
    }
}

fn var(token: &str) -> String {
    format!("var({})", token)
}

/// The widget's style sheet in token-reference form
pub fn styles() -> String {
    let violet = var(ColorToken::AthertonViolet.css_var());
    format!(
        r#":host {{
  display: block;
  color: {primary};
  background-color: {accent};
  font-family: {font};
  padding: {s2};
  border: {border};
  border-radius: {radius_lg};
}}
.wrapper {{
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: {s4};
}}
.counter {{
  font-size: var({label}, {xxl});
  margin-bottom: {s2};
  color: {primary};
}}
.counter.emphasized {{
  color: {violet};
}}
.buttons {{
  display: flex;
  gap: {s1};
}}
button {{
  padding: {s2};
  cursor: pointer;
  font-size: {m};
  background-color: {sky};
  border: none;
  border-radius: {radius_sm};
}}
button:hover {{
  background-color: {teal};
}}
button:focus {{
  background-color: {yellow};
}}
button:disabled {{
  opacity: {opacity};
  cursor: not-allowed;
}}
"#,
        primary = var(ColorToken::Primary.css_var()),
        accent = var(ColorToken::Accent.css_var()),
        font = var(FontToken::Navigation.css_var()),
        s1 = var(SpacingToken::S1.css_var()),
        s2 = var(SpacingToken::S2.css_var()),
        s4 = var(SpacingToken::S4.css_var()),
        border = var(BorderToken::Md.css_var()),
        radius_lg = var(RadiusToken::Lg.css_var()),
        radius_sm = var(RadiusToken::Sm.css_var()),
        label = LABEL_FONT_SIZE_VAR,
        xxl = var(FontSizeToken::Xxl.css_var()),
        m = var(FontSizeToken::M.css_var()),
        sky = var(ColorToken::SkyLight.css_var()),
        teal = var(ColorToken::CreekTeal.css_var()),
        yellow = var(ColorToken::KeystoneYellow.css_var()),
        violet = violet,
        opacity = DISABLED_OPACITY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter_theme::{ColorScheme, DddTheme};

    fn light() -> ThemeState {
        ThemeState::new(DddTheme::bundle(), ColorScheme::Light)
    }

    #[test]
    fn test_resolves_ddd_tokens() {
        let styles = CounterStyles::resolve_with(&light(), None);
        assert_eq!(styles.counter_color(false), Color::from_hex(0x001E44));
        assert_eq!(styles.counter_color(true), Color::from_hex(0x7F58B0));
        assert_eq!(styles.button_background, Color::from_hex(0xCCF0FF));
        assert_eq!(styles.button_hover, Color::from_hex(0x3EA39E));
        assert_eq!(styles.button_focus, Color::from_hex(0xFFD100));
        assert_eq!(styles.counter_font_size, 48.0);
        assert_eq!(styles.button_font_size, 24.0);
        assert_eq!(styles.buttons_gap, 4.0);
    }

    #[test]
    fn test_label_font_size_override() {
        let styles = CounterStyles::resolve_with(&light(), Some(64.0));
        assert_eq!(styles.counter_font_size, 64.0);
        assert!(styles.counter_inline(false).starts_with("font-size: 64px"));
    }

    #[test]
    fn test_disabled_button_style() {
        let styles = CounterStyles::resolve_with(&light(), None);
        assert!(styles.button_inline(true).contains("opacity: 0.5"));
        assert!(!styles.button_inline(false).contains("opacity"));
    }

    #[test]
    fn test_style_sheet_references_tokens() {
        let sheet = styles();
        assert!(sheet.contains("var(--counter-app-label-font-size, var(--ddd-font-size-xxl))"));
        assert!(sheet.contains(ColorToken::AthertonViolet.css_var()));
        assert!(sheet.contains("opacity: 0.5"));
    }
}
