//! Attribute resolution for the slide-text widget.

use std::collections::BTreeMap;

/// Attribute names that trigger a re-render when they change.
pub const OBSERVED_ATTRIBUTES: [&str; 8] = [
    "text",
    "background-color",
    "text-color",
    "animation-direction",
    "text-alignment",
    "animation-duration",
    "font-family",
    "font-size",
];

/// Returns `true` if changing `name` should re-render the widget.
#[inline]
pub fn is_observed(name: &str) -> bool {
    OBSERVED_ATTRIBUTES.contains(&name)
}

/// Which lifecycle the widget follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealMode {
    /// Wait until the container is visible, then reveal once
    #[default]
    OnVisible,
    /// Reveal immediately after every render
    OnRender,
}

impl RevealMode {
    /// Fallback values used when an attribute is absent or empty.
    pub fn defaults(self) -> Defaults {
        match self {
            RevealMode::OnVisible => Defaults {
                text: "Elegant",
                background_color: "#2C2F33",
                text_color: "#F8EDE3",
                font_family: "Playfair Display",
                generic_family: "serif",
            },
            RevealMode::OnRender => Defaults {
                text: "Animation",
                background_color: "#1E1E1E",
                text_color: "#FFFFFF",
                font_family: "Arial",
                generic_family: "sans-serif",
            },
        }
    }
}

/// Per-variant default literals.
///
/// Direction, alignment, duration and font size share the same defaults
/// across variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defaults {
    pub text: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub font_family: &'static str,
    /// Generic CSS family appended after `font_family`
    pub generic_family: &'static str,
}

pub(crate) const DEFAULT_ALIGNMENT: &str = "center";
pub(crate) const DEFAULT_DURATION: &str = "1.5";
pub(crate) const DEFAULT_FONT_SIZE: &str = "5";

/// Slide direction of the reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Letters slide in from the right edge towards their place
    #[default]
    Left,
    /// Letters slide in from the left edge towards their place
    Right,
}

impl Direction {
    /// Parse an `animation-direction` value.
    ///
    /// Only the exact token `right` selects [`Direction::Right`]; every other
    /// value, including typos and mixed case, falls back to left.
    pub fn from_attr(value: &str) -> Self {
        if value == "right" {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// Name of the keyframe animation for this direction.
    pub fn animation_name(self) -> &'static str {
        match self {
            Direction::Left => "slideLeft",
            Direction::Right => "slideRight",
        }
    }

    /// Starting horizontal offset of each letter.
    pub fn translate_from(self) -> &'static str {
        match self {
            Direction::Left => "200px",
            Direction::Right => "-200px",
        }
    }
}

/// String-valued attribute map of a widget instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a raw attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Set an attribute, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning the previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Get an attribute, treating empty values as absent.
    fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse an attribute preset from a TOML table of string values.
    ///
    /// ```rust,ignore
    /// let attrs = Attributes::from_toml_str(r##"
    /// text = "Hello"
    /// "animation-direction" = "right"
    /// "##)?;
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Fully resolved render parameters.
///
/// `duration` and `font_size` keep the raw attribute text; they are never
/// parsed, so malformed numbers end up verbatim in the stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetConfig {
    pub text: String,
    pub background_color: String,
    pub text_color: String,
    pub direction: Direction,
    pub alignment: String,
    /// Animation duration in seconds
    pub duration: String,
    pub font_family: String,
    /// Generic family used as the font fallback
    pub generic_family: String,
    /// Font size in viewport-width units
    pub font_size: String,
}

impl WidgetConfig {
    /// Resolve the attribute map into a config, applying defaults.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use slide_text::{Attributes, Direction, RevealMode, WidgetConfig};
    ///
    /// let attrs: Attributes = [("text", "Hi"), ("animation-direction", "right")]
    ///     .into_iter()
    ///     .collect();
    /// let config = WidgetConfig::resolve(&attrs, RevealMode::OnVisible);
    ///
    /// assert_eq!(config.text, "Hi");
    /// assert_eq!(config.direction, Direction::Right);
    /// assert_eq!(config.alignment, "center");
    /// ```
    pub fn resolve(attrs: &Attributes, mode: RevealMode) -> Self {
        let defaults = mode.defaults();
        let pick = |name: &str, fallback: &str| attrs.non_empty(name).unwrap_or(fallback).to_string();

        Self {
            text: pick("text", defaults.text),
            background_color: pick("background-color", defaults.background_color),
            text_color: pick("text-color", defaults.text_color),
            direction: attrs
                .non_empty("animation-direction")
                .map(Direction::from_attr)
                .unwrap_or_default(),
            alignment: pick("text-alignment", DEFAULT_ALIGNMENT),
            duration: pick("animation-duration", DEFAULT_DURATION),
            font_family: pick("font-family", defaults.font_family),
            generic_family: defaults.generic_family.to_string(),
            font_size: pick("font-size", DEFAULT_FONT_SIZE),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::resolve(&Attributes::new(), RevealMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_on_visible() {
        let config = WidgetConfig::resolve(&Attributes::new(), RevealMode::OnVisible);
        assert_eq!(config.text, "Elegant");
        assert_eq!(config.background_color, "#2C2F33");
        assert_eq!(config.text_color, "#F8EDE3");
        assert_eq!(config.direction, Direction::Left);
        assert_eq!(config.alignment, "center");
        assert_eq!(config.duration, "1.5");
        assert_eq!(config.font_family, "Playfair Display");
        assert_eq!(config.generic_family, "serif");
        assert_eq!(config.font_size, "5");
    }

    #[test]
    fn defaults_on_render() {
        let config = WidgetConfig::resolve(&Attributes::new(), RevealMode::OnRender);
        assert_eq!(config.text, "Animation");
        assert_eq!(config.font_family, "Arial");
        assert_eq!(config.generic_family, "sans-serif");
        assert_eq!(config.duration, "1.5");
        assert_eq!(config.font_size, "5");
    }

    #[test]
    fn default_impl_matches_on_visible() {
        assert_eq!(
            WidgetConfig::default(),
            WidgetConfig::resolve(&Attributes::new(), RevealMode::OnVisible)
        );
    }

    #[test]
    fn empty_values_fall_back() {
        let attrs: Attributes = OBSERVED_ATTRIBUTES.iter().map(|name| (*name, "")).collect();

        for mode in [RevealMode::OnVisible, RevealMode::OnRender] {
            let config = WidgetConfig::resolve(&attrs, mode);
            assert_eq!(config, WidgetConfig::resolve(&Attributes::new(), mode));
            assert!(!config.text.is_empty());
            assert!(!config.background_color.is_empty());
            assert!(!config.text_color.is_empty());
            assert!(!config.alignment.is_empty());
            assert!(!config.duration.is_empty());
            assert!(!config.font_family.is_empty());
            assert!(!config.font_size.is_empty());
        }
    }

    #[test]
    fn explicit_values_win() {
        let attrs: Attributes = [
            ("text", "Hello World"),
            ("background-color", "black"),
            ("text-color", "#abc"),
            ("animation-direction", "right"),
            ("text-alignment", "left"),
            ("animation-duration", "3"),
            ("font-family", "Inter"),
            ("font-size", "8"),
        ]
        .into_iter()
        .collect();

        let config = WidgetConfig::resolve(&attrs, RevealMode::OnVisible);
        assert_eq!(config.text, "Hello World");
        assert_eq!(config.background_color, "black");
        assert_eq!(config.text_color, "#abc");
        assert_eq!(config.direction, Direction::Right);
        assert_eq!(config.alignment, "left");
        assert_eq!(config.duration, "3");
        assert_eq!(config.font_family, "Inter");
        assert_eq!(config.font_size, "8");
    }

    #[test]
    fn malformed_numbers_pass_through() {
        let attrs: Attributes = [("animation-duration", "fast"), ("font-size", "huge")]
            .into_iter()
            .collect();
        let config = WidgetConfig::resolve(&attrs, RevealMode::OnVisible);
        assert_eq!(config.duration, "fast");
        assert_eq!(config.font_size, "huge");
    }

    #[rstest]
    #[case("right", Direction::Right)]
    #[case("left", Direction::Left)]
    #[case("Right", Direction::Left)]
    #[case("up", Direction::Left)]
    #[case(" right", Direction::Left)]
    fn direction_parsing(#[case] value: &str, #[case] expected: Direction) {
        assert_eq!(Direction::from_attr(value), expected);
    }

    #[test]
    fn direction_keyframes() {
        assert_eq!(Direction::Left.animation_name(), "slideLeft");
        assert_eq!(Direction::Left.translate_from(), "200px");
        assert_eq!(Direction::Right.animation_name(), "slideRight");
        assert_eq!(Direction::Right.translate_from(), "-200px");
    }

    #[test]
    fn observed_attribute_names() {
        assert!(is_observed("text"));
        assert!(is_observed("font-size"));
        assert!(!is_observed("class"));
        assert!(!is_observed("Text"));
    }

    #[test]
    fn attribute_set_and_remove() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set("text", "A"), None);
        assert_eq!(attrs.set("text", "B"), Some("A".to_string()));
        assert_eq!(attrs.get("text"), Some("B"));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.remove("text"), Some("B".to_string()));
        assert!(attrs.is_empty());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn attributes_from_toml() {
        let attrs = Attributes::from_toml_str(
            r##"
text = "Preset"
"animation-direction" = "right"
"background-color" = "#000000"
"##,
        )
        .unwrap();
        let config = WidgetConfig::resolve(&attrs, RevealMode::OnVisible);
        assert_eq!(config.text, "Preset");
        assert_eq!(config.direction, Direction::Right);
        assert_eq!(config.background_color, "#000000");
    }
}
