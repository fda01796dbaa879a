//! Color handling for ArchiMate diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in rendered views.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::Deserialize;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Colors deserialize from any CSS color string, so palettes and style overrides
/// can be written as `"#85C1E9"`, `"rgb(255, 0, 0)"` or `"white"`.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use archimate_svg_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Opaque white, used for hollow glyphs and unfilled junctions.
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The value lies between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Named colors keep their name. Everything else is written as 8-bit sRGB,
/// `#RRGGBB` when opaque and `rgba(..)` otherwise.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = self.color.flags.color_name() {
            return f.write_str(name);
        }

        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            write!(f, "#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
        } else {
            write!(f, "{rgba}")
        }
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_invalid_message_names_input() {
        let err = Color::new("definitely-not").unwrap_err();
        assert!(err.contains("definitely-not"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_display_hex_is_exact() {
        assert_eq!(Color::new("#F9E79F").unwrap().to_string(), "#F9E79F");
        assert_eq!(Color::new("#85c1e9").unwrap().to_string(), "#85C1E9");
        assert_eq!(Color::new("rgb(1, 2, 3)").unwrap().to_string(), "#010203");
        let translucent = Color::new("rgba(255, 0, 0, 0.5)").unwrap().to_string();
        assert!(translucent.starts_with("rgba(255, 0, 0, 0.5"), "{translucent}");
    }

    #[test]
    fn test_color_white() {
        assert_eq!(Color::white().to_string(), "white");
        assert!((Color::white().alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_from_str() {
        let parsed: Color = "blue".parse().unwrap();
        assert_eq!(parsed, Color::new("blue").unwrap());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            fill: Color,
        }

        let holder: Holder = toml::from_str(r#"fill = "green""#).unwrap();
        assert_eq!(holder.fill.to_string(), "green");

        let invalid = toml::from_str::<Holder>(r#"fill = "nope""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
