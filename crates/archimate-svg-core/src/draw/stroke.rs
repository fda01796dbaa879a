//! Stroke settings shared by element outlines, arrowhead glyphs and connector
//! lines.
//!
//! A [`StrokeDefinition`] maps onto the `stroke`, `stroke-width` and
//! `stroke-dasharray` attributes. The [`apply_stroke!`](crate::apply_stroke!)
//! macro writes them onto any `svg` element builder:
//!
//! ```
//! use archimate_svg_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dotted(Color::default(), 1.0);
//! let line = svg_element::Path::new().set("d", "M 0 0 L 10 0");
//! let line = archimate_svg_core::apply_stroke!(line, &stroke);
//! assert!(line.to_string().contains(r#"stroke-dasharray="1,3""#));
//! ```

use serde::Deserialize;

use crate::color::Color;

/// Stroke width of outlines, glyphs and connectors unless overridden.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Dash pattern of a stroke.
///
/// Deserializes from `"solid"`, `"dashed"` or `"dotted"`. Any other string is
/// kept as a raw `stroke-dasharray` value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// `5,5`, used by Influence and Flow.
    Dashed,
    /// `1,3`, used by Realization and Access.
    Dotted,
    Custom(String),
}

impl From<String> for StrokeStyle {
    fn from(value: String) -> Self {
        match value.trim() {
            "" | "solid" => Self::Solid,
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            _ => Self::Custom(value),
        }
    }
}

impl StrokeStyle {
    /// The `stroke-dasharray` value, `None` for a continuous line.
    pub fn dasharray(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("1,3"),
            Self::Custom(pattern) => Some(pattern),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn dashed(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    pub fn dotted(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dotted)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), DEFAULT_STROKE_WIDTH)
    }
}

/// Sets `stroke` and `stroke-width` on an SVG element, plus
/// `stroke-dasharray` for patterned strokes.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let elem = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());

        match stroke.style().dasharray() {
            Some(dasharray) => elem.set("stroke-dasharray", dasharray),
            None => elem,
        }
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        line_style: StrokeStyle,
    }

    fn parse_style(value: &str) -> StrokeStyle {
        toml::from_str::<Holder>(&format!("line_style = {value:?}"))
            .unwrap()
            .line_style
    }

    #[test]
    fn test_default_stroke_is_thin_black_solid() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), DEFAULT_STROKE_WIDTH);
        assert_eq!(stroke.color(), Color::new("black").unwrap());
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_named_patterns() {
        assert_eq!(StrokeStyle::Solid.dasharray(), None);
        assert_eq!(StrokeStyle::Dashed.dasharray(), Some("5,5"));
        assert_eq!(StrokeStyle::Dotted.dasharray(), Some("1,3"));
        assert_eq!(
            StrokeStyle::Custom("15,3,3,3".to_string()).dasharray(),
            Some("15,3,3,3")
        );
    }

    #[test]
    fn test_deserialize_from_string() {
        assert_eq!(parse_style("dotted"), StrokeStyle::Dotted);
        assert_eq!(parse_style("dashed"), StrokeStyle::Dashed);
        assert_eq!(parse_style(""), StrokeStyle::Solid);
        assert_eq!(parse_style("8,4"), StrokeStyle::Custom("8,4".to_string()));
    }

    #[test]
    fn test_set_color_keeps_pattern() {
        let mut stroke = StrokeDefinition::dashed(Color::default(), 2.0);
        stroke.set_color(Color::new("navy").unwrap());

        assert_eq!(stroke.color(), Color::new("navy").unwrap());
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(*stroke.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_patterned() {
        let solid = crate::apply_stroke!(svg_element::Path::new(), &StrokeDefinition::default());
        let rendered = solid.to_string();
        assert!(rendered.contains(r#"stroke="black""#));
        assert!(rendered.contains(r#"stroke-width="1""#));
        assert!(!rendered.contains("stroke-dasharray"));

        let dashed = crate::apply_stroke!(
            svg_element::Path::new(),
            &StrokeDefinition::dashed(Color::default(), 1.0)
        );
        assert!(dashed.to_string().contains(r#"stroke-dasharray="5,5""#));
    }
}
