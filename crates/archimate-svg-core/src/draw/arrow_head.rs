//! Connector end glyphs.
//!
//! Every glyph is drawn with its tip at the local origin and its body
//! extending along the negative x-axis, inside a group translated to the
//! connector end and rotated to the direction of the adjacent segment.

use std::fmt;

use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{DEFAULT_STROKE_WIDTH, StrokeDefinition},
    geometry::Point,
};

/// Draws an arrowhead at a connector end.
pub trait ArrowHeadGenerator: fmt::Debug {
    /// Returns the length of the glyph along the connector.
    ///
    /// A connector end is retracted by this amount so the line stops where the
    /// glyph begins.
    fn size(&self) -> f32;

    /// Draws the glyph with its tip at `tip`, rotated by `angle` degrees.
    fn generate(&self, tip: Point, angle: f32, color: Color) -> Box<dyn svg::Node>;
}

/// The glyphs used by ArchiMate relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowHeadKind {
    /// Filled triangle
    Standard,
    /// White triangle
    Outline,
    /// Two strokes meeting at the tip
    Open,
    /// White diamond
    Diamond,
    FilledDiamond,
    /// White circle
    Circle,
    FilledCircle,
}

impl ArrowHeadKind {
    pub const ALL: [ArrowHeadKind; 7] = [
        Self::Standard,
        Self::Outline,
        Self::Open,
        Self::Diamond,
        Self::FilledDiamond,
        Self::Circle,
        Self::FilledCircle,
    ];

    /// Returns the registry key of this glyph
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Outline => "outline",
            Self::Open => "open",
            Self::Diamond => "diamond",
            Self::FilledDiamond => "filled-diamond",
            Self::Circle => "circle",
            Self::FilledCircle => "filled-circle",
        }
    }

    /// Returns the fill of a closed glyph drawn with `color`
    fn fill(self, color: Color) -> Color {
        match self {
            Self::Standard | Self::FilledDiamond | Self::FilledCircle | Self::Open => color,
            Self::Outline | Self::Diamond | Self::Circle => Color::white(),
        }
    }

    fn glyph(self, color: Color) -> Box<dyn svg::Node> {
        let size = self.size();
        let stroke = StrokeDefinition::new(color, DEFAULT_STROKE_WIDTH);

        match self {
            Self::Standard | Self::Outline => {
                let points = format!("0,0 {},{} {},{}", -size, -size / 2.0, -size, size / 2.0);
                let polygon = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", self.fill(color));
                Box::new(crate::apply_stroke!(polygon, &stroke))
            }
            Self::Open => {
                let data = format!(
                    "M 0,0 L {},{} M 0,0 L {},{}",
                    -size,
                    -size / 2.0,
                    -size,
                    size / 2.0
                );
                let path = svg_element::Path::new().set("d", data).set("fill", "none");
                Box::new(crate::apply_stroke!(path, &stroke))
            }
            Self::Diamond | Self::FilledDiamond => {
                let points = format!(
                    "0,0 {},{} {},0 {},{}",
                    -size / 2.0,
                    -size / 3.0,
                    -size,
                    -size / 2.0,
                    size / 3.0
                );
                let polygon = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", self.fill(color));
                Box::new(crate::apply_stroke!(polygon, &stroke))
            }
            Self::Circle | Self::FilledCircle => {
                let circle = svg_element::Circle::new()
                    .set("cx", -size / 2.0)
                    .set("cy", 0)
                    .set("r", size / 2.0)
                    .set("fill", self.fill(color));
                Box::new(crate::apply_stroke!(circle, &stroke))
            }
        }
    }
}

impl ArrowHeadGenerator for ArrowHeadKind {
    fn size(&self) -> f32 {
        match self {
            Self::Standard | Self::Outline | Self::Open => 10.0,
            Self::Diamond | Self::FilledDiamond => 15.0,
            Self::Circle | Self::FilledCircle => 6.0,
        }
    }

    fn generate(&self, tip: Point, angle: f32, color: Color) -> Box<dyn svg::Node> {
        let transform = format!("translate({}, {}) rotate({})", tip.x(), tip.y(), angle);
        Box::new(
            svg_element::Group::new()
                .set("transform", transform)
                .add(self.glyph(color)),
        )
    }
}

impl fmt::Display for ArrowHeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
