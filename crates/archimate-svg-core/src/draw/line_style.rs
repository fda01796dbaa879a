//! Connector polylines.

use std::fmt;

use svg::{self, node::element as svg_element};

use crate::{
    draw::{StrokeDefinition, StrokeStyle},
    geometry::Point,
};

/// Draws the line of a connector through a list of points.
pub trait LineStyleGenerator: fmt::Debug {
    /// Draws an unfilled polyline through `points` with the color and width of `stroke`.
    fn generate(&self, points: &[Point], stroke: &StrokeDefinition) -> Box<dyn svg::Node>;
}

/// Dash patterns of the default line styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub const ALL: [LineStyle; 3] = [Self::Solid, Self::Dashed, Self::Dotted];

    /// Returns the registry key of this line style
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }

    pub fn stroke_style(self) -> StrokeStyle {
        match self {
            Self::Solid => StrokeStyle::Solid,
            Self::Dashed => StrokeStyle::Dashed,
            Self::Dotted => StrokeStyle::Dotted,
        }
    }
}

impl LineStyleGenerator for LineStyle {
    fn generate(&self, points: &[Point], stroke: &StrokeDefinition) -> Box<dyn svg::Node> {
        let stroke = stroke.clone().with_style(self.stroke_style());
        Box::new(draw_polyline(points, &stroke))
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `M x y L x y ...` path data through `points`.
///
/// # Examples
///
/// ```
/// use archimate_svg_core::{draw::path_data, geometry::Point};
///
/// let data = path_data(&[Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);
/// assert_eq!(data, "M 0 0 L 10 5");
/// ```
pub fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let command = if index == 0 { "M" } else { "L" };
            format!("{command} {} {}", point.x(), point.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draws an unfilled path through `points` with every attribute of `stroke`.
pub fn draw_polyline(points: &[Point], stroke: &StrokeDefinition) -> svg_element::Path {
    let path = svg_element::Path::new()
        .set("d", path_data(points))
        .set("fill", "none");
    crate::apply_stroke!(path, stroke)
}
