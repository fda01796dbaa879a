use svg::{self, node::element as svg_element};

use super::{ShapeGenerator, ShapeStyle};
use crate::geometry::Size;

/// Plain rectangle with square corners.
///
/// This is the fallback shape for element types without a dedicated mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleShape;

impl ShapeGenerator for RectangleShape {
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node> {
        let rect = svg_element::Rectangle::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", 0)
            .set("ry", 0);

        Box::new(paint_outline!(rect, style))
    }
}
