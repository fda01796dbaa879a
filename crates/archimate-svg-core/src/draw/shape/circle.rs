use svg::{self, node::element as svg_element};

use super::{ShapeGenerator, ShapeStyle};
use crate::geometry::Size;

/// Circle inscribed in the element bounds, used for junctions.
///
/// The radius is half the smaller dimension and the center is the center of
/// the bounds, so non-square bounds leave empty space on the longer axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleShape;

impl ShapeGenerator for CircleShape {
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node> {
        let circle = svg_element::Circle::new()
            .set("cx", size.width() / 2.0)
            .set("cy", size.height() / 2.0)
            .set("r", size.min_dimension() / 2.0);

        Box::new(paint_outline!(circle, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_inscribed() {
        let rendered = CircleShape
            .outline(Size::new(30.0, 20.0), &ShapeStyle::default())
            .to_string();
        assert!(rendered.starts_with("<circle"));
        assert!(rendered.contains(r#"cx="15""#));
        assert!(rendered.contains(r#"cy="10""#));
        assert!(rendered.contains(r#"r="10""#));
    }

    #[test]
    fn test_circle_label_centered() {
        let block = CircleShape
            .label_layout(Size::new(40.0, 40.0), &ShapeStyle::default())
            .layout("J", 10.0);
        assert_eq!(block.x(), 20.0);
        assert_eq!(block.y(), 14.0);
    }
}
