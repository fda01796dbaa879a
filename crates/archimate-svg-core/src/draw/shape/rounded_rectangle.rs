use svg::{self, node::element as svg_element};

use super::{ShapeGenerator, ShapeStyle};
use crate::geometry::Size;

/// Rectangle with rounded corners, used for behavior elements such as
/// processes, functions, events and services.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedRectangleShape;

impl ShapeGenerator for RoundedRectangleShape {
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node> {
        let radius = style.corner_radius();
        let rect = svg_element::Rectangle::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", radius)
            .set("ry", radius);

        Box::new(paint_outline!(rect, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corner_radius() {
        let rendered = RoundedRectangleShape
            .outline(Size::new(120.0, 55.0), &ShapeStyle::default())
            .to_string();
        assert!(rendered.contains(r#"rx="10""#));
        assert!(rendered.contains(r#"ry="10""#));
    }

    #[test]
    fn test_custom_corner_radius() {
        let style = ShapeStyle::default().with_corner_radius(4.0);
        let rendered = RoundedRectangleShape
            .outline(Size::new(120.0, 55.0), &style)
            .to_string();
        assert!(rendered.contains(r#"rx="4""#));
        assert!(rendered.contains(r#"ry="4""#));
    }
}
