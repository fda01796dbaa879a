use svg::{self, node::element as svg_element};

use super::{ShapeGenerator, ShapeStyle};
use crate::geometry::{Point, Size};

/// Rectangle with straight corner cuts, used for motivation elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChamferedRectangleShape;

impl ChamferedRectangleShape {
    /// Returns the eight outline points, clockwise from the top edge.
    fn points(size: Size, chamfer: f32) -> [Point; 8] {
        let (w, h, c) = (size.width(), size.height(), chamfer);
        [
            Point::new(c, 0.0),
            Point::new(w - c, 0.0),
            Point::new(w, c),
            Point::new(w, h - c),
            Point::new(w - c, h),
            Point::new(c, h),
            Point::new(0.0, h - c),
            Point::new(0.0, c),
        ]
    }

    fn path_data(size: Size, chamfer: f32) -> String {
        let points = Self::points(size, chamfer);
        let mut data = String::new();
        for (index, point) in points.iter().enumerate() {
            let command = if index == 0 { "M" } else { " L" };
            data.push_str(&format!("{command} {},{}", point.x(), point.y()));
        }
        data.push_str(" Z");
        data
    }
}

impl ShapeGenerator for ChamferedRectangleShape {
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node> {
        let path = svg_element::Path::new().set("d", Self::path_data(size, style.chamfer_size()));

        Box::new(paint_outline!(path, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chamfer_path_data() {
        let data = ChamferedRectangleShape::path_data(Size::new(100.0, 50.0), 10.0);
        assert_eq!(
            data,
            "M 10,0 L 90,0 L 100,10 L 100,40 L 90,50 L 10,50 L 0,40 L 0,10 Z"
        );
    }

    #[test]
    fn test_chamfer_outline_uses_style() {
        let style = ShapeStyle::default().with_chamfer_size(5.0);
        let rendered = ChamferedRectangleShape
            .outline(Size::new(40.0, 20.0), &style)
            .to_string();
        assert!(rendered.starts_with("<path"));
        assert!(rendered.contains("M 5,0 L 35,0 L 40,5"));
        assert!(rendered.contains(r#"fill="white""#));
    }
}
