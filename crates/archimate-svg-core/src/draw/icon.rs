//! Static icon artwork and its placement on element shapes.
//!
//! An [`IconGlyph`] is a small drawing made of path, rect and circle
//! primitives in its own coordinate space. When overlaid on a shape it is
//! scaled uniformly so that its larger side measures [`ICON_SIZE`] and is
//! placed in the top-right corner, [`ICON_PADDING`] away from both edges.

use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Distance between the icon and the top and right edges of its shape.
pub const ICON_PADDING: f32 = 5.0;

/// Size of the larger icon side after scaling.
pub const ICON_SIZE: f32 = 15.0;

/// Shapes narrower or shorter than this are drawn without an icon.
pub const MIN_SHAPE_SIZE_FOR_ICON: f32 = 10.0;

/// Fill policy of one glyph primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphFill {
    /// Painted with the fill color of the shape the icon sits on.
    Shape,
    /// Explicitly unfilled; kept as `fill="none"` whatever the shape color.
    None,
}

impl GlyphFill {
    fn resolve(self, shape_fill: Color) -> svg::node::Value {
        match self {
            Self::Shape => shape_fill.into(),
            Self::None => "none".into(),
        }
    }
}

/// One drawing primitive of a glyph, in glyph coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphElement {
    Path {
        d: &'static str,
        fill: GlyphFill,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: GlyphFill,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: GlyphFill,
    },
}

impl GlyphElement {
    fn render(&self, shape_fill: Color) -> Box<dyn svg::Node> {
        match *self {
            Self::Path { d, fill } => Box::new(
                svg_element::Path::new()
                    .set("d", d)
                    .set("fill", fill.resolve(shape_fill)),
            ),
            Self::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => Box::new(
                svg_element::Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", fill.resolve(shape_fill)),
            ),
            Self::Circle { cx, cy, r, fill } => Box::new(
                svg_element::Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r)
                    .set("fill", fill.resolve(shape_fill)),
            ),
        }
    }
}

/// Named icon artwork.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGlyph {
    name: &'static str,
    width: f32,
    height: f32,
    stroke_width: f32,
    elements: &'static [GlyphElement],
}

impl IconGlyph {
    pub const fn new(
        name: &'static str,
        width: f32,
        height: f32,
        stroke_width: f32,
        elements: &'static [GlyphElement],
    ) -> Self {
        Self {
            name,
            width,
            height,
            stroke_width,
            elements,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn elements(&self) -> &'static [GlyphElement] {
        self.elements
    }

    /// Returns the uniform scale factor that brings the larger side to [`ICON_SIZE`].
    pub fn scale(&self) -> f32 {
        ICON_SIZE / self.width.max(self.height)
    }

    /// Returns the top-left corner of the scaled icon inside a shape of `container` size.
    pub fn position(&self, container: Size) -> Point {
        let scaled_width = self.width * self.scale();
        Point::new(container.width() - scaled_width - ICON_PADDING, ICON_PADDING)
    }

    /// Renders the glyph primitives in glyph coordinates.
    pub fn render(&self, fill: Color, stroke: Color) -> svg_element::Group {
        self.elements.iter().fold(
            svg_element::Group::new()
                .set("stroke", stroke)
                .set("stroke-width", self.stroke_width),
            |group, element| group.add(element.render(fill)),
        )
    }

    /// Renders the glyph scaled and positioned for a shape of `container` size.
    ///
    /// Returns `None` when either side of the container is below
    /// [`MIN_SHAPE_SIZE_FOR_ICON`] or the glyph has no positive extent.
    pub fn place(&self, container: Size, fill: Color, stroke: Color) -> Option<svg_element::Group> {
        if container.width() < MIN_SHAPE_SIZE_FOR_ICON
            || container.height() < MIN_SHAPE_SIZE_FOR_ICON
        {
            return None;
        }
        let scale = self.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }

        let position = self.position(container);
        let transform = format!(
            "translate({}, {}) scale({})",
            position.x(),
            position.y(),
            scale
        );
        Some(
            svg_element::Group::new()
                .set("transform", transform)
                .add(self.render(fill, stroke)),
        )
    }
}
