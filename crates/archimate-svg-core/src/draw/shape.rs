//! Element shape generators.
//!
//! A [`ShapeGenerator`] draws one outline primitive sized to an element's
//! bounds and places the element label inside it. The result is a
//! [`ShapeFragment`]: a set of structured nodes (outline, optional icon,
//! optional label) that serializes once into a group translated to the
//! element's top-left corner.
//!
//! Four base generators are provided, one per [`BaseShape`]:
//!
//! | Base shape | Outline primitive |
//! |------------|-------------------|
//! | `rectangle` | `<rect>` with square corners |
//! | `rounded-rectangle` | `<rect>` with `rx`/`ry` set to the corner radius |
//! | `chamfered-rectangle` | 8-point `<path>` cutting every corner |
//! | `circle` | `<circle>` inscribed in the bounds |
//!
//! Zero or negative sizes are drawn as-is; no generator rejects degenerate
//! geometry.

use std::{fmt, rc::Rc, str::FromStr};

use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{SIDE_PADDING, StrokeDefinition, TextDefinition, TextLayout, VerticalAlign},
    geometry::{Bounds, Point, Size},
    semantic::ElementStyle,
};

/// Sets the fill, stroke and opacity of an outline primitive.
macro_rules! paint_outline {
    ($element:expr, $style:expr) => {{
        let elem = $element
            .set("fill", $style.fill_color())
            .set("opacity", $style.opacity());
        crate::apply_stroke!(elem, $style.stroke())
    }};
}

mod chamfered_rectangle;
mod circle;
mod rectangle;
mod rounded_rectangle;

pub use chamfered_rectangle::ChamferedRectangleShape;
pub use circle::CircleShape;
pub use rectangle::RectangleShape;
pub use rounded_rectangle::RoundedRectangleShape;

/// Default corner radius of rounded rectangles.
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

/// Default corner cut of chamfered rectangles.
pub const DEFAULT_CHAMFER_SIZE: f32 = 10.0;

/// Resolved visual settings of one element shape.
///
/// Unlike [`ElementStyle`], every field carries a value. A style is usually
/// built from defaults and then overridden with [`ShapeStyle::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
    opacity: f32,
    corner_radius: f32,
    chamfer_size: f32,
    is_compound: bool,
}

impl ShapeStyle {
    /// Creates a style with a white fill, a 1px black stroke and default text.
    pub fn new() -> Self {
        Self {
            fill_color: Color::white(),
            stroke: StrokeDefinition::default(),
            text: TextDefinition::default(),
            opacity: 1.0,
            corner_radius: DEFAULT_CORNER_RADIUS,
            chamfer_size: DEFAULT_CHAMFER_SIZE,
            is_compound: false,
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn chamfer_size(&self) -> f32 {
        self.chamfer_size
    }

    /// Returns true when the element contains other elements of its view
    pub fn is_compound(&self) -> bool {
        self.is_compound
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke.set_color(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text.set_color(color);
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.text.set_font_family(family);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.text.set_font_size(size);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_chamfer_size(mut self, size: f32) -> Self {
        self.chamfer_size = size;
        self
    }

    pub fn with_compound(mut self, is_compound: bool) -> Self {
        self.is_compound = is_compound;
        self
    }

    /// Applies every value set in `overrides` on top of this style.
    ///
    /// The compound flag is taken from `overrides` unconditionally.
    pub fn apply(mut self, overrides: &ElementStyle) -> Self {
        if let Some(color) = overrides.fill_color() {
            self.fill_color = color;
        }
        if let Some(color) = overrides.stroke_color() {
            self.stroke.set_color(color);
        }
        if let Some(color) = overrides.text_color() {
            self.text.set_color(color);
        }
        if let Some(family) = overrides.font_family() {
            self.text.set_font_family(family);
        }
        if let Some(size) = overrides.font_size() {
            self.text.set_font_size(size);
        }
        if let Some(opacity) = overrides.opacity() {
            self.opacity = opacity;
        }
        if let Some(radius) = overrides.corner_radius() {
            self.corner_radius = radius;
        }
        if let Some(size) = overrides.chamfer_size() {
            self.chamfer_size = size;
        }
        self.is_compound = overrides.is_compound();
        self
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// A drawn element shape, kept as separate nodes until it is serialized.
#[derive(Debug, Clone)]
pub struct ShapeFragment {
    origin: Point,
    outline: Box<dyn svg::Node>,
    icon: Option<svg_element::Group>,
    label: Option<svg_element::Text>,
}

impl ShapeFragment {
    /// Creates a fragment placed at `origin` with the given outline.
    pub fn new(origin: Point, outline: Box<dyn svg::Node>) -> Self {
        Self {
            origin,
            outline,
            icon: None,
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<svg_element::Text>) -> Self {
        self.label = label;
        self
    }

    pub fn with_icon(mut self, icon: svg_element::Group) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Returns the top-left corner the fragment is translated to
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn outline(&self) -> &dyn svg::Node {
        self.outline.as_ref()
    }

    pub fn icon(&self) -> Option<&svg_element::Group> {
        self.icon.as_ref()
    }

    pub fn label(&self) -> Option<&svg_element::Text> {
        self.label.as_ref()
    }

    /// Serializes the fragment as `<g transform="translate(x, y)">`.
    ///
    /// Children are emitted in paint order: outline, icon, label.
    pub fn into_group(self) -> svg_element::Group {
        let mut group = svg_element::Group::new().set(
            "transform",
            format!("translate({}, {})", self.origin.x(), self.origin.y()),
        );
        group = group.add(self.outline);
        if let Some(icon) = self.icon {
            group = group.add(icon);
        }
        if let Some(label) = self.label {
            group = group.add(label);
        }
        group
    }
}

impl From<ShapeFragment> for Box<dyn svg::Node> {
    fn from(fragment: ShapeFragment) -> Self {
        Box::new(fragment.into_group())
    }
}

/// Draws an element as an outline plus a wrapped label.
///
/// Implementors only provide the outline; label placement and fragment
/// assembly have default implementations shared by every base shape.
pub trait ShapeGenerator: fmt::Debug {
    /// Draws the outline primitive in local coordinates, with the top-left
    /// corner of the bounds at the origin.
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node>;

    /// Returns the label layout for a shape of `size`.
    ///
    /// The label is centered horizontally, wrapped at the width minus the
    /// side padding on both sides and aligned within the full height. Compound
    /// elements get a top-aligned label.
    fn label_layout(&self, size: Size, style: &ShapeStyle) -> TextLayout {
        TextLayout::new(Point::new(size.width() / 2.0, 0.0))
            .with_max_width(size.width() - SIDE_PADDING * 2.0)
            .with_max_height(size.height())
            .with_vertical_align(VerticalAlign::Middle)
            .with_compound(style.is_compound())
    }

    /// Draws the element at `bounds` with `label`.
    fn generate(&self, bounds: Bounds, label: &str, style: &ShapeStyle) -> ShapeFragment {
        let size = bounds.to_size();
        let block = self
            .label_layout(size, style)
            .layout(label, style.text().font_size());

        ShapeFragment::new(bounds.min_point(), self.outline(size, style))
            .with_label(style.text().render(&block))
    }
}

/// The primitive outlines an element can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseShape {
    Rectangle,
    RoundedRectangle,
    ChamferedRectangle,
    Circle,
}

impl BaseShape {
    pub const ALL: [BaseShape; 4] = [
        Self::Rectangle,
        Self::RoundedRectangle,
        Self::ChamferedRectangle,
        Self::Circle,
    ];

    /// Returns the registry key of this base shape
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::RoundedRectangle => "rounded-rectangle",
            Self::ChamferedRectangle => "chamfered-rectangle",
            Self::Circle => "circle",
        }
    }

    /// Returns a new generator drawing this base shape
    pub fn generator(self) -> Rc<dyn ShapeGenerator> {
        match self {
            Self::Rectangle => Rc::new(RectangleShape),
            Self::RoundedRectangle => Rc::new(RoundedRectangleShape),
            Self::ChamferedRectangle => Rc::new(ChamferedRectangleShape),
            Self::Circle => Rc::new(CircleShape),
        }
    }
}

impl FromStr for BaseShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| format!("Unknown base shape: {s}"))
    }
}

impl fmt::Display for BaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
