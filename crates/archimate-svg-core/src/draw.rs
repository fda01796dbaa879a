//! Drawing primitives for view rendering.
//!
//! Every generator in this module is a pure function from geometry and style
//! to an SVG node. Nothing here consults the model or the registry; the
//! `archimate-svg` crate decides which generator draws what.
//!
//! - [`ShapeGenerator`] - element outlines with their wrapped label
//! - [`IconGlyph`] - static icon artwork overlaid on a base shape
//! - [`ArrowHeadGenerator`] - connector end glyphs
//! - [`LineStyleGenerator`] - connector polylines
//! - [`TextLayout`] / [`TextDefinition`] - label wrapping and rendering

mod arrow_head;
mod icon;
mod line_style;
mod shape;
mod stroke;
mod text;
mod text_layout;

pub use arrow_head::{ArrowHeadGenerator, ArrowHeadKind};
pub use icon::{
    GlyphElement, GlyphFill, ICON_PADDING, ICON_SIZE, IconGlyph, MIN_SHAPE_SIZE_FOR_ICON,
};
pub use line_style::{LineStyle, LineStyleGenerator, draw_polyline, path_data};
pub use shape::{
    BaseShape, ChamferedRectangleShape, CircleShape, RectangleShape, RoundedRectangleShape,
    ShapeFragment, ShapeGenerator, ShapeStyle,
};
pub use stroke::{DEFAULT_STROKE_WIDTH, StrokeDefinition, StrokeStyle};
pub use text::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DominantBaseline, EscapedText, TextAnchor,
    TextDefinition, escape_text,
};
pub use text_layout::{
    AVERAGE_CHAR_WIDTH_RATIO, BOTTOM_PADDING, DEFAULT_ELLIPSIS, DEFAULT_LINE_HEIGHT, SIDE_PADDING,
    TOP_PADDING, TextBlock, TextLayout, VerticalAlign, average_char_width, estimate_width,
    measure_wrapped_text, truncate_lines, wrap_text,
};
