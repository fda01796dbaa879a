//! SVG document assembly and output.
//!
//! Rendered fragments are wrapped into a standalone document by [`Svg`], which
//! also produces the placeholder shown for views that cannot be found and
//! writes documents to disk.

pub mod svg;

pub use self::svg::Svg;
