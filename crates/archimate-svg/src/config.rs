//! Render options.
//!
//! [`RenderOptions`] controls the canvas, the default font and the color
//! palette used for elements without explicit style overrides. Options
//! implement [`serde::Deserialize`] and can be loaded from TOML; every field
//! is optional and falls back to its default.
//!
//! # Example
//!
//! ```
//! # use archimate_svg::config::RenderOptions;
//! let options = RenderOptions::from_toml_str(
//!     r##"
//!     width = 1024
//!     font_size = 14
//!
//!     [palette]
//!     business = "#FFFFB5"
//!     "##,
//! )
//! .unwrap();
//!
//! assert_eq!(options.width(), 1024.0);
//! assert_eq!(options.height(), 600.0);
//! ```

use std::{fs, path::Path};

use serde::Deserialize;

use archimate_svg_core::{
    color::Color,
    draw::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, ShapeStyle},
    semantic::Layer,
};

use crate::error::Result;

fn palette_color(value: &str) -> Color {
    Color::new(value).expect("palette defaults are valid CSS colors")
}

/// Default colors per ArchiMate layer plus the document colors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    application: Color,
    business: Color,
    technology: Color,
    motivation: Color,
    implementation: Color,
    strategy: Color,
    physical: Color,
    background: Color,
    stroke: Color,
    text: Color,
}

impl ColorPalette {
    pub fn application(&self) -> Color {
        self.application
    }

    pub fn business(&self) -> Color {
        self.business
    }

    pub fn technology(&self) -> Color {
        self.technology
    }

    pub fn motivation(&self) -> Color {
        self.motivation
    }

    pub fn implementation(&self) -> Color {
        self.implementation
    }

    pub fn strategy(&self) -> Color {
        self.strategy
    }

    pub fn physical(&self) -> Color {
        self.physical
    }

    /// Returns the document background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the outline and connector color
    pub fn stroke(&self) -> Color {
        self.stroke
    }

    /// Returns the label color
    pub fn text(&self) -> Color {
        self.text
    }

    /// Returns the default fill of elements in `layer`.
    ///
    /// Elements outside the colored layers use the background color.
    pub fn layer_fill(&self, layer: Layer) -> Color {
        match layer {
            Layer::Business => self.business,
            Layer::Application => self.application,
            Layer::Technology => self.technology,
            Layer::Physical => self.physical,
            Layer::Motivation => self.motivation,
            Layer::Implementation => self.implementation,
            Layer::Strategy => self.strategy,
            Layer::Other => self.background,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    pub fn with_text(mut self, color: Color) -> Self {
        self.text = color;
        self
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            application: palette_color("#85C1E9"),
            business: palette_color("#F9E79F"),
            technology: palette_color("#ABEBC6"),
            motivation: palette_color("#D7BDE2"),
            implementation: palette_color("#F5CBA7"),
            strategy: palette_color("#F1948A"),
            physical: palette_color("#D5DBDB"),
            background: palette_color("#FFFFFF"),
            stroke: palette_color("#000000"),
            text: palette_color("#000000"),
        }
    }
}

/// Canvas, font and palette settings for rendering a view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    width: f32,
    height: f32,
    padding: f32,
    font_family: String,
    font_size: f32,
    /// Size the canvas to the view content instead of `width` × `height`.
    auto_size: bool,
    palette: ColorPalette,
}

impl RenderOptions {
    /// Parses options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) when the document is not
    /// valid TOML, a value has the wrong type or a color cannot be parsed.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML options file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the file cannot be read and
    /// [`Error::Config`](crate::Error::Config) when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Returns the canvas width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the canvas height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the margin added around the content of auto-sized views
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the element label font size
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the default shape style of an element in `layer`.
    pub fn shape_style(&self, layer: Layer) -> ShapeStyle {
        ShapeStyle::new()
            .with_fill_color(self.palette.layer_fill(layer))
            .with_stroke_color(self.palette.stroke)
            .with_text_color(self.palette.text)
            .with_font_family(&self.font_family)
            .with_font_size(self.font_size)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 20.0,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            auto_size: false,
            palette: ColorPalette::default(),
        }
    }
}
