use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use archimate_svg_core::{
    color::Color, draw::EscapedText, geometry::Size, semantic::ViewIdentifier,
};

use crate::{config::RenderOptions, error::Result};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Document assembler for one canvas size and background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svg {
    size: Size,
    background: Color,
}

impl Svg {
    pub fn new(size: Size, background: Color) -> Self {
        Self { size, background }
    }

    /// Creates an assembler for the canvas configured in `options`.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(
            Size::new(options.width(), options.height()),
            options.palette().background(),
        )
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Wraps `fragments` into a standalone document.
    ///
    /// The root carries the SVG namespace, the canvas size and a matching
    /// `viewBox`. A full-canvas background rectangle is painted first and the
    /// fragments follow in the given order.
    pub fn document<I>(&self, fragments: I) -> Document
    where
        I: IntoIterator<Item = Box<dyn svg::Node>>,
    {
        let width = self.size.width();
        let height = self.size.height();

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", self.background);

        let doc = fragments.into_iter().fold(
            Document::new()
                .set("xmlns", SVG_NAMESPACE)
                .set("width", width)
                .set("height", height)
                .set("viewBox", (0.0, 0.0, width, height))
                .add(background),
            |doc, fragment| doc.add(fragment),
        );

        debug!(width, height; "SVG document assembled");
        doc
    }

    /// Builds the document rendered in place of a view that does not exist.
    pub fn placeholder(options: &RenderOptions, identifier: &ViewIdentifier) -> Document {
        let message = svg_element::Text::new("")
            .set("x", "50%")
            .set("y", "50%")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", options.font_family())
            .set("font-size", options.font_size())
            .set("fill", options.palette().text())
            .add(EscapedText::new(&format!("View not found: {identifier}")));

        let fragment: Box<dyn svg::Node> = Box::new(message);
        Self::from_options(options).document([fragment])
    }

    /// Writes `doc` to the file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the file cannot be created
    /// or written.
    pub fn write_document(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let f = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(err.into());
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(err.into());
        }

        Ok(())
    }
}
