//! Text rendering for element and connector labels.
//!
//! A [`TextDefinition`] carries the font and color of a label. Combined with a
//! [`TextBlock`] from [`TextLayout`](super::TextLayout) it renders to an SVG
//! `<text>` element holding one `<tspan>` per line.

use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::Hash,
};

use svg::node::{Node, NodeDefaultHash, element as svg_element};

use crate::{color::Color, draw::TextBlock};

/// Default label font family.
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";

/// Default element label font size.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Replaces the five XML special characters with their entities.
///
/// ```
/// use archimate_svg_core::draw::escape_text;
///
/// assert_eq!(escape_text(r#"R&D <"core"> 'team'"#), "R&amp;D &lt;&quot;core&quot;&gt; &apos;team&apos;");
/// ```
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Character data node written inline with every special character escaped.
///
/// `svg::node::Text` leaves quotes and apostrophes as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedText {
    content: String,
}

impl EscapedText {
    pub fn new(content: &str) -> Self {
        Self {
            content: escape_text(content),
        }
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl Node for EscapedText {
    fn get_name(&self) -> &str {
        "text"
    }

    fn is_bare(&self) -> bool {
        true
    }
}

impl NodeDefaultHash for EscapedText {
    fn default_hash(&self, state: &mut DefaultHasher) {
        self.content.hash(state);
    }
}

/// Horizontal anchoring of every line relative to the block x-coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Which point of the glyph box sits on the line's y-coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DominantBaseline {
    /// The browser default, emitted as no attribute.
    Auto,
    Middle,
    /// Top of the glyph box, used by wrapped element labels.
    #[default]
    Hanging,
}

impl DominantBaseline {
    /// Returns the SVG dominant-baseline value, or None for the browser default
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Middle => Some("middle"),
            Self::Hanging => Some("hanging"),
        }
    }
}

/// Font and color settings for a label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    color: Color,
    anchor: TextAnchor,
    baseline: DominantBaseline,
}

impl TextDefinition {
    /// Creates a definition with default font, black text, centered and hanging.
    pub fn new() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::default(),
            anchor: TextAnchor::default(),
            baseline: DominantBaseline::default(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn baseline(&self) -> DominantBaseline {
        self.baseline
    }

    /// Sets the font family
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the text color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn set_baseline(&mut self, baseline: DominantBaseline) {
        self.baseline = baseline;
    }

    /// Renders `block` as a `<text>` element.
    ///
    /// The first `<tspan>` carries `dy="0"` and each following line moves down
    /// by the block line height. Line content is escaped with [`escape_text`].
    /// Returns `None` for an empty block.
    pub fn render(&self, block: &TextBlock) -> Option<svg_element::Text> {
        if block.is_empty() {
            return None;
        }

        let mut text = svg_element::Text::new("")
            .set("x", block.x())
            .set("y", block.y())
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("text-anchor", self.anchor.to_svg_value())
            .set("fill", self.color);

        if let Some(baseline) = self.baseline.to_svg_value() {
            text = text.set("dominant-baseline", baseline);
        }

        for (index, line) in block.lines().iter().enumerate() {
            let tspan = svg_element::TSpan::new("")
                .set("x", block.x())
                .set("dy", block.line_offset(index))
                .add(EscapedText::new(line));
            text = text.add(tspan);
        }

        Some(text)
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{draw::TextLayout, geometry::Point};

    #[test]
    fn test_text_definition_defaults() {
        let definition = TextDefinition::default();
        assert_eq!(definition.font_family(), "Arial, sans-serif");
        assert_eq!(definition.font_size(), 12.0);
        assert_eq!(definition.color().to_string(), "black");
        assert_eq!(definition.anchor(), TextAnchor::Middle);
        assert_eq!(definition.baseline(), DominantBaseline::Hanging);
    }

    #[test]
    fn test_text_anchor_values() {
        assert_eq!(TextAnchor::Start.to_svg_value(), "start");
        assert_eq!(TextAnchor::Middle.to_svg_value(), "middle");
        assert_eq!(TextAnchor::End.to_svg_value(), "end");
        assert_eq!(DominantBaseline::Auto.to_svg_value(), None);
    }

    #[test]
    fn test_render_lines_as_tspans() {
        let block = TextLayout::new(Point::new(50.0, 0.0))
            .with_max_width(30.0)
            .with_vertical_align(crate::draw::VerticalAlign::Top)
            .layout("one two", 10.0);
        let rendered = TextDefinition::default().render(&block).unwrap().to_string();

        assert!(rendered.starts_with("<text"));
        assert!(rendered.contains(r#"font-family="Arial, sans-serif""#));
        assert!(rendered.contains(r#"dominant-baseline="hanging""#));
        assert!(rendered.contains(r#"text-anchor="middle""#));
        assert_eq!(rendered.matches("<tspan").count(), 2);
        assert!(rendered.contains(r#"dy="0""#));
        assert!(rendered.contains(r#"dy="12""#));
        assert!(rendered.contains(">one<"));
        assert!(rendered.contains(">two<"));
    }

    #[test]
    fn test_render_escapes_content() {
        let block = TextLayout::new(Point::default()).layout("R&D <core>", 12.0);
        let rendered = TextDefinition::default().render(&block).unwrap().to_string();

        assert!(rendered.contains("R&amp;D &lt;core&gt;"));
        assert!(!rendered.contains("<core>"));
    }

    #[test]
    fn test_render_escapes_quotes_once() {
        let block = TextLayout::new(Point::default()).layout(r#"say "hi" 'x' &amp;"#, 12.0);
        let rendered = TextDefinition::default().render(&block).unwrap().to_string();

        assert!(rendered.contains(">say &quot;hi&quot; &apos;x&apos; &amp;amp;</tspan>"));
    }

    #[test]
    fn test_escape_text_plain_passthrough() {
        assert_eq!(escape_text("Customer Portal"), "Customer Portal");
        assert_eq!(escape_text(""), "");
        assert_eq!(EscapedText::new("a<b").to_string(), "a&lt;b");
    }

    #[test]
    fn test_render_auto_baseline_omits_attribute() {
        let mut definition = TextDefinition::default();
        definition.set_baseline(DominantBaseline::Auto);
        let block = TextLayout::new(Point::default()).layout("label", 10.0);
        let rendered = definition.render(&block).unwrap().to_string();
        assert!(!rendered.contains("dominant-baseline"));
    }

    #[test]
    fn test_render_empty_block() {
        let block = TextLayout::new(Point::default()).layout("   ", 12.0);
        assert!(TextDefinition::default().render(&block).is_none());
    }
}
