//! Label wrapping and vertical placement.
//!
//! Labels are measured with an approximate average character width of
//! `0.6 × font size` instead of real glyph metrics, so layout is identical on
//! every platform and needs no font files.
//!
//! # Overview
//!
//! - [`wrap_text`] - greedy word wrap, hard-splitting words that do not fit
//! - [`truncate_lines`] - cap the number of lines and append an ellipsis
//! - [`TextLayout`] - wrapping plus vertical alignment inside a container, producing a [`TextBlock`]
//! - [`measure_wrapped_text`] - estimated size of a wrapped label
//!
//! # Examples
//!
//! ```
//! use archimate_svg_core::draw::{TextLayout, VerticalAlign};
//! use archimate_svg_core::geometry::Point;
//!
//! let block = TextLayout::new(Point::new(50.0, 0.0))
//!     .with_max_width(90.0)
//!     .with_max_height(60.0)
//!     .with_vertical_align(VerticalAlign::Top)
//!     .layout("Customer Relationship Management", 12.0);
//!
//! assert_eq!(block.lines().len(), 3);
//! assert_eq!(block.y(), 3.0);
//! ```

use log::trace;

use crate::geometry::{Point, Size};

/// Ratio between the estimated average glyph width and the font size.
pub const AVERAGE_CHAR_WIDTH_RATIO: f32 = 0.6;

/// Default line height multiplier applied to the font size.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// Gap between the container top edge and the first line when top aligned.
pub const TOP_PADDING: f32 = 3.0;

/// Gap between the container bottom edge and the last line when bottom aligned.
pub const BOTTOM_PADDING: f32 = 10.0;

/// Horizontal gap between a label and each side of its container.
pub const SIDE_PADDING: f32 = 5.0;

/// Suffix appended to the last retained line when lines are dropped.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Returns the estimated width of one character at `font_size`.
pub fn average_char_width(font_size: f32) -> f32 {
    font_size * AVERAGE_CHAR_WIDTH_RATIO
}

/// Returns the estimated rendered width of `text` at `font_size`.
pub fn estimate_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * average_char_width(font_size)
}

/// Greedily wraps `text` into lines no wider than `max_width`.
///
/// Words are separated by any whitespace and joined by a single space. A word
/// wider than `max_width` on its own is hard-split into chunks of
/// `max(1, floor(max_width / average_char_width))` characters, and the word
/// after it starts a new line. Text that already fits is returned as a
/// single trimmed line with its inner spacing intact. Empty or whitespace-only
/// text produces no lines.
///
/// # Examples
///
/// ```
/// use archimate_svg_core::draw::wrap_text;
///
/// let lines = wrap_text("Order Handling Process", 60.0, 10.0);
/// assert_eq!(lines, vec!["Order", "Handling", "Process"]);
/// ```
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if estimate_width(trimmed, font_size) <= max_width {
        return vec![trimmed.to_string()];
    }

    let char_width = average_char_width(font_size);
    let chunk_len = chunk_length(max_width, char_width);
    let fits = |candidate: &str| estimate_width(candidate, font_size) <= max_width;

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in trimmed.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            let chars: Vec<char> = word.chars().collect();
            lines.extend(chars.chunks(chunk_len).map(|chunk| chunk.iter().collect::<String>()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn chunk_length(max_width: f32, char_width: f32) -> usize {
    let per_line = (max_width / char_width).floor();
    if per_line.is_finite() && per_line >= 1.0 {
        per_line as usize
    } else {
        1
    }
}

/// Caps `lines` at `max_lines`, marking the cut with `ellipsis`.
///
/// When lines are dropped, the last retained line loses as many trailing
/// characters as the ellipsis is long before the ellipsis is appended. Nothing
/// changes when the lines already fit.
///
/// # Examples
///
/// ```
/// use archimate_svg_core::draw::truncate_lines;
///
/// let lines = vec!["first line".to_string(), "second".to_string(), "third".to_string()];
/// let truncated = truncate_lines(lines, 2, "...");
/// assert_eq!(truncated, vec!["first line", "sec..."]);
/// ```
pub fn truncate_lines(mut lines: Vec<String>, max_lines: usize, ellipsis: &str) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let keep = last
            .chars()
            .count()
            .saturating_sub(ellipsis.chars().count());
        let mut shortened: String = last.chars().take(keep).collect();
        shortened.push_str(ellipsis);
        *last = shortened;
    }
    lines
}

/// Vertical placement of a text block inside its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Anchor the first line [`TOP_PADDING`] below the container top.
    Top,
    /// Center the whole block within the container height.
    #[default]
    Middle,
    /// Anchor the last line [`BOTTOM_PADDING`] above the container bottom.
    Bottom,
}

/// Wrapping and alignment settings for a single label.
///
/// The anchor is the point the block is aligned against: its x-coordinate is
/// used for every line and its y-coordinate is the container top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    anchor: Point,
    max_width: Option<f32>,
    max_height: Option<f32>,
    max_lines: Option<usize>,
    vertical_align: VerticalAlign,
    line_height: f32,
    is_compound: bool,
    ellipsis: String,
}

impl TextLayout {
    /// Creates a layout anchored at `anchor` with no wrapping limits.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            max_width: None,
            max_height: None,
            max_lines: None,
            vertical_align: VerticalAlign::default(),
            line_height: DEFAULT_LINE_HEIGHT,
            is_compound: false,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }

    /// Wraps lines at `max_width`.
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Sets the container height used for middle and bottom alignment.
    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Caps the number of lines. Zero means no cap.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = (max_lines > 0).then_some(max_lines);
        self
    }

    pub fn with_vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.vertical_align = vertical_align;
        self
    }

    /// Sets the line height multiplier.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Marks the owning element as compound, which forces top alignment.
    pub fn with_compound(mut self, is_compound: bool) -> Self {
        self.is_compound = is_compound;
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Returns the alignment that applies, taking the compound flag into account.
    pub fn effective_align(&self) -> VerticalAlign {
        if self.is_compound {
            VerticalAlign::Top
        } else {
            self.vertical_align
        }
    }

    /// Wraps `text` and positions the resulting lines.
    pub fn layout(&self, text: &str, font_size: f32) -> TextBlock {
        let mut lines = match self.max_width {
            Some(max_width) => wrap_text(text, max_width, font_size),
            None => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![trimmed.to_string()]
                }
            }
        };
        if let Some(max_lines) = self.max_lines {
            if lines.len() > max_lines {
                trace!(wrapped = lines.len(), max_lines; "Truncating label");
            }
            lines = truncate_lines(lines, max_lines, &self.ellipsis);
        }

        let line_height = font_size * self.line_height;
        let total_height = lines.len() as f32 * line_height;
        let top = self.anchor.y();

        let y = match (self.effective_align(), self.max_height) {
            (VerticalAlign::Top, _) => top + TOP_PADDING,
            (VerticalAlign::Bottom, max_height) => {
                top + max_height.unwrap_or_default() - BOTTOM_PADDING - total_height + line_height
            }
            (VerticalAlign::Middle, Some(max_height)) => {
                top + max_height / 2.0 - total_height / 2.0
            }
            (VerticalAlign::Middle, None) => top,
        };

        TextBlock {
            x: self.anchor.x(),
            y,
            line_height,
            font_size,
            lines,
        }
    }
}

/// Wrapped lines with their resolved position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    x: f32,
    y: f32,
    line_height: f32,
    font_size: f32,
    lines: Vec<String>,
}

impl TextBlock {
    /// Returns the x-coordinate shared by every line
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the first line
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the distance between two consecutive lines
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the vertical offset of line `index` relative to the previous line.
    ///
    /// The first line carries no offset; each following line moves down by one
    /// line height.
    pub fn line_offset(&self, index: usize) -> f32 {
        if index == 0 { 0.0 } else { self.line_height }
    }

    /// Returns the estimated size of the block
    pub fn size(&self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| estimate_width(line, self.font_size))
            .fold(0.0, f32::max);
        Size::new(width, self.lines.len() as f32 * self.line_height)
    }
}

/// Estimates the size of `text` once wrapped at `max_width`.
///
/// The width is the widest line estimate and the height is the line count
/// times `font_size × DEFAULT_LINE_HEIGHT`.
pub fn measure_wrapped_text(text: &str, max_width: f32, font_size: f32) -> Size {
    TextLayout::new(Point::default())
        .with_max_width(max_width)
        .layout(text, font_size)
        .size()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_estimate_width() {
        assert_approx_eq!(f32, average_char_width(10.0), 6.0);
        assert_approx_eq!(f32, estimate_width("abcd", 10.0), 24.0);
        assert_approx_eq!(f32, estimate_width("", 12.0), 0.0);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_text("", 100.0, 12.0).is_empty());
        assert!(wrap_text("   \t\n ", 100.0, 12.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_keeps_spacing() {
        assert_eq!(wrap_text("  two  words ", 200.0, 12.0), vec!["two  words"]);
    }

    #[test]
    fn test_wrap_greedy() {
        // 6 units per char: 10 chars per 60 units
        let lines = wrap_text("aa bb cc dd eeeee", 60.0, 10.0);
        assert_eq!(lines, vec!["aa bb cc", "dd eeeee"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_word() {
        // avg char width 7.2, floor(60 / 7.2) = 8 chars per chunk
        let lines = wrap_text("Supercalifragilisticexpialidocious", 60.0, 12.0);
        assert_eq!(
            lines,
            vec!["Supercal", "ifragili", "sticexpi", "alidocio", "us"]
        );
        for line in &lines {
            assert!(estimate_width(line, 12.0) <= 60.0);
        }
    }

    #[test]
    fn test_wrap_word_after_split_starts_new_line() {
        let lines = wrap_text("abcdefghijkl ab cd", 60.0, 10.0);
        assert_eq!(lines, vec!["abcdefghij", "kl", "ab cd"]);
    }

    #[test]
    fn test_wrap_tiny_width_one_char_per_line() {
        let lines = wrap_text("abc", 1.0, 12.0);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wrap_unicode_word() {
        let lines = wrap_text("ÄÖÜßÄÖÜß", 24.0, 10.0);
        assert_eq!(lines, vec!["ÄÖÜß", "ÄÖÜß"]);
    }

    #[test]
    fn test_truncate_lines() {
        let lines: Vec<String> = ["one", "two", "three"].map(String::from).to_vec();
        assert_eq!(truncate_lines(lines.clone(), 3, "..."), lines);
        assert_eq!(truncate_lines(lines.clone(), 1, "..."), vec!["..."]);
        assert_eq!(truncate_lines(lines, 2, "~"), vec!["one", "tw~"]);
    }

    #[test]
    fn test_layout_max_lines() {
        let block = TextLayout::new(Point::default())
            .with_max_width(60.0)
            .with_max_lines(2)
            .layout("aa bb cc dd ee ff gg hh ii jj", 10.0);
        assert_eq!(block.lines(), &["aa bb cc", "dd ee..."]);

        let unlimited = TextLayout::new(Point::default())
            .with_max_width(60.0)
            .with_max_lines(0)
            .layout("aa bb cc dd ee ff gg hh ii jj", 10.0);
        assert_eq!(unlimited.lines().len(), 4);
    }

    #[test]
    fn test_layout_vertical_top() {
        let block = TextLayout::new(Point::new(50.0, 10.0))
            .with_max_height(100.0)
            .with_vertical_align(VerticalAlign::Top)
            .layout("Label", 12.0);
        assert_approx_eq!(f32, block.x(), 50.0);
        assert_approx_eq!(f32, block.y(), 13.0);
    }

    #[test]
    fn test_layout_vertical_middle() {
        // Two lines of 12 * 1.2 = 14.4 give a 28.8 tall block
        let block = TextLayout::new(Point::new(0.0, 0.0))
            .with_max_width(40.0)
            .with_max_height(100.0)
            .layout("Label Other", 12.0);
        assert_eq!(block.lines().len(), 2);
        assert_approx_eq!(f32, block.y(), 50.0 - 14.4, epsilon = 0.0001);

        let unbounded = TextLayout::new(Point::new(0.0, 7.0)).layout("Label", 12.0);
        assert_approx_eq!(f32, unbounded.y(), 7.0);
    }

    #[test]
    fn test_layout_vertical_bottom() {
        let block = TextLayout::new(Point::new(0.0, 0.0))
            .with_max_height(100.0)
            .with_vertical_align(VerticalAlign::Bottom)
            .layout("Label", 10.0);
        // 100 - 10 - 12 + 12
        assert_approx_eq!(f32, block.y(), 90.0);
    }

    #[test]
    fn test_layout_compound_forces_top() {
        let layout = TextLayout::new(Point::new(0.0, 0.0))
            .with_max_height(100.0)
            .with_vertical_align(VerticalAlign::Bottom)
            .with_compound(true);
        assert_eq!(layout.effective_align(), VerticalAlign::Top);
        assert_approx_eq!(f32, layout.layout("Label", 12.0).y(), TOP_PADDING);
    }

    #[test]
    fn test_line_offsets() {
        let block = TextLayout::new(Point::default())
            .with_max_width(30.0)
            .layout("one two three", 10.0);
        assert_eq!(block.lines().len(), 3);
        assert_approx_eq!(f32, block.line_offset(0), 0.0);
        assert_approx_eq!(f32, block.line_offset(1), 12.0);
        assert_approx_eq!(f32, block.line_offset(2), 12.0);
    }

    #[test]
    fn test_measure_wrapped_text() {
        let size = measure_wrapped_text("aa bb cc dd eeeee", 60.0, 10.0);
        assert_approx_eq!(f32, size.width(), 48.0);
        assert_approx_eq!(f32, size.height(), 24.0);

        let empty = measure_wrapped_text("", 60.0, 10.0);
        assert_eq!(empty, Size::new(0.0, 0.0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn words_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z]{1,30}", 1..12)
    }

    fn font_size_strategy() -> impl Strategy<Value = f32> {
        8.0f32..24.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Text that already fits comes back as exactly one trimmed line.
    fn check_short_text_is_single_line(words: Vec<String>, font_size: f32) -> Result<(), TestCaseError> {
        let text = format!("  {}  ", words.join(" "));
        let max_width = estimate_width(text.trim(), font_size) + 1.0;

        let lines = wrap_text(&text, max_width, font_size);
        prop_assert_eq!(lines, vec![text.trim().to_string()]);
        Ok(())
    }

    /// Every line fits whenever a single character fits.
    fn check_lines_fit_width(
        words: Vec<String>,
        font_size: f32,
        chars_per_line: usize,
    ) -> Result<(), TestCaseError> {
        let text = words.join(" ");
        let max_width = average_char_width(font_size) * chars_per_line as f32 + 0.01;

        for line in wrap_text(&text, max_width, font_size) {
            prop_assert!(estimate_width(&line, font_size) <= max_width);
        }
        Ok(())
    }

    /// Wrapping never loses or invents characters.
    fn check_wrap_preserves_characters(
        words: Vec<String>,
        font_size: f32,
        chars_per_line: usize,
    ) -> Result<(), TestCaseError> {
        let text = words.join(" ");
        let max_width = average_char_width(font_size) * chars_per_line as f32 + 0.01;

        let wrapped: String = wrap_text(&text, max_width, font_size)
            .concat()
            .split_whitespace()
            .collect();
        let original: String = text.split_whitespace().collect();
        prop_assert_eq!(wrapped, original);
        Ok(())
    }

    /// A line cap is always honored.
    fn check_max_lines_honored(words: Vec<String>, max_lines: usize) -> Result<(), TestCaseError> {
        let block = TextLayout::new(Point::default())
            .with_max_width(40.0)
            .with_max_lines(max_lines)
            .layout(&words.join(" "), 12.0);
        prop_assert!(block.lines().len() <= max_lines);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn short_text_is_single_line(words in words_strategy(), font_size in font_size_strategy()) {
            check_short_text_is_single_line(words, font_size)?;
        }

        #[test]
        fn lines_fit_width(words in words_strategy(), font_size in font_size_strategy(), chars_per_line in 1usize..20) {
            check_lines_fit_width(words, font_size, chars_per_line)?;
        }

        #[test]
        fn wrap_preserves_characters(words in words_strategy(), font_size in font_size_strategy(), chars_per_line in 1usize..20) {
            check_wrap_preserves_characters(words, font_size, chars_per_line)?;
        }

        #[test]
        fn max_lines_honored(words in words_strategy(), max_lines in 1usize..5) {
            check_max_lines_honored(words, max_lines)?;
        }
    }
}
