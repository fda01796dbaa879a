//! Connection routing.
//!
//! A connector runs from the boundary of its source element, through its
//! bendpoints, to the boundary of its target element. The router:
//!
//! 1. builds the path from the two element centers, trimming the first and
//!    last segments at the element boundaries
//! 2. decides which ends carry a glyph ([`placement`])
//! 3. orients each glyph along its end segment and pulls the line back by the
//!    glyph size so the stroke stops at the glyph
//! 4. draws the line with the relationship's line style, or the connector's
//!    explicit override
//! 5. places the relationship name above the middle of the path
//!
//! The result is a single `<g>` holding the line, then the glyphs, then the label.

pub mod placement;

use log::trace;
use svg::node::element as svg_element;

use archimate_svg_core::{
    draw::{
        ArrowHeadGenerator, DominantBaseline, LineStyle, LineStyleGenerator, StrokeDefinition,
        StrokeStyle, TextAnchor, TextDefinition, TextLayout, draw_polyline,
    },
    geometry::{Bounds, Point, Size},
    semantic::{ConnectorStyle, Relationship},
};

use crate::{config::RenderOptions, registry::ShapeRegistry};

pub use placement::{ArrowPlacement, arrow_placement, retracts_source, source_arrow_head};

/// Distance between a connector label's baseline and the path.
pub const LABEL_OFFSET: f32 = 5.0;

/// Amount by which connector labels are smaller than element labels.
pub const LABEL_FONT_SIZE_DELTA: f32 = 2.0;

/// Side of the square that stands in for a bare point endpoint.
const POINT_ENDPOINT_SIZE: f32 = 2.0;

/// Resolved stroke and label settings of one connector.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorAppearance {
    stroke: StrokeDefinition,
    line_style: Option<StrokeStyle>,
    text: TextDefinition,
}

impl ConnectorAppearance {
    /// Resolves `overrides` on top of the defaults derived from `options`.
    ///
    /// Connector labels default to the options font, two points smaller than
    /// element labels, in the palette text color.
    pub fn resolve(options: &RenderOptions, overrides: &ConnectorStyle) -> Self {
        let palette = options.palette();

        let stroke = StrokeDefinition::new(
            overrides.stroke_color().unwrap_or(palette.stroke()),
            overrides.stroke_width().unwrap_or(1.0),
        );

        let mut text = TextDefinition::new();
        text.set_font_family(overrides.font_family().unwrap_or(options.font_family()));
        text.set_font_size(
            overrides
                .font_size()
                .unwrap_or(options.font_size() - LABEL_FONT_SIZE_DELTA),
        );
        text.set_color(overrides.text_color().unwrap_or(palette.text()));
        text.set_anchor(TextAnchor::Middle);
        text.set_baseline(DominantBaseline::Auto);

        Self {
            stroke,
            line_style: overrides.line_style().cloned(),
            text,
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the explicit line style, if the connector overrides the default
    pub fn line_style(&self) -> Option<&StrokeStyle> {
        self.line_style.as_ref()
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }
}

impl Default for ConnectorAppearance {
    fn default() -> Self {
        Self::resolve(&RenderOptions::default(), &ConnectorStyle::default())
    }
}

/// Returns where the segment leaving `bounds` from its center towards `towards`
/// crosses the boundary, or the center when it does not cross it.
pub fn trim_from_center(bounds: Bounds, towards: Point) -> Point {
    let center = bounds.center();
    bounds
        .boundary_intersection(center, towards)
        .unwrap_or(center)
}

/// Returns where the segment from `from` to the center of `bounds` enters the
/// boundary, or the center when it does not cross it.
pub fn trim_to_center(bounds: Bounds, from: Point) -> Point {
    let center = bounds.center();
    bounds.boundary_intersection(from, center).unwrap_or(center)
}

/// Builds the polyline from `source` to `target` through `bendpoints`.
///
/// Only the first and last segments are trimmed; bendpoints are kept as given.
/// The path always holds at least two points.
///
/// # Examples
///
/// ```
/// # use archimate_svg::connector::connector_path;
/// # use archimate_svg_core::geometry::{Bounds, Point};
/// let path = connector_path(
///     Bounds::new(0.0, 0.0, 100.0, 50.0),
///     Bounds::new(200.0, 0.0, 100.0, 50.0),
///     &[],
/// );
/// assert_eq!(path, vec![Point::new(100.0, 25.0), Point::new(200.0, 25.0)]);
/// ```
pub fn connector_path(source: Bounds, target: Bounds, bendpoints: &[Point]) -> Vec<Point> {
    let first_towards = bendpoints.first().copied().unwrap_or(target.center());
    let last_from = bendpoints.last().copied().unwrap_or(source.center());

    let mut points = Vec::with_capacity(bendpoints.len() + 2);
    points.push(trim_from_center(source, first_towards));
    points.extend_from_slice(bendpoints);
    points.push(trim_to_center(target, last_from));
    points
}

/// Returns the point halfway along the list of path points.
///
/// For an odd number of points this is the central point, otherwise the
/// midpoint of the two central points. Returns `None` for an empty path.
pub fn median_point(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let middle = points.len() / 2;
    if points.len() % 2 == 1 {
        Some(points[middle])
    } else {
        Some(points[middle - 1].midpoint(points[middle]))
    }
}

/// Moves `end` towards `neighbor` by `distance`.
///
/// A zero-length segment has no direction and leaves `end` in place.
fn retract(end: Point, neighbor: Point, distance: f32) -> Point {
    match end.direction_to(neighbor) {
        Some(direction) => end.add_point(direction.scale(distance)),
        None => end,
    }
}

/// Draws connectors with the generators of a [`ShapeRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct ConnectionRouter<'a> {
    registry: &'a ShapeRegistry,
}

impl<'a> ConnectionRouter<'a> {
    pub fn new(registry: &'a ShapeRegistry) -> Self {
        Self { registry }
    }

    /// Draws `relationship` between the elements at `source` and `target`.
    pub fn route(
        &self,
        relationship: &Relationship,
        source: Bounds,
        target: Bounds,
        bendpoints: &[Point],
        appearance: &ConnectorAppearance,
    ) -> svg_element::Group {
        let path = connector_path(source, target, bendpoints);
        trace!(relationship = relationship.id(), path:?; "Connector path");
        self.draw(relationship, &path, appearance)
    }

    /// Draws `relationship` between two bare points.
    ///
    /// Each point is treated as a 2×2 element centered on it.
    pub fn route_between_points(
        &self,
        relationship: &Relationship,
        source: Point,
        target: Point,
        bendpoints: &[Point],
        appearance: &ConnectorAppearance,
    ) -> svg_element::Group {
        let size = Size::new(POINT_ENDPOINT_SIZE, POINT_ENDPOINT_SIZE);
        self.route(
            relationship,
            Bounds::new_from_center(source, size),
            Bounds::new_from_center(target, size),
            bendpoints,
            appearance,
        )
    }

    fn draw(
        &self,
        relationship: &Relationship,
        path: &[Point],
        appearance: &ConnectorAppearance,
    ) -> svg_element::Group {
        let relationship_type = relationship.relationship_type();
        let key = relationship_type.as_str();
        let placement = arrow_placement(relationship_type, relationship.access_type());
        let color = appearance.stroke().color();

        let mut line = path.to_vec();
        let mut glyphs = Vec::new();
        let last = path.len() - 1;

        if placement.source {
            if let Some(kind) = source_arrow_head(relationship_type) {
                let angle = path[0].angle_to(path[1]) + 180.0;
                glyphs.push(kind.generate(path[0], angle, color));
                if retracts_source(relationship_type) {
                    line[0] = retract(path[0], path[1], kind.size());
                }
            }
        }

        if placement.target {
            if let Some(generator) = self.registry.arrow_head(key) {
                let angle = path[last - 1].angle_to(path[last]);
                glyphs.push(generator.generate(path[last], angle, color));
                line[last] = retract(path[last], path[last - 1], generator.size());
            }
        }

        let mut group = svg_element::Group::new().add(self.draw_line(key, &line, appearance));
        for glyph in glyphs {
            group = group.add(glyph);
        }
        if let Some(label) = relationship
            .name()
            .and_then(|name| Self::draw_label(name, path, appearance))
        {
            group = group.add(label);
        }
        group
    }

    fn draw_line(
        &self,
        key: &str,
        points: &[Point],
        appearance: &ConnectorAppearance,
    ) -> Box<dyn svg::Node> {
        if let Some(style) = appearance.line_style() {
            let stroke = appearance.stroke().clone().with_style(style.clone());
            return Box::new(draw_polyline(points, &stroke));
        }
        match self.registry.line_style(key) {
            Some(generator) => generator.generate(points, appearance.stroke()),
            None => LineStyle::Solid.generate(points, appearance.stroke()),
        }
    }

    fn draw_label(
        name: &str,
        path: &[Point],
        appearance: &ConnectorAppearance,
    ) -> Option<svg_element::Text> {
        let median = median_point(path)?;
        let anchor = Point::new(median.x(), median.y() - LABEL_OFFSET);
        let block = TextLayout::new(anchor).layout(name, appearance.text().font_size());
        appearance.text().render(&block)
    }
}
