//! Geometric primitives for view rendering.
//!
//! This module provides the value types used to position elements and route
//! connectors inside an ArchiMate view.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in view space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle given by its top-left corner and size
//! - [`segment_intersection`] - Intersection of two line segments
//!
//! # Coordinate System
//!
//! Views use a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! Rectangles are not required to have a positive width or height. Degenerate
//! rectangles are carried through every operation without validation.

/// Tolerance used when checking whether a computed intersection lies on a segment.
const SEGMENT_TOLERANCE: f64 = 1e-6;

/// A 2D point representing a position in view coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector math.
/// The coordinate system has origin at top-left with Y increasing downward,
/// (see [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use archimate_svg_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Midpoint calculation
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, treating both as vectors
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, treating both as vectors
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the point halfway between this point and another
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns the length of this point treated as a vector from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns the euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Multiplies both coordinates by a factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector pointing from this point towards `other`.
    ///
    /// Returns `None` when both points coincide, since no direction exists.
    pub fn direction_to(self, other: Point) -> Option<Point> {
        let delta = other.sub_point(self);
        let length = delta.hypot();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(delta.scale(1.0 / length))
    }

    /// Returns the angle in degrees of the vector from this point towards `other`.
    ///
    /// The angle is measured with `atan2`, so it lies in `(-180, 180]` and
    /// follows the downward Y-axis of the view coordinate system.
    pub fn angle_to(self, other: Point) -> f32 {
        let delta = other.sub_point(self);
        delta.y.atan2(delta.x).to_degrees()
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a size with the maximum width and height of both sizes
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grows both dimensions by the same amount
    pub fn add_padding(self, padding: f32) -> Self {
        Self {
            width: self.width + padding,
            height: self.height + padding,
        }
    }

    /// Returns the smaller of the two dimensions
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }
}

/// A rectangle in view coordinates, anchored at its top-left corner.
///
/// # Examples
///
/// ```
/// # use archimate_svg_core::geometry::{Bounds, Point};
/// let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);
/// assert_eq!(bounds.center(), Point::new(50.0, 25.0));
/// assert_eq!(bounds.max_x(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    width: f32,
    height: f32,
}

impl Bounds {
    /// Creates bounds from the top-left corner and dimensions
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            width,
            height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x, top_left.y, size.width, size.height)
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Returns the x-coordinate of the left edge
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the y-coordinate of the top edge
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the x-coordinate of the right edge
    pub fn max_x(self) -> f32 {
        self.min_x + self.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn max_y(self) -> f32 {
        self.min_y + self.height
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the top-left corner
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    /// Returns the dimensions as a [`Size`]
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns true if `other` lies fully inside these bounds.
    ///
    /// Containment is inclusive: touching edges still count as inside.
    pub fn contains(self, other: Bounds) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Returns the four edges as segments in clockwise order starting at the top edge.
    pub fn edges(self) -> [(Point, Point); 4] {
        let top_left = Point::new(self.min_x(), self.min_y());
        let top_right = Point::new(self.max_x(), self.min_y());
        let bottom_right = Point::new(self.max_x(), self.max_y());
        let bottom_left = Point::new(self.min_x(), self.max_y());

        [
            (top_left, top_right),
            (top_right, bottom_right),
            (bottom_right, bottom_left),
            (bottom_left, top_left),
        ]
    }

    /// Finds where the segment from `start` to `end` crosses the boundary of these bounds.
    ///
    /// Every edge is tested with [`segment_intersection`] and the crossing closest
    /// to `start` wins. Returns `None` when the segment does not cross any edge.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archimate_svg_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);
    /// let exit = bounds
    ///     .boundary_intersection(Point::new(50.0, 25.0), Point::new(250.0, 25.0))
    ///     .unwrap();
    /// assert_eq!(exit, Point::new(100.0, 25.0));
    /// ```
    pub fn boundary_intersection(self, start: Point, end: Point) -> Option<Point> {
        self.edges()
            .into_iter()
            .filter_map(|(edge_start, edge_end)| {
                segment_intersection(start, end, edge_start, edge_end)
            })
            .min_by(|a, b| start.distance(*a).total_cmp(&start.distance(*b)))
    }

    /// Returns the smallest bounds enclosing both bounds
    pub fn merge(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Intersects two line segments using the two-line-equation determinant method.
///
/// Each segment is written as `a·x + b·y = c`. Parallel lines (a zero
/// determinant) have no intersection. Otherwise the crossing point of the two
/// infinite lines is returned if it lies within both segments' bounding boxes.
/// The arithmetic runs in `f64` so crossings on long segments stay on the edge.
///
/// # Examples
///
/// ```
/// # use archimate_svg_core::geometry::{segment_intersection, Point};
/// let hit = segment_intersection(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 0.0),
/// );
/// assert_eq!(hit, Some(Point::new(5.0, 5.0)));
/// ```
pub fn segment_intersection(
    first_start: Point,
    first_end: Point,
    second_start: Point,
    second_end: Point,
) -> Option<Point> {
    let (x1, y1) = (f64::from(first_start.x), f64::from(first_start.y));
    let (x2, y2) = (f64::from(first_end.x), f64::from(first_end.y));
    let (x3, y3) = (f64::from(second_start.x), f64::from(second_start.y));
    let (x4, y4) = (f64::from(second_end.x), f64::from(second_end.y));

    let a1 = y2 - y1;
    let b1 = x1 - x2;
    let c1 = a1 * x1 + b1 * y1;

    let a2 = y4 - y3;
    let b2 = x3 - x4;
    let c2 = a2 * x3 + b2 * y3;

    let determinant = a1 * b2 - a2 * b1;
    if determinant == 0.0 {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / determinant;
    let y = (a1 * c2 - a2 * c1) / determinant;

    let on_both = is_within_segment_box((x1, y1), (x2, y2), (x, y))
        && is_within_segment_box((x3, y3), (x4, y4), (x, y));

    #[allow(clippy::cast_possible_truncation)]
    on_both.then(|| Point::new(x as f32, y as f32))
}

fn is_within_segment_box(start: (f64, f64), end: (f64, f64), point: (f64, f64)) -> bool {
    let min_x = start.0.min(end.0) - SEGMENT_TOLERANCE;
    let max_x = start.0.max(end.0) + SEGMENT_TOLERANCE;
    let min_y = start.1.min(end.1) - SEGMENT_TOLERANCE;
    let max_y = start.1.max(end.1) + SEGMENT_TOLERANCE;

    point.0 >= min_x && point.0 <= max_x && point.1 >= min_y && point.1 <= max_y
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 20.0);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(5.0, 15.0);
        assert_eq!(p1.add_point(p2), Point::new(15.0, 35.0));
        assert_eq!(p1.sub_point(p2), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, p1.distance(p2), 5.0);
        assert_approx_eq!(f32, p2.hypot(), 5.0);
    }

    #[test]
    fn test_point_direction_to() {
        let direction = Point::new(0.0, 0.0)
            .direction_to(Point::new(0.0, -8.0))
            .unwrap();
        assert_approx_eq!(f32, direction.x(), 0.0);
        assert_approx_eq!(f32, direction.y(), -1.0);

        assert!(Point::new(1.0, 1.0).direction_to(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_point_angle_to() {
        let origin = Point::new(0.0, 0.0);
        assert_approx_eq!(f32, origin.angle_to(Point::new(10.0, 0.0)), 0.0);
        assert_approx_eq!(f32, origin.angle_to(Point::new(0.0, 10.0)), 90.0);
        assert_approx_eq!(f32, origin.angle_to(Point::new(-10.0, 0.0)), 180.0);
        assert_approx_eq!(f32, origin.angle_to(Point::new(0.0, -10.0)), -90.0);
    }

    #[test]
    fn test_size_helpers() {
        let size = Size::new(30.0, 20.0);
        assert_eq!(size.min_dimension(), 20.0);
        assert_eq!(size.add_padding(5.0), Size::new(35.0, 25.0));
        assert_eq!(size.max(Size::new(10.0, 40.0)), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_bounds_accessors() {
        let bounds = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.0);
        assert_eq!(bounds.center(), Point::new(25.0, 40.0));
        assert_eq!(bounds.to_size(), Size::new(30.0, 40.0));
        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(5.0, 5.0), Size::new(2.0, 2.0));
        assert_eq!(bounds, Bounds::new(4.0, 4.0, 2.0, 2.0));
    }

    #[test]
    fn test_bounds_negative_size_is_kept() {
        let bounds = Bounds::new(10.0, 10.0, -20.0, 0.0);
        assert_eq!(bounds.width(), -20.0);
        assert_eq!(bounds.max_x(), -10.0);
        assert_eq!(bounds.center(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_bounds_contains_inclusive() {
        let outer = Bounds::new(0.0, 0.0, 200.0, 200.0);
        assert!(outer.contains(Bounds::new(10.0, 10.0, 50.0, 50.0)));
        assert!(outer.contains(Bounds::new(0.0, 0.0, 200.0, 200.0)));
        assert!(outer.contains(Bounds::new(150.0, 150.0, 50.0, 50.0)));
        assert!(!outer.contains(Bounds::new(160.0, 150.0, 50.0, 50.0)));
        assert!(!Bounds::new(10.0, 10.0, 50.0, 50.0).contains(outer));
    }

    #[test]
    fn test_bounds_merge() {
        let merged = Bounds::new(0.0, 0.0, 10.0, 10.0).merge(&Bounds::new(20.0, 5.0, 10.0, 20.0));
        assert_eq!(merged, Bounds::new(0.0, 0.0, 30.0, 25.0));
    }

    #[test]
    fn test_segment_intersection_crossing() {
        let hit = segment_intersection(
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 10.0),
        );
        assert_eq!(hit, Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_segment_intersection_parallel() {
        let hit = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_intersection_outside_segment() {
        // The infinite lines cross at (5, 5) but the second segment stops short of it
        let hit = segment_intersection(
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 4.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_boundary_intersection_horizontal() {
        let source = Bounds::new(0.0, 0.0, 100.0, 50.0);
        let target = Bounds::new(200.0, 0.0, 100.0, 50.0);
        let start = source.center();
        let end = target.center();

        let exit = source.boundary_intersection(start, end).unwrap();
        assert_approx_eq!(f32, exit.x(), 100.0);
        assert_approx_eq!(f32, exit.y(), 25.0);

        let entry = target.boundary_intersection(start, end).unwrap();
        assert_approx_eq!(f32, entry.x(), 200.0);
        assert_approx_eq!(f32, entry.y(), 25.0);
    }

    #[test]
    fn test_boundary_intersection_diagonal() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let exit = bounds
            .boundary_intersection(Point::new(50.0, 50.0), Point::new(250.0, 150.0))
            .unwrap();
        assert_approx_eq!(f32, exit.x(), 100.0, epsilon = 0.001);
        assert_approx_eq!(f32, exit.y(), 75.0, epsilon = 0.001);
    }

    #[test]
    fn test_boundary_intersection_none_when_segment_inside() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let hit = bounds.boundary_intersection(Point::new(20.0, 20.0), Point::new(80.0, 80.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_boundary_intersection_zero_size() {
        let bounds = Bounds::new(5.0, 5.0, 0.0, 0.0);
        let hit = bounds.boundary_intersection(Point::new(5.0, 5.0), Point::new(50.0, 5.0));
        // Every edge collapses to a point; no edge can be crossed transversally
        assert!(hit.is_none());
    }
}
