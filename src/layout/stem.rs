//! Stem geometry connecting the tap point to a placed panel
//!
//! All coordinates here are local to the panel: the panel's top-left corner is
//! the origin. The stem runs along the placement axis (y for N/S, x for E/W)
//! and spans the clearance between the tap point and the panel's near edge.

use super::selector::Layout;
use super::types::{Direction, Point};

/// Where to draw the stem, relative to the panel's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemLayout {
    /// Tap point in panel-local coordinates
    pub origin: Point,
    /// 90 for vertical placements (N/S), 0 for horizontal ones (E/W)
    pub rotation_degrees: f64,
    /// Start of the stem along the placement axis
    pub axis_offset: f64,
    /// Length of the stem; equal to the placement offset
    pub length: f64,
    pub direction: Direction,
}

impl StemLayout {
    /// Derive the stem for a placement made around `tap` with clearance `offset`
    pub fn new(tap: Point, layout: &Layout, offset: f64) -> Self {
        let origin = local_point(tap, layout.position);
        let direction = layout.direction;
        let along = if direction.is_vertical() {
            origin.y
        } else {
            origin.x
        };

        // A negative local coordinate means the tap sits before the panel on
        // this axis, so the stem starts at the tap. Otherwise it starts at the
        // panel's near edge, `offset` short of the tap.
        let axis_offset = if along < 0.0 { along } else { along - offset };

        Self {
            origin,
            rotation_degrees: if direction.is_vertical() { 90.0 } else { 0.0 },
            axis_offset,
            length: offset,
            direction,
        }
    }

    /// True when the stem is drawn rotated from its default horizontal orientation
    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees != 0.0
    }

    /// Local start and end points of the stem segment
    pub fn segment(&self) -> (Point, Point) {
        if self.direction.is_vertical() {
            let x = self.origin.x;
            (
                Point::new(x, self.axis_offset),
                Point::new(x, self.axis_offset + self.length),
            )
        } else {
            let y = self.origin.y;
            (
                Point::new(self.axis_offset, y),
                Point::new(self.axis_offset + self.length, y),
            )
        }
    }
}

/// Tap point relative to the panel anchor
pub fn local_point(tap: Point, anchor: Point) -> Point {
    tap - anchor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(x: f64, y: f64, direction: Direction) -> Layout {
        Layout {
            position: Point::new(x, y),
            direction,
        }
    }

    #[test]
    fn test_local_point() {
        let local = local_point(Point::new(500.0, 780.0), Point::new(400.0, 600.0));
        assert_eq!(local, Point::new(100.0, 180.0));
    }

    #[test]
    fn test_south_stem_starts_at_tap() {
        let tap = Point::new(500.0, 400.0);
        let stem = StemLayout::new(tap, &layout(400.0, 480.0, Direction::South), 80.0);
        assert_eq!(stem.origin, Point::new(100.0, -80.0));
        assert_eq!(stem.rotation_degrees, 90.0);
        assert_eq!(stem.axis_offset, -80.0);
        assert_eq!(
            stem.segment(),
            (Point::new(100.0, -80.0), Point::new(100.0, 0.0))
        );
    }

    #[test]
    fn test_north_stem_starts_at_bottom_edge() {
        let tap = Point::new(500.0, 780.0);
        let stem = StemLayout::new(tap, &layout(400.0, 600.0, Direction::North), 80.0);
        assert!(stem.is_rotated());
        assert_eq!(stem.axis_offset, 100.0);
        assert_eq!(
            stem.segment(),
            (Point::new(100.0, 100.0), Point::new(100.0, 180.0))
        );
    }

    #[test]
    fn test_east_stem_is_horizontal() {
        let tap = Point::new(10.0, 400.0);
        let stem = StemLayout::new(tap, &layout(90.0, 350.0, Direction::East), 80.0);
        assert!(!stem.is_rotated());
        assert_eq!(stem.axis_offset, -80.0);
        assert_eq!(stem.segment(), (Point::new(-80.0, 50.0), Point::new(0.0, 50.0)));
    }

    #[test]
    fn test_west_stem_starts_at_right_edge() {
        let tap = Point::new(900.0, 400.0);
        let stem = StemLayout::new(tap, &layout(620.0, 350.0, Direction::West), 80.0);
        assert_eq!(stem.rotation_degrees, 0.0);
        assert_eq!(stem.axis_offset, 200.0);
        assert_eq!(stem.length, 80.0);
    }
}
