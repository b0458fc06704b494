//! Core geometry types for menu placement

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use serde::Serialize;

/// A 2D point in screen coordinates (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Width and height of a panel or viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp negative dimensions to zero
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }
}

/// Cardinal direction of a placement relative to the tap point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Candidate evaluation order. Earlier entries win exact ties.
    pub const PRIORITY: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::North,
    ];

    /// Single-letter label ("N", "S", "E", "W")
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }

    /// True for placements above or below the tap point
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Unit vector pointing from the tap point toward the panel
    pub fn unit_vector(&self) -> Point {
        match self {
            Direction::North => Point::new(0.0, -1.0),
            Direction::South => Point::new(0.0, 1.0),
            Direction::East => Point::new(1.0, 0.0),
            Direction::West => Point::new(-1.0, 0.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a direction name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}' (expected N, S, E or W)")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// An axis-aligned rectangle, optionally tagged with the placement it represents
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: Option<Direction>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: None,
        }
    }

    /// Rectangle at `origin` with the given size
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// The visible screen area: anchored at the origin with the viewport's size
    pub fn viewport(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Tag this rectangle with a placement direction
    pub fn with_label(mut self, direction: Direction) -> Self {
        self.label = Some(direction);
        self
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if this rectangle contains a point (edges inclusive)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Check if `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest unlabelled rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Overlap area with another rectangle
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        intersection_area(self, other)
    }
}

/// Area of the overlap between two rectangles.
///
/// Each axis is clamped to zero independently before multiplying, so two
/// rectangles that are disjoint on both axes never produce a positive area.
pub fn intersection_area(a: &Rect, b: &Rect) -> f64 {
    let dx = a.right().min(b.right()) - a.x.max(b.x);
    let dy = a.bottom().min(b.bottom()) - a.y.max(b.y);
    dx.max(0.0) * dy.max(0.0)
}
