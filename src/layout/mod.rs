//! Placement geometry for point menus
//!
//! This module chooses where a menu panel goes relative to a tap point and
//! derives the stem that connects the two. Everything here is pure arithmetic
//! over caller-supplied numbers.

pub mod config;
pub mod error;
pub mod selector;
pub mod stem;
pub mod types;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use selector::{candidate, candidates, rank_candidates, select_layout, Layout, ScoredCandidate};
pub use stem::{local_point, StemLayout};
pub use types::{intersection_area, Direction, Point, Rect, Size, UnknownDirection};
