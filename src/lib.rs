//! Point Menu - place a floating menu next to a tap point
//!
//! Given a tap point, the rendered size of a menu panel and the viewport, this
//! library picks whichever of four placements (below, right, left or above
//! the tap) keeps the most of the panel on screen, and derives the stem that
//! visually connects the panel to the tap.
//!
//! # Example
//!
//! ```rust
//! use point_menu::{select_layout, Direction, Point, Size};
//!
//! let layout = select_layout(
//!     Point::new(500.0, 780.0),
//!     Size::new(200.0, 100.0),
//!     Size::new(1000.0, 800.0),
//!     80.0,
//! )
//! .unwrap();
//!
//! assert_eq!(layout.direction, Direction::North);
//! assert_eq!(layout.position, Point::new(400.0, 600.0));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod menu;
pub mod renderer;

pub use config::{ConfigError, MenuConfig};
pub use error::{parse_point, parse_size, ParseError};
pub use layout::{
    intersection_area, select_layout, Direction, Layout, LayoutConfig, LayoutError, Point, Rect,
    Size, StemLayout,
};
pub use menu::{AnimationTicket, PanelMeasure, Placement, PointMenu, ViewportSource};
pub use renderer::{render_svg, EntranceAnimation, SvgConfig};

use thiserror::Error;

/// Errors that can occur anywhere between reading arguments and producing a placement
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Malformed geometry argument
    #[error("argument error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Placement inputs were not usable
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Place a menu once, without keeping a [`PointMenu`] around
///
/// # Example
///
/// ```rust
/// use point_menu::{place, Direction, MenuConfig, LayoutConfig, Point, Size};
///
/// let config = MenuConfig::new().with_layout(LayoutConfig::new().with_offset(80.0));
/// let placement = place(
///     Point::new(10.0, 400.0),
///     Size::new(200.0, 100.0),
///     Size::new(1000.0, 800.0),
///     &config,
/// )
/// .unwrap();
///
/// assert_eq!(placement.layout.direction, Direction::East);
/// assert_eq!(placement.stem.rotation_degrees, 0.0);
/// ```
pub fn place(
    tap: Point,
    panel: Size,
    viewport: Size,
    config: &MenuConfig,
) -> Result<Placement, PlacementError> {
    let mut menu = PointMenu::new(panel, viewport, config.clone());
    Ok(menu.open_at(tap)?)
}
