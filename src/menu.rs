//! Point menu context
//!
//! A [`PointMenu`] owns the collaborators that the placement core needs
//! numbers from (panel measurement and viewport size) plus the configuration.
//! Each call to [`PointMenu::open_at`] computes a fresh placement and issues a
//! new animation ticket; any animation started for an older ticket is stale
//! and should stop rather than finish.

use tracing::debug;

use crate::config::MenuConfig;
use crate::layout::{select_layout, Layout, LayoutError, Point, Size, StemLayout};

/// Supplies the rendered size of the menu panel
pub trait PanelMeasure {
    fn panel_size(&self) -> Size;
}

/// Supplies the current size of the visible viewport
pub trait ViewportSource {
    fn viewport_size(&self) -> Size;
}

/// A fixed size acts as its own measurement
impl PanelMeasure for Size {
    fn panel_size(&self) -> Size {
        *self
    }
}

impl ViewportSource for Size {
    fn viewport_size(&self) -> Size {
        *self
    }
}

/// Generation number identifying one entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationTicket(pub u64);

/// Everything the presentation layer needs to show the menu at a tap point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub tap: Point,
    pub panel: Size,
    pub layout: Layout,
    pub stem: StemLayout,
    pub ticket: AnimationTicket,
}

/// A menu that opens next to wherever the user taps
#[derive(Debug)]
pub struct PointMenu<M, V> {
    measure: M,
    viewport: V,
    config: MenuConfig,
    generation: u64,
    last: Option<Placement>,
}

impl<M: PanelMeasure, V: ViewportSource> PointMenu<M, V> {
    pub fn new(measure: M, viewport: V, config: MenuConfig) -> Self {
        Self {
            measure,
            viewport,
            config,
            generation: 0,
            last: None,
        }
    }

    /// Place the menu around `tap`, superseding any previous placement
    pub fn open_at(&mut self, tap: Point) -> Result<Placement, LayoutError> {
        let panel = self.measure.panel_size();
        let viewport = self.viewport.viewport_size();
        let offset = self.config.layout.offset;

        let layout = select_layout(tap, panel, viewport, offset)?;
        let stem = StemLayout::new(tap, &layout, offset);

        self.generation += 1;
        let placement = Placement {
            tap,
            panel: panel.clamped(),
            layout,
            stem,
            ticket: AnimationTicket(self.generation),
        };
        debug!(
            ticket = self.generation,
            direction = %layout.direction,
            "opened point menu"
        );

        self.last = Some(placement);
        Ok(placement)
    }

    /// True if `ticket` belongs to the most recent placement
    pub fn is_current(&self, ticket: AnimationTicket) -> bool {
        ticket.0 == self.generation && self.generation != 0
    }

    pub fn last_placement(&self) -> Option<&Placement> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Direction, LayoutConfig};
    use std::cell::Cell;

    /// Viewport that can shrink between taps, like a resized window
    struct Window {
        size: Cell<Size>,
    }

    impl ViewportSource for &Window {
        fn viewport_size(&self) -> Size {
            self.size.get()
        }
    }

    fn menu() -> PointMenu<Size, Size> {
        let config = MenuConfig::new().with_layout(LayoutConfig::new().with_offset(80.0));
        PointMenu::new(Size::new(200.0, 100.0), Size::new(1000.0, 800.0), config)
    }

    #[test]
    fn test_open_at_places_menu() {
        let mut menu = menu();
        let placement = menu.open_at(Point::new(500.0, 780.0)).unwrap();
        assert_eq!(placement.layout.direction, Direction::North);
        assert_eq!(placement.layout.position, Point::new(400.0, 600.0));
        assert_eq!(placement.stem.rotation_degrees, 90.0);
        assert_eq!(menu.last_placement(), Some(&placement));
    }

    #[test]
    fn test_new_tap_supersedes_previous_ticket() {
        let mut menu = menu();
        let first = menu.open_at(Point::new(500.0, 400.0)).unwrap();
        assert!(menu.is_current(first.ticket));

        let second = menu.open_at(Point::new(10.0, 400.0)).unwrap();
        assert!(!menu.is_current(first.ticket));
        assert!(menu.is_current(second.ticket));
        assert!(second.ticket > first.ticket);
    }

    #[test]
    fn test_no_ticket_is_current_before_first_open() {
        let menu = menu();
        assert!(!menu.is_current(AnimationTicket(0)));
        assert!(menu.last_placement().is_none());
    }

    #[test]
    fn test_failed_open_keeps_previous_ticket() {
        let mut menu = menu();
        let first = menu.open_at(Point::new(500.0, 400.0)).unwrap();
        assert!(menu.open_at(Point::new(f64::NAN, 0.0)).is_err());
        assert!(menu.is_current(first.ticket));
    }

    #[test]
    fn test_viewport_is_read_on_every_open() {
        let window = Window {
            size: Cell::new(Size::new(1000.0, 800.0)),
        };
        let config = MenuConfig::new().with_layout(LayoutConfig::new().with_offset(80.0));
        let mut menu = PointMenu::new(Size::new(200.0, 100.0), &window, config);

        let tap = Point::new(500.0, 400.0);
        assert_eq!(menu.open_at(tap).unwrap().layout.direction, Direction::South);

        window.size.set(Size::new(1000.0, 450.0));
        assert_eq!(menu.open_at(tap).unwrap().layout.direction, Direction::East);
    }
}
