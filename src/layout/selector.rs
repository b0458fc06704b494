//! Placement selection around a tap point
//!
//! Four candidate panels are laid out around the tap point, one per cardinal
//! direction, each separated from the tap by the configured offset. The
//! candidate with the largest area inside the viewport wins. Candidates are
//! evaluated in the order South, East, West, North and a later candidate only
//! replaces the current best on a strict improvement, so exact ties resolve to
//! the earliest direction in that order.

use tracing::{debug, trace};

use super::error::{ensure_finite, LayoutError};
use super::types::{intersection_area, Direction, Point, Rect, Size};

/// The chosen placement: top-left anchor of the panel and its direction from the tap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub position: Point,
    pub direction: Direction,
}

/// A candidate rectangle together with its visible area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub rect: Rect,
    pub direction: Direction,
    pub visible_area: f64,
}

/// Build the four candidate rectangles in evaluation order (S, E, W, N)
pub fn candidates(tap: Point, panel: Size, offset: f64) -> [Rect; 4] {
    Direction::PRIORITY.map(|direction| candidate(tap, panel, offset, direction))
}

/// Build the candidate rectangle for a single direction
pub fn candidate(tap: Point, panel: Size, offset: f64, direction: Direction) -> Rect {
    let (w, h) = (panel.width, panel.height);
    let origin = match direction {
        Direction::South => Point::new(tap.x - w / 2.0, tap.y + offset),
        Direction::East => Point::new(tap.x + offset, tap.y - h / 2.0),
        Direction::West => Point::new(tap.x - w - offset, tap.y - h / 2.0),
        Direction::North => Point::new(tap.x - w / 2.0, tap.y - h - offset),
    };
    Rect::from_origin(origin, panel).with_label(direction)
}

/// Score every candidate against the viewport, in evaluation order.
///
/// Inputs are validated the same way as [`select_layout`].
pub fn rank_candidates(
    tap: Point,
    panel: Size,
    viewport: Size,
    offset: f64,
) -> Result<Vec<ScoredCandidate>, LayoutError> {
    let (tap, panel, viewport, offset) = validate(tap, panel, viewport, offset)?;
    Ok(score(tap, panel, viewport, offset).to_vec())
}

/// Choose the candidate placement with the most visible area.
///
/// Negative panel or viewport dimensions are clamped to zero. Zero and
/// negative offsets are accepted as given. Non-finite inputs fail, and so do
/// finite inputs large enough that the winning anchor overflows to infinity.
pub fn select_layout(
    tap: Point,
    panel: Size,
    viewport: Size,
    offset: f64,
) -> Result<Layout, LayoutError> {
    let (tap, panel, viewport, offset) = validate(tap, panel, viewport, offset)?;
    let scored = score(tap, panel, viewport, offset);

    let [first, rest @ ..] = scored;
    let best = rest.iter().fold(first, |best, next| {
        if next.visible_area > best.visible_area {
            trace!(
                from = %best.direction,
                to = %next.direction,
                area = next.visible_area,
                "candidate improves on current best"
            );
            *next
        } else {
            best
        }
    });

    debug!(
        direction = %best.direction,
        x = best.rect.x,
        y = best.rect.y,
        visible_area = best.visible_area,
        "selected menu placement"
    );

    let position = best.rect.origin();
    ensure_finite("position.x", position.x)?;
    ensure_finite("position.y", position.y)?;

    Ok(Layout {
        position,
        direction: best.direction,
    })
}

fn validate(
    tap: Point,
    panel: Size,
    viewport: Size,
    offset: f64,
) -> Result<(Point, Size, Size, f64), LayoutError> {
    let tap = Point::new(ensure_finite("tap.x", tap.x)?, ensure_finite("tap.y", tap.y)?);
    let panel = Size::new(
        ensure_finite("panel.width", panel.width)?,
        ensure_finite("panel.height", panel.height)?,
    );
    let viewport = Size::new(
        ensure_finite("viewport.width", viewport.width)?,
        ensure_finite("viewport.height", viewport.height)?,
    );
    let offset = ensure_finite("offset", offset)?;
    Ok((tap, panel.clamped(), viewport.clamped(), offset))
}

fn score(tap: Point, panel: Size, viewport: Size, offset: f64) -> [ScoredCandidate; 4] {
    let screen = Rect::viewport(viewport);
    Direction::PRIORITY.map(|direction| {
        let rect = candidate(tap, panel, offset, direction);
        let visible_area = intersection_area(&screen, &rect);
        trace!(%direction, x = rect.x, y = rect.y, visible_area, "scored candidate");
        ScoredCandidate {
            rect,
            direction,
            visible_area,
        }
    })
}
