//! CSS transform strings for applying a placement to a rendered panel

use crate::layout::{Layout, StemLayout};

use super::animation::Frame;

/// Transform that moves the panel to its chosen anchor
pub fn panel_transform(layout: &Layout) -> String {
    format!(
        "translate({}px, {}px)",
        num(layout.position.x),
        num(layout.position.y)
    )
}

/// Transform for the stem element inside the panel.
///
/// The stem is a horizontal line by default; vertical placements rotate it
/// by 90 degrees around its starting point.
pub fn stem_transform(stem: &StemLayout) -> String {
    let (start, _) = stem.segment();
    if stem.is_rotated() {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            num(start.x),
            num(start.y),
            num(stem.rotation_degrees)
        )
    } else {
        format!("translate({}px, {}px)", num(start.x), num(start.y))
    }
}

/// Transform and opacity declarations for one animation frame, layered on
/// top of the panel's resting transform
pub fn frame_style(layout: &Layout, frame: &Frame) -> String {
    format!(
        "transform: translate({}px, {}px) scale({}); opacity: {};",
        num(layout.position.x + frame.translate.x),
        num(layout.position.y + frame.translate.y),
        num(frame.scale),
        num(frame.opacity)
    )
}

/// Format a number without a trailing `.0` and without negative zero
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Direction, Point};
    use pretty_assertions::assert_eq;

    fn north() -> Layout {
        Layout {
            position: Point::new(400.0, 600.0),
            direction: Direction::North,
        }
    }

    #[test]
    fn test_panel_transform() {
        assert_eq!(panel_transform(&north()), "translate(400px, 600px)");
    }

    #[test]
    fn test_panel_transform_fractional() {
        let layout = Layout {
            position: Point::new(12.5, -0.0),
            direction: Direction::East,
        };
        assert_eq!(panel_transform(&layout), "translate(12.5px, 0px)");
    }

    #[test]
    fn test_vertical_stem_is_rotated() {
        let stem = StemLayout::new(Point::new(500.0, 780.0), &north(), 80.0);
        assert_eq!(
            stem_transform(&stem),
            "translate(100px, 100px) rotate(90deg)"
        );
    }

    #[test]
    fn test_horizontal_stem_is_not_rotated() {
        let layout = Layout {
            position: Point::new(90.0, 350.0),
            direction: Direction::East,
        };
        let stem = StemLayout::new(Point::new(10.0, 400.0), &layout, 80.0);
        assert_eq!(stem_transform(&stem), "translate(-80px, 50px)");
    }

    #[test]
    fn test_settled_frame_style() {
        assert_eq!(
            frame_style(&north(), &Frame::settled()),
            "transform: translate(400px, 600px) scale(1); opacity: 1;"
        );
    }
}
