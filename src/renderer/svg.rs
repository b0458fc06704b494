//! SVG preview of a menu placement
//!
//! Draws the viewport, the four candidate placements, the chosen panel, the
//! stem and the tap point. Useful for eyeballing why a placement was chosen.

use crate::layout::{candidates, Point, Rect, Size};
use crate::menu::Placement;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle with the given class suffix
    pub fn add_rect(&mut self, id: Option<&str>, rect: &Rect, class: &str) {
        let prefix = self.prefix();
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        self.elements.push(format!(
            r#"{}<rect{} class="{}{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            id_attr,
            prefix,
            class,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        ));
    }

    /// Add a straight line segment
    pub fn add_line(&mut self, from: Point, to: Point, class: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<line class="{}{}" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.indent_str(),
            prefix,
            class,
            from.x,
            from.y,
            to.x,
            to.y
        ));
    }

    /// Add a circle marker
    pub fn add_circle(&mut self, center: Point, r: f64, class: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}{}" cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            prefix,
            class,
            center.x,
            center.y,
            r
        ));
    }

    /// Add a centered text label
    pub fn add_text(&mut self, text: &str, at: Point, class: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            prefix,
            class,
            at.x,
            at.y,
            escape_xml(text)
        ));
    }

    /// Produce the final document covering `viewbox`
    pub fn build(self, viewbox: Rect) -> String {
        let padding = self.config.viewbox_padding;
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            viewbox.x - padding,
            viewbox.y - padding,
            viewbox.width + 2.0 * padding,
            viewbox.height + 2.0 * padding
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a placement inside its viewport as an SVG document
pub fn render_svg(placement: &Placement, viewport: Size, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let screen = Rect::viewport(viewport.clamped());
    let panel = Rect::from_origin(placement.layout.position, placement.panel);

    builder.add_rect(Some("viewport"), &screen, "viewport");

    let mut bounds = screen.union(&panel);
    for candidate in candidates(placement.tap, placement.panel, placement.stem.length) {
        let Some(direction) = candidate.label else {
            continue;
        };
        if direction != placement.layout.direction {
            builder.add_rect(None, &candidate, "candidate");
        }
        bounds = bounds.union(&candidate);
    }

    builder.add_rect(Some("panel"), &panel, "panel");
    builder.add_text(
        placement.layout.direction.as_str(),
        panel.center(),
        "direction",
    );

    // Stem segment is panel-local; shift it into screen space
    let (start, end) = placement.stem.segment();
    let anchor = placement.layout.position;
    builder.add_line(
        Point::new(anchor.x + start.x, anchor.y + start.y),
        Point::new(anchor.x + end.x, anchor.y + end.y),
        "stem",
    );
    builder.add_circle(placement.tap, config.tap_radius, "tap");

    builder.build(bounds)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crate::layout::LayoutConfig;
    use crate::menu::PointMenu;

    fn north_placement() -> Placement {
        let config = MenuConfig::new().with_layout(LayoutConfig::new().with_offset(80.0));
        let mut menu = PointMenu::new(Size::new(200.0, 100.0), Size::new(1000.0, 800.0), config);
        menu.open_at(Point::new(500.0, 780.0)).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_render_contains_panel_and_stem() {
        let svg = render_svg(&north_placement(), Size::new(1000.0, 800.0), &SvgConfig::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(
            r#"<rect id="panel" class="pm-panel" x="400" y="600" width="200" height="100"/>"#
        ));
        assert!(svg.contains(r#"<line class="pm-stem" x1="500" y1="700" x2="500" y2="780"/>"#));
        assert!(svg.contains(r#"<circle class="pm-tap" cx="500" cy="780" r="4"/>"#));
        assert!(svg.contains(">N</text>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_draws_other_candidates() {
        let svg = render_svg(&north_placement(), Size::new(1000.0, 800.0), &SvgConfig::default());
        assert_eq!(svg.matches("pm-candidate").count(), 3);
    }

    #[test]
    fn test_viewbox_covers_offscreen_candidates() {
        let config = SvgConfig::new().with_viewbox_padding(0.0);
        let svg = render_svg(&north_placement(), Size::new(1000.0, 800.0), &config);
        // The south candidate hangs below the viewport, down to y = 960
        assert!(svg.contains(r#"viewBox="0 0 1000 960""#));
    }

    #[test]
    fn test_tap_radius_sizes_marker() {
        let config = SvgConfig::new().with_tap_radius(9.0);
        let svg = render_svg(&north_placement(), Size::new(1000.0, 800.0), &config);
        assert!(svg.contains(r#"<circle class="pm-tap" cx="500" cy="780" r="9"/>"#));
    }

    #[test]
    fn test_compact_output_without_prefix() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .without_class_prefix();
        let svg = render_svg(&north_placement(), Size::new(1000.0, 800.0), &config);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
        assert!(svg.contains(r#"class="panel""#));
    }
}
