//! Options for the SVG placement preview

/// How the preview document is framed and marked up
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Margin added around the viewport and every candidate, so candidates
    /// hanging off-screen stay visible in the preview
    pub viewbox_padding: f64,

    /// Emit the `<?xml ...?>` declaration (off when embedding in HTML)
    pub standalone: bool,

    /// One element per line; off for single-line output
    pub pretty_print: bool,

    /// Prepended to every class name (`viewport`, `candidate`, `panel`,
    /// `stem`, `tap`, `direction`); `None` leaves them bare
    pub class_prefix: Option<String>,

    /// Radius of the dot drawn at the tap point
    pub tap_radius: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("pm-".to_string()),
            tap_radius: 4.0,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Leave preview class names unprefixed
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Size of the tap marker; zero hides it
    pub fn with_tap_radius(mut self, radius: f64) -> Self {
        self.tap_radius = radius.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_defaults() {
        let config = SvgConfig::default();
        assert_eq!(config.viewbox_padding, 20.0);
        assert!(config.standalone);
        assert_eq!(config.class_prefix.as_deref(), Some("pm-"));
        assert_eq!(config.tap_radius, 4.0);
    }

    #[test]
    fn test_tap_radius_never_negative() {
        assert_eq!(SvgConfig::new().with_tap_radius(7.5).tap_radius, 7.5);
        assert_eq!(SvgConfig::new().with_tap_radius(-2.0).tap_radius, 0.0);
    }

    #[test]
    fn test_embedded_compact_preview() {
        let config = SvgConfig::new()
            .with_viewbox_padding(0.0)
            .with_standalone(false)
            .with_pretty_print(false)
            .without_class_prefix();

        assert_eq!(config.viewbox_padding, 0.0);
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert!(config.class_prefix.is_none());
    }
}
