//! Configuration for placement selection

/// Configuration options for choosing a menu placement
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Clearance between the tap point and the panel's near edge, in pixels.
    /// The stem is drawn across this gap.
    pub offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { offset: 40.0 }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stem clearance offset
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.offset, 40.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new().with_offset(80.0);
        assert_eq!(config.offset, 80.0);
    }
}
