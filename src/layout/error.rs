//! Error types for placement selection

use thiserror::Error;

/// Errors that can occur during layout selection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An input coordinate, dimension or offset was NaN or infinite
    #[error("non-finite value {value} for '{field}'")]
    NonFinite { field: &'static str, value: f64 },
}

impl LayoutError {
    /// Create a non-finite input error
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }

    /// Name of the offending input
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonFinite { field, .. } => field,
        }
    }
}

/// Reject NaN and infinite inputs, naming the field that carried them
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::non_finite(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let err = LayoutError::non_finite("tap.x", f64::NAN);
        assert!(err.to_string().contains("tap.x"));
        assert_eq!(err.field(), "tap.x");
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("offset", 40.0), Ok(40.0));
        assert!(ensure_finite("offset", f64::INFINITY).is_err());
    }
}
