//! Configuration errors.

use thiserror::Error;

/// Invalid configuration value, raised when a component is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be non-negative (got {value})")]
    Negative { field: String, value: f32 },

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: String, value: f32 },

    #[error("{field} must be finite (got {value})")]
    NotFinite { field: String, value: f32 },

    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: String, value: f32 },
}

impl ConfigError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::Negative { field, .. }
            | Self::NonPositive { field, .. }
            | Self::NotFinite { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// Require `value` to be finite and `>= 0`.
pub(crate) fn non_negative(field: impl Into<String>, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite {
            field: field.into(),
            value,
        });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative {
            field: field.into(),
            value,
        });
    }
    Ok(value)
}

/// Require `value` to be finite and `> 0`.
pub(crate) fn positive(field: impl Into<String>, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite {
            field: field.into(),
            value,
        });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive {
            field: field.into(),
            value,
        });
    }
    Ok(value)
}

/// Require `value` to be finite.
pub(crate) fn finite(field: impl Into<String>, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite {
            field: field.into(),
            value,
        })
    }
}

/// Errors that can occur when loading a YAML configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config validation error: {0}")]
    Invalid(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validators() {
        assert_eq!(non_negative("margin", 0.0), Ok(0.0));
        assert!(matches!(
            non_negative("margin", -0.1),
            Err(ConfigError::Negative { .. })
        ));
        assert!(matches!(
            positive("speed", 0.0),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(matches!(
            finite("extent", f32::NAN),
            Err(ConfigError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = non_negative("rectangles[1].width", -2.0).unwrap_err();
        assert_eq!(err.field(), "rectangles[1].width");
        assert_eq!(
            err.to_string(),
            "rectangles[1].width must be non-negative (got -2)"
        );
    }
}
