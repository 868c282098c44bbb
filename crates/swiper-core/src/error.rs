use std::fmt;

/// Rejected step or direction configuration.
///
/// Only configuration entry points return this; drag frames and releases
/// never fail, they degrade to drawing or committing nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidEndX { end_x: f32 },
    InvalidThreshold { threshold: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEndX { end_x } => {
                write!(f, "step end_x must be finite and >= 0, got {end_x}")
            }
            ConfigError::InvalidThreshold { threshold } => {
                write!(f, "commit threshold must be finite and >= 0, got {threshold}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn validate_distance(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_value() {
        let err = ConfigError::InvalidEndX { end_x: -4.0 };
        assert_eq!(err.to_string(), "step end_x must be finite and >= 0, got -4");
    }

    #[test]
    fn distances_must_be_finite_and_non_negative() {
        assert!(validate_distance(0.0));
        assert!(validate_distance(120.5));
        assert!(!validate_distance(-0.5));
        assert!(!validate_distance(f32::NAN));
        assert!(!validate_distance(f32::INFINITY));
    }
}
