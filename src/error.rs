//! Error types for the outer surfaces of the crate.
//!
//! The per-tick simulation itself never fails: numeric hazards (asin domain,
//! zero-length trail arcs, zero fade distance) are clamped where they occur.
//! Errors only come from loading settings, restoring stored state and
//! decoding external actions.

use std::fmt;
use std::path::PathBuf;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug)]
pub enum SimError {
    /// Settings file could not be read or written.
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings JSON was malformed.
    SettingsParse(serde_json::Error),

    /// A tunable is outside the range the simulation can handle.
    InvalidSetting {
        /// Field name as it appears in the settings file.
        name: &'static str,
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// RL action code outside {0, 1, 2}.
    InvalidAction(u8),

    /// Stored trail holds more points than its capacity.
    TrailOverflow { len: usize, capacity: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::SettingsIo { path, source } => {
                write!(f, "settings file '{}': {}", path.display(), source)
            }
            SimError::SettingsParse(err) => write!(f, "settings parse error: {}", err),
            SimError::InvalidSetting {
                name,
                value,
                expected,
            } => write!(
                f,
                "setting '{}' has value {} but must be {}",
                name, value, expected
            ),
            SimError::InvalidAction(code) => {
                write!(f, "invalid action {} (expected 0, 1 or 2)", code)
            }
            SimError::TrailOverflow { len, capacity } => {
                write!(f, "trail holds {} points but capacity is {}", len, capacity)
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::SettingsIo { source, .. } => Some(source),
            SimError::SettingsParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::SettingsParse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_invalid_setting() {
        let err = SimError::InvalidSetting {
            name: "planet_friction",
            value: 1.5,
            expected: "in (0, 1)",
        };
        assert_eq!(
            err.to_string(),
            "setting 'planet_friction' has value 1.5 but must be in (0, 1)"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SimError::from(json_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("settings parse error"));
    }
}
