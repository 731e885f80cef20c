//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (malformed hex, bad palette data)
//! - 11: I/O error (writing an export file)
//! - 12: input error (unknown palette kind, format, or collection name)
//! - 13: serialization error

use colorscope_core::ColorError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A color-level error (malformed hex string).
    Color(ColorError),
    /// An I/O error (export file write).
    Io(String),
    /// A user input error (unknown kind/format/collection name).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Serialization(msg) => CliError::Serialization(msg),
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_exit_code_is_10() {
        let err = CliError::Color(ColorError::InvalidColor("#nope".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("unknown kind".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_color_error_serialization_routes_to_serialization() {
        let err = CliError::from(ColorError::Serialization("oops".into()));
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn from_color_error_other_routes_to_color() {
        let err = CliError::from(ColorError::InvalidColor("#XYZ".into()));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("#XYZ"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad.unwrap_err());
        assert_eq!(err.exit_code(), 13);
    }
}
