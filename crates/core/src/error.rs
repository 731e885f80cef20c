//! Error types for the colorscope core.

use thiserror::Error;

/// Errors produced by color operations.
///
/// Every error is local and recoverable: a malformed input fails the one
/// call that received it and nothing else.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette kind name was not recognized by the registry.
    #[error("unknown palette kind: {0}")]
    UnknownPalette(String),

    /// An export format name was not recognized.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// A JSON body could not be produced.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ColorError {
    fn from(e: serde_json::Error) -> Self {
        ColorError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_input() {
        let err = ColorError::InvalidColor("#XYZ".into());
        let msg = format!("{err}");
        assert!(msg.contains("#XYZ"), "missing input in: {msg}");
    }

    #[test]
    fn unknown_palette_includes_name() {
        let err = ColorError::UnknownPalette("pastel".into());
        let msg = format!("{err}");
        assert!(msg.contains("pastel"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_format_includes_name() {
        let err = ColorError::UnknownFormat("yaml".into());
        let msg = format!("{err}");
        assert!(msg.contains("yaml"), "missing name in: {msg}");
    }

    #[test]
    fn serde_json_error_routes_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = ColorError::from(bad.unwrap_err());
        assert!(matches!(err, ColorError::Serialization(_)));
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
