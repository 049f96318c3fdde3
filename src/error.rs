//! Error types for reia-bootstrap.
//!
//! This module defines [`BootstrapError`], the error type that can end the
//! program, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures never surface here; they are absorbed by the detector
//!   (see [`crate::detection::ProbeError`]) and shown as status glyphs
//! - The terminal frontend failing to start is the only fatal condition
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for reia-bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The interactive terminal could not be started or drawn to.
    #[error("{message}")]
    RenderEngine { message: String },

    /// The key event source hung up before a quit was received.
    #[error("Input stream closed unexpectedly")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    /// Build a render engine failure from any displayable reason.
    pub fn render_engine(message: impl Into<String>) -> Self {
        Self::RenderEngine {
            message: message.into(),
        }
    }
}

/// Result type alias for reia-bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_engine_displays_message() {
        let err = BootstrapError::render_engine("stdout is not a terminal");
        assert_eq!(err.to_string(), "stdout is not a terminal");
    }

    #[test]
    fn input_closed_has_message() {
        assert!(BootstrapError::InputClosed
            .to_string()
            .contains("Input stream closed"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: BootstrapError = io_err.into();
        assert!(matches!(err, BootstrapError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: BootstrapError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BootstrapError::InputClosed)
        }
        assert!(returns_error().is_err());
    }
}
