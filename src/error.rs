//! Errors raised by the platform layer.
//!
//! The simulation itself is total; only window creation and frame
//! presentation can fail.

/// Result alias carrying [`MandalaError`].
pub type Result<T> = std::result::Result<T, MandalaError>;

#[derive(Debug, thiserror::Error)]
pub enum MandalaError {
    /// Window creation or buffer update failed in the windowing backend.
    #[error("{0}")]
    Window(#[from] minifb::Error),
    #[error("{0}")]
    Message(String),
}

impl MandalaError {
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for MandalaError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}
