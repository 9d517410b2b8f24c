//! Error types for panel construction and rendering.

use thiserror::Error;

/// Result type alias for panel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering panels.
///
/// All of these are programmer or configuration mistakes. Nothing is clamped
/// or guessed: a bad placement fails the build of that panel.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown keyword, out-of-range selection, or otherwise unusable placement
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A geometric operation was given input it cannot work with
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// A placement was issued after the panel started rendering
    #[error("Panel '{0}' has already been rendered; no further placements are accepted")]
    Phase(String),

    /// Malformed panel definition
    #[error("Failed to read panel definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A rendered document did not parse back as XML
    #[error("Rendered markup is not well-formed: {0}")]
    Markup(#[from] roxmltree::Error),

    /// Failed to assemble an archive of rendered files
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O failure while writing an archive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}
