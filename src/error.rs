//! Error handling for the booking page widgets

/// Widget error type
///
/// None of these ever reach the page: a widget that fails to mount is simply
/// skipped, and a broken payload degrades to its empty default.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Missing anchor: [{0}]")]
    MissingAnchor(&'static str),

    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
