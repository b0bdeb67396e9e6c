//! Error types for the page controller.

use thiserror::Error;

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, PageError>;

/// Page controller errors.
///
/// Empty form fields are not errors: they are reported to the visitor with a
/// blocking alert. These variants cover pages that do not provide the
/// structure a handler expects, and failures of the host itself.
#[derive(Debug, Error)]
pub enum PageError {
    /// An element the handler relies on is not on the page
    #[error("Element not found: {selector}")]
    MissingElement { selector: String },

    /// Selector could not be parsed by the host
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Browser API failure (navigation, observers, listeners)
    #[error("Host error: {0}")]
    Host(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}
