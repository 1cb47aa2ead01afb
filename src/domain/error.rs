//! Error types for the book browser.
//!
//! Browsing itself never fails: empty results, stale identifiers and an
//! exhausted "show more" are all handled as silent no-ops by the controller.
//! The variants below cover the setup path only (loading the dataset, reading
//! configuration and palettes, talking to the terminal).

use thiserror::Error;

/// The main error type for book browser operations.
///
/// # Examples
///
/// ```
/// use book_browser::BrowserError;
///
/// fn validate_page_size(size: usize) -> Result<usize, BrowserError> {
///     if size == 0 {
///         return Err(BrowserError::Config("page_size must be positive".to_string()));
///     }
///     Ok(size)
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The catalog dataset could not be parsed or failed validation.
    ///
    /// Raised for malformed JSON, unparseable publication dates and duplicate
    /// book identifiers.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A color palette could not be read or contains an invalid color.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// Raised for a zero or non-numeric page size, an unknown theme name, or
    /// a config file that is not valid TOML.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for book browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
