//! Error types for modmark.
//!
//! Rendering Markdown never fails; these cover the edges around it.

use thiserror::Error;

/// Result type for modmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside of the (total) render path.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Placeholder image options were rejected.
    #[error("Invalid placeholder option: {0}")]
    InvalidPlaceholder(String),
}
