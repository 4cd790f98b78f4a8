/*!
Error handling for key template construction.
*/

use thiserror::Error;

/// Result type for template construction
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for template construction
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter value cannot be represented on the wire
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Malformed wire bytes encountered while decoding
    #[error("Invalid wire format: {0}")]
    InvalidFormat(String),

    /// Structurally invalid template
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Convert a string to an Error::Encoding
pub fn encoding_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::Encoding(msg.into()))
}

/// Convert a string to an Error::InvalidFormat
pub fn format_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::InvalidFormat(msg.into()))
}

/// Convert a string to an Error::InvalidTemplate
pub fn template_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::InvalidTemplate(msg.into()))
}
