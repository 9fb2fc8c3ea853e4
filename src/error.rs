//! Errors raised by the contrast engine.

/// Errors raised while reading colors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The string was not 6 hex digits, optionally prefixed with `#`.
    #[error("invalid color format {input:?}: expected 6 hex digits, optionally prefixed with `#`")]
    InvalidColorFormat {
        /// The rejected input, as given.
        input: String,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
