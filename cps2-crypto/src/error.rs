//! Error types for cps2-crypto operations.

use thiserror::Error;

/// Result type for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur while deriving keys or running the cipher.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Image byte length was odd; the cipher only operates on whole 16-bit words.
    #[error("invalid image length: {0} bytes is not even")]
    InvalidImageLength(usize),

    /// Key blob was shorter than the 20 bytes the master-key extraction requires.
    #[error("invalid key: expected at least 20 bytes, got {0}")]
    InvalidKey(usize),
}
