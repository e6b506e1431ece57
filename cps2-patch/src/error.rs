use thiserror::Error;

/// Errors surfaced by the patch engine.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("invalid patch format: {0}")]
    InvalidPatchFormat(String),

    #[error("mismatched sizes: expected {expected} bytes, got {actual} bytes")]
    MismatchedSizes { expected: usize, actual: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, PatchError>;
