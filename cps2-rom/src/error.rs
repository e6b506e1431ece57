use thiserror::Error;

/// Errors surfaced by the region codec and catalog lookup.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("unknown ROM set {0:?}")]
    UnknownRomSet(String),

    #[error("missing {} file(s): {}", .0.len(), .0.join(", "))]
    MissingFiles(Vec<String>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog JSON is malformed: {0}")]
    Catalog(#[from] serde_json::Error),

    #[cfg(feature = "archive")]
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, RomError>;
