use thiserror::Error;

/// Errors surfaced by the codec and the file store.
///
/// I/O failures and malformed input are distinct and both recoverable.
/// Neither leaves a partially populated record behind: decoding either
/// returns a complete record or nothing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record truncated")]
    Truncated,
    #[error("Malformed record: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
