use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("File is empty")]
    EmptyUpload,

    #[error("File is {size} bytes, the limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("No object {bucket}/{name}")]
    NotFound { bucket: String, name: String },
}
