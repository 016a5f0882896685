//! Error types for Leviathan

use thiserror::Error;

/// Main error type for Leviathan operations
#[derive(Error, Debug)]
pub enum LeviathanError {
    /// Error during local storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation requires a signed-in user
    #[error("Please sign in to {0}")]
    NotSignedIn(String),

    /// File was refused by the upload filter
    #[error("Upload rejected: {0}")]
    UploadRejected(#[from] crate::upload::UploadRejection),
}

/// Result type alias using LeviathanError
pub type LeviathanResult<T> = Result<T, LeviathanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LeviathanError::NotSignedIn("upload files".to_string());
        assert_eq!(format!("{}", err), "Please sign in to upload files");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LeviathanError = io_err.into();
        assert!(matches!(err, LeviathanError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LeviathanError = json_err.into();
        assert!(matches!(err, LeviathanError::Serialization(_)));
    }
}
