//! Error types for AssetTrack Core

use thiserror::Error;

/// Main error type for AssetTrack chrome operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Chrome error: {0}")]
    Chrome(#[from] ChromeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Panel registry misconfiguration errors
///
/// These are programmer errors, not user-triggered conditions. They surface
/// immediately so a trigger that does nothing never ships.
#[derive(Error, Debug)]
pub enum ChromeError {
    #[error("Panel already registered: {0}")]
    DuplicatePanel(String),

    #[error("Panel not registered: {0}")]
    UnknownPanel(String),

    #[error("Trigger not associated with any panel: {0}")]
    UnknownTrigger(String),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Connection pool error: {0}")]
    Pool(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Storage(StorageError::Pool(err.to_string()))
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
