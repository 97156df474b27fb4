//! エラー型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row {0} does not exist")]
    RowOutOfRange(usize),
    #[error("failed to encode timetable: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no row is being edited")]
    NotEditing,
    #[error("row {0} does not exist")]
    NoSuchRow(usize),
    #[error("slot {0} is outside the edited row")]
    SlotOutOfRange(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
}
