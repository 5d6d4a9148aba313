use thiserror::Error;

use crate::domain::ParseAmountError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    /// True when the data file exists but its contents are unusable.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(
            self,
            AppError::Storage(
                StorageError::CorruptData { .. } | StorageError::InvalidRecord { .. }
            )
        )
    }
}
