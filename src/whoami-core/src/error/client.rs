use crate::error::delegation::DelegationError;
use crate::error::fs::{EnsureDirExistsError, RemoveFileError};
use crate::error::structured_file::StructuredFileError;
use thiserror::Error;

/// Failures reported by an identity client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Session storage is unavailable: {0}")]
    StorageUnavailable(EnsureDirExistsError),

    #[error("Failed to read the stored session")]
    ReadSessionFailed(#[source] StructuredFileError),

    #[error("Failed to save the session")]
    SaveSessionFailed(#[source] StructuredFileError),

    #[error("Failed to remove the stored session")]
    RemoveSessionFailed(#[source] RemoveFileError),

    #[error("The stored session is invalid: {0}")]
    InvalidSession(DelegationError),

    #[error("Failed to obtain a delegation from the identity provider: {0}")]
    DelegationRequestFailed(String),

    #[error("{0}")]
    Provider(String),
}
