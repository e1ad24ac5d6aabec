use crate::error::foundation::FoundationError;
use crate::error::structured_file::StructuredFileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine the whoami configuration directory")]
    DetermineConfigDirectoryFailed(#[source] FoundationError),

    #[error("Failed to determine the session storage directory")]
    DetermineSessionDirectoryFailed(#[source] FoundationError),

    #[error("Failed to load whoami configuration")]
    LoadConfigFailed(#[source] StructuredFileError),

    #[error("Invalid identity provider URL '{0}'")]
    InvalidIdentityProviderUrl(String, #[source] url::ParseError),

    #[error("Invalid page URL '{0}'")]
    InvalidPageUrl(String, #[source] url::ParseError),
}
