use crate::error::client::ClientError;
use crate::error::handoff::HandoffError;
use thiserror::Error;

/// Failures surfaced by the session controller.
///
/// The display form of each variant is what ends up in `Session::error`.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Auth initialization failed: {0}")]
    Initialization(ClientError),

    #[error("Cannot login: Auth client not initialized")]
    ClientNotInitialized(),

    #[error("Login failed: {0}")]
    LoginRejected(String),

    #[error("Login failed: the identity provider closed without responding")]
    LoginAbandoned(),

    #[error("Login exception: {0}")]
    LoginException(ClientError),

    #[error("Failed to fetch principal ID: {0}")]
    IdentityFetch(ClientError),

    #[error("Logout failed: {0}")]
    Logout(ClientError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),
}
