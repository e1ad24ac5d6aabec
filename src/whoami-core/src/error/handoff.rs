use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("Cannot complete authentication: no redirect scheme was supplied")]
    NoRedirectTarget(),

    #[error("Cannot complete authentication: no principal is available")]
    NoPrincipal(),

    #[error("Hand-off failed: could not write to the clipboard: {0}")]
    ClipboardUnavailable(String),
}
