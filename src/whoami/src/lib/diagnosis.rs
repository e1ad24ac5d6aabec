use anyhow::Error as AnyhowError;
use whoami_core::client::stored::USER_INTERRUPT;
use whoami_core::error::handoff::HandoffError;
use whoami_core::error::session::SessionError;
use whoami_core::view::SECURE_CONTEXT_NOTE;

/// Contains two Option<Strings> that can be displayed to the user:
///   - Error explanation: Goes into a bit of detail on what the error is.
///   - Action suggestion: Tells the user how to move forward to resolve the error.
pub type Diagnosis = (Option<String>, Option<String>);
pub const NULL_DIAGNOSIS: Diagnosis = (None, None);

/// Attempts to give helpful suggestions on how to resolve errors.
pub fn diagnose(err: &AnyhowError) -> Diagnosis {
    let Some(session_err) = err.downcast_ref::<SessionError>() else {
        return NULL_DIAGNOSIS;
    };
    match session_err {
        SessionError::Initialization(_) => diagnose_initialization(),
        SessionError::LoginRejected(message) if message == USER_INTERRUPT => (
            Some("The login was cancelled before Internet Identity returned a delegation.".to_string()),
            Some("Run 'whoami login' again and paste the delegation chain when asked.".to_string()),
        ),
        SessionError::LoginRejected(message) if message.contains("expired") => (
            Some("The delegation chain has already expired.".to_string()),
            Some("Sign in again to obtain a fresh delegation, then rerun 'whoami login'.".to_string()),
        ),
        SessionError::Handoff(HandoffError::ClipboardUnavailable(_)) => (
            Some("The system clipboard could not be reached, so the principal was not handed off.".to_string()),
            Some("Copy the principal ID shown above by hand. 'whoami logout' still works without a clipboard.".to_string()),
        ),
        _ => NULL_DIAGNOSIS,
    }
}

fn diagnose_initialization() -> Diagnosis {
    let action_suggestion = "Set 'session_dir' in the whoami config file to a writable directory, \
        or fix the permissions of the default one.";
    (
        Some(SECURE_CONTEXT_NOTE.to_string()),
        Some(action_suggestion.to_string()),
    )
}
