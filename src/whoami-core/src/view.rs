//! The conditional view tree derived from a session snapshot.
use crate::principal::format_principal;
use crate::session::{Session, SessionState};

pub const SECURE_CONTEXT_NOTE: &str = "This could be because the identity client could not \
set up secure storage for its session. Make sure the page is served from a secure context \
(HTTPS) and that the session directory is writable.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Shown until the page becomes interactive.
    Placeholder,
    Page(Page),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub error: Option<ErrorBox>,
    pub about: About,
    pub action: Action,
    pub complete_authentication: bool,
    pub principal: Option<PrincipalPanel>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBox {
    pub message: String,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum About {
    SignedOut,
    SignedIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Processing,
    Login,
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrincipalPanel {
    pub full: String,
    pub shortened: String,
}

impl About {
    pub fn text(self) -> &'static str {
        match self {
            About::SignedOut => "Currently you're not logged in. After logging in with Internet Identity, you'll see your unique principal ID.",
            About::SignedIn => "You're currently logged in with Internet Identity. Your unique principal ID is displayed below.",
        }
    }
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Processing => "Processing...",
            Action::Login => "Login with Internet Identity",
            Action::Logout => "Logout",
        }
    }
}

pub fn render(session: &Session) -> View {
    if session.state() == &SessionState::Uninitialized && session.error().is_none() {
        return View::Placeholder;
    }

    let action = if session.loading() {
        Action::Processing
    } else if session.authenticated() {
        Action::Logout
    } else {
        Action::Login
    };

    View::Page(Page {
        error: session.error().map(|message| ErrorBox {
            message: message.to_string(),
            note: SECURE_CONTEXT_NOTE,
        }),
        about: if session.authenticated() {
            About::SignedIn
        } else {
            About::SignedOut
        },
        action,
        complete_authentication: !session.loading()
            && session.redirect_target().is_some()
            && session.principal().is_some(),
        principal: session.principal().map(|principal| PrincipalPanel {
            full: principal.to_string(),
            shortened: format_principal(Some(principal)),
        }),
    })
}
