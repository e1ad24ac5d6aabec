use std::fmt;

/// Where the session is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Initializing,
    Unauthenticated,
    Authenticating,
    Authenticated,
    FetchingIdentity,
    LoggingOut,
    /// An operation failed. Not terminal: login and logout are still accepted.
    Failed {
        previous: Box<SessionState>,
        message: String,
    },
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Uninitialized => write!(f, "uninitialized"),
            SessionState::Initializing => write!(f, "initializing"),
            SessionState::Unauthenticated => write!(f, "unauthenticated"),
            SessionState::Authenticating => write!(f, "authenticating"),
            SessionState::Authenticated => write!(f, "authenticated"),
            SessionState::FetchingIdentity => write!(f, "fetching identity"),
            SessionState::LoggingOut => write!(f, "logging out"),
            SessionState::Failed { previous, .. } => write!(f, "failed (while {previous})"),
        }
    }
}

/// The asynchronous operation currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    Login,
    Logout,
    FetchIdentity,
}

/// A snapshot of the session, as handed to the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    in_flight: Option<Operation>,
    authenticated: bool,
    principal: Option<String>,
    error: Option<String>,
    redirect_target: Option<String>,
    window_closed: bool,
}

impl Session {
    pub(crate) fn new(redirect_target: Option<String>) -> Self {
        Self {
            state: SessionState::Uninitialized,
            in_flight: None,
            authenticated: false,
            principal: None,
            error: None,
            redirect_target,
            window_closed: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<Operation> {
        self.in_flight
    }

    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_target.as_deref()
    }

    /// True once the principal has been handed off and the window closed.
    pub fn window_closed(&self) -> bool {
        self.window_closed
    }

    pub fn is_initialized(&self) -> bool {
        self.state != SessionState::Uninitialized
    }

    /// `principal` is only ever set while `authenticated` is.
    pub fn invariants_hold(&self) -> bool {
        self.principal.is_none() || self.authenticated
    }

    pub(crate) fn begin(&mut self, operation: Operation, state: SessionState) {
        self.in_flight = Some(operation);
        self.state = state;
    }

    pub(crate) fn finish(&mut self, state: SessionState) {
        self.in_flight = None;
        self.state = state;
    }

    pub(crate) fn fail(&mut self, message: String) {
        let previous = match std::mem::replace(&mut self.state, SessionState::Uninitialized) {
            SessionState::Failed { previous, .. } => previous,
            state => Box::new(state),
        };
        self.state = SessionState::Failed {
            previous,
            message: message.clone(),
        };
        self.in_flight = None;
        self.error = Some(message);
    }

    /// Records an error without leaving the current state.
    pub(crate) fn reject(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        if !authenticated {
            self.principal = None;
        }
    }

    pub(crate) fn set_principal(&mut self, principal: String) {
        debug_assert!(self.authenticated);
        self.principal = Some(principal);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn close_window(&mut self) {
        self.window_closed = true;
    }
}
