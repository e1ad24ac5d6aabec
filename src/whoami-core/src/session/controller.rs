use crate::client::{AuthClient, ClientFactory, Identity, LoginOptions};
use crate::error::handoff::HandoffError;
use crate::error::session::SessionError;
use crate::handoff::{deliver, HandoffHost};
use crate::location::PageLocation;
use crate::principal::handoff_token;
use crate::session::state::{Operation, Session, SessionState};
use slog::{debug, error, info, trace, Logger};
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerSettings {
    pub identity_provider: Url,
    pub app_prefix: String,
}

/// Drives a [`Session`] through initialization, login and logout against an identity
/// client, and hands the principal off when the page was opened by another application.
///
/// The client handle is created at most once, by [`SessionController::start`]. Failures
/// are recorded in the session (and returned); nothing is retried automatically.
pub struct SessionController<F: ClientFactory, H: HandoffHost> {
    factory: F,
    client: Option<F::Client>,
    host: H,
    settings: ControllerSettings,
    location: PageLocation,
    session: Session,
    logger: Logger,
}

fn begin(logger: &Logger, session: &mut Session, operation: Operation, state: SessionState) {
    debug!(logger, "Session transition"; "from" => %session.state(), "to" => %state, "operation" => ?operation);
    session.begin(operation, state);
}

fn finish(logger: &Logger, session: &mut Session, state: SessionState) {
    debug!(logger, "Session transition"; "from" => %session.state(), "to" => %state);
    session.finish(state);
}

impl<F: ClientFactory, H: HandoffHost> SessionController<F, H> {
    pub fn new(
        factory: F,
        host: H,
        settings: ControllerSettings,
        location: PageLocation,
        logger: Logger,
    ) -> Self {
        let session = Session::new(location.redirect_scheme());
        Self {
            factory,
            client: None,
            host,
            settings,
            location,
            session,
            logger,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Constructs the client and queries its status. Runs once; later calls do nothing.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        if self.session.is_initialized() {
            trace!(self.logger, "Auth client already initialized");
            return Ok(());
        }

        info!(self.logger, "Initializing auth client...");
        begin(
            &self.logger,
            &mut self.session,
            Operation::Initialize,
            SessionState::Initializing,
        );

        let created = self.factory.create().await;
        let client = match created {
            Ok(client) => client,
            Err(err) => return Err(self.fail(SessionError::Initialization(err))),
        };
        let status = client.is_authenticated().await;
        let authenticated = match status {
            Ok(authenticated) => authenticated,
            Err(err) => return Err(self.fail(SessionError::Initialization(err))),
        };
        self.client = Some(client);
        info!(self.logger, "Auth client initialized"; "authenticated" => authenticated);

        self.apply_status(authenticated).await
    }

    pub async fn login(&mut self) -> Result<(), SessionError> {
        let Some(client) = self.client.as_ref() else {
            return Err(self.reject(SessionError::ClientNotInitialized()));
        };

        info!(self.logger, "Starting login process..."; "identity_provider" => %self.settings.identity_provider);
        begin(
            &self.logger,
            &mut self.session,
            Operation::Login,
            SessionState::Authenticating,
        );

        let (options, outcome) = LoginOptions::bridged(self.settings.identity_provider.clone());
        let call = client.login(options).await;
        if let Err(err) = call {
            return Err(self.fail(SessionError::LoginException(err)));
        }

        match outcome.await {
            Ok(Ok(())) => {
                info!(self.logger, "Login successful");
                self.refresh_status().await
            }
            Ok(Err(message)) => Err(self.fail(SessionError::LoginRejected(message))),
            Err(_) => Err(self.fail(SessionError::LoginAbandoned())),
        }
    }

    /// Signs out and re-queries the client. Does nothing when there is no session to end.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        let Some(client) = self.client.as_ref() else {
            debug!(self.logger, "No auth client; nothing to log out of");
            return Ok(());
        };
        if !self.session.authenticated() {
            debug!(self.logger, "Not authenticated; nothing to log out of");
            return Ok(());
        }

        info!(self.logger, "Logging out");
        begin(
            &self.logger,
            &mut self.session,
            Operation::Logout,
            SessionState::LoggingOut,
        );
        let result = client.logout().await;
        if let Err(err) = result {
            return Err(self.fail(SessionError::Logout(err)));
        }

        self.session.set_authenticated(false);
        self.location.clear_principal_id();
        self.refresh_status().await
    }

    /// Copies the hand-off token, notifies the user and closes the window.
    pub fn complete_authentication(&mut self) -> Result<(), SessionError> {
        if self.session.redirect_target().is_none() {
            return Err(self.reject(HandoffError::NoRedirectTarget().into()));
        }
        if self.session.principal().is_none() {
            return Err(self.reject(HandoffError::NoPrincipal().into()));
        }
        self.hand_off()
    }

    async fn refresh_status(&mut self) -> Result<(), SessionError> {
        let Some(client) = self.client.as_ref() else {
            return Ok(());
        };
        begin(
            &self.logger,
            &mut self.session,
            Operation::Initialize,
            SessionState::Initializing,
        );
        let status = client.is_authenticated().await;
        match status {
            Ok(authenticated) => self.apply_status(authenticated).await,
            Err(err) => Err(self.fail(SessionError::Initialization(err))),
        }
    }

    async fn apply_status(&mut self, authenticated: bool) -> Result<(), SessionError> {
        self.session.set_authenticated(authenticated);
        self.session.clear_error();
        if authenticated {
            finish(&self.logger, &mut self.session, SessionState::Authenticated);
            self.fetch_identity().await
        } else {
            self.location.clear_principal_id();
            finish(
                &self.logger,
                &mut self.session,
                SessionState::Unauthenticated,
            );
            Ok(())
        }
    }

    async fn fetch_identity(&mut self) -> Result<(), SessionError> {
        let Some(client) = self.client.as_ref() else {
            return Ok(());
        };
        begin(
            &self.logger,
            &mut self.session,
            Operation::FetchIdentity,
            SessionState::FetchingIdentity,
        );
        let fetched = client.get_identity().await;
        let identity = match fetched {
            Ok(identity) => identity,
            Err(err) => return Err(self.fail(SessionError::IdentityFetch(err))),
        };

        let principal = identity.principal().to_text();
        info!(self.logger, "Principal ID: {}", principal);
        self.location.set_principal_id(&principal);
        self.session.set_principal(principal);
        finish(&self.logger, &mut self.session, SessionState::Authenticated);

        if self.session.redirect_target().is_some() && !self.session.window_closed() {
            self.hand_off()?;
        }
        Ok(())
    }

    fn hand_off(&mut self) -> Result<(), SessionError> {
        let Some(principal) = self.session.principal() else {
            return Err(self.reject(HandoffError::NoPrincipal().into()));
        };
        let token = handoff_token(&self.settings.app_prefix, principal);
        info!(self.logger, "Handing off principal"; "redirect_target" => self.session.redirect_target());

        if let Err(err) = deliver(&mut self.host, &token) {
            return Err(self.fail(err.into()));
        }
        self.session.close_window();
        Ok(())
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        error!(self.logger, "{}", err);
        self.session.fail(err.to_string());
        err
    }

    fn reject(&mut self, err: SessionError) -> SessionError {
        error!(self.logger, "{}", err);
        self.session.reject(err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PrincipalIdentity;
    use crate::error::client::ClientError;
    use crate::handoff::test_host::RecordingHost;
    use crate::handoff::HANDOFF_NOTICE;
    use candid::Principal;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug)]
    enum ProviderBehaviour {
        Approve,
        Reject(String),
        Throw(String),
        Vanish,
    }

    #[derive(Debug)]
    struct Provider {
        creates: usize,
        fail_create: Option<String>,
        authenticated: bool,
        principal: Principal,
        login: ProviderBehaviour,
        fail_logout: Option<String>,
        fail_identity: Option<String>,
    }

    impl Default for Provider {
        fn default() -> Self {
            Self {
                creates: 0,
                fail_create: None,
                authenticated: false,
                principal: Principal::from_text("aaaaa-aa").unwrap(),
                login: ProviderBehaviour::Approve,
                fail_logout: None,
                fail_identity: None,
            }
        }
    }

    #[derive(Clone)]
    struct FakeFactory(Rc<RefCell<Provider>>);

    struct FakeClient(Rc<RefCell<Provider>>);

    impl ClientFactory for FakeFactory {
        type Client = FakeClient;

        async fn create(&self) -> Result<FakeClient, ClientError> {
            let mut provider = self.0.borrow_mut();
            provider.creates += 1;
            if let Some(message) = &provider.fail_create {
                return Err(ClientError::Provider(message.clone()));
            }
            Ok(FakeClient(Rc::clone(&self.0)))
        }
    }

    impl AuthClient for FakeClient {
        type Identity = PrincipalIdentity;

        async fn is_authenticated(&self) -> Result<bool, ClientError> {
            Ok(self.0.borrow().authenticated)
        }

        async fn login(&self, options: LoginOptions) -> Result<(), ClientError> {
            let behaviour = self.0.borrow().login.clone();
            match behaviour {
                ProviderBehaviour::Approve => {
                    self.0.borrow_mut().authenticated = true;
                    (options.on_success)();
                }
                ProviderBehaviour::Reject(message) => (options.on_error)(message),
                ProviderBehaviour::Throw(message) => return Err(ClientError::Provider(message)),
                ProviderBehaviour::Vanish => {}
            }
            Ok(())
        }

        async fn logout(&self) -> Result<(), ClientError> {
            let mut provider = self.0.borrow_mut();
            if let Some(message) = &provider.fail_logout {
                return Err(ClientError::Provider(message.clone()));
            }
            provider.authenticated = false;
            Ok(())
        }

        async fn get_identity(&self) -> Result<PrincipalIdentity, ClientError> {
            let provider = self.0.borrow();
            match &provider.fail_identity {
                Some(message) => Err(ClientError::Provider(message.clone())),
                None => Ok(PrincipalIdentity(provider.principal)),
            }
        }
    }

    type TestController = SessionController<FakeFactory, RecordingHost>;

    fn controller_at(provider: Provider, page: &str) -> (Rc<RefCell<Provider>>, TestController) {
        let provider = Rc::new(RefCell::new(provider));
        let settings = ControllerSettings {
            identity_provider: Url::parse("https://identity.ic0.app").unwrap(),
            app_prefix: "myapp".to_string(),
        };
        let controller = SessionController::new(
            FakeFactory(Rc::clone(&provider)),
            RecordingHost::default(),
            settings,
            PageLocation::new(Url::parse(page).unwrap()),
            Logger::root(slog::Discard, slog::o!()),
        );
        (provider, controller)
    }

    fn controller(provider: Provider) -> (Rc<RefCell<Provider>>, TestController) {
        controller_at(provider, "https://whoami.example/")
    }

    #[tokio::test]
    async fn fresh_page_is_unauthenticated() {
        let (_, mut controller) = controller(Provider::default());
        assert_eq!(controller.session().state(), &SessionState::Uninitialized);

        controller.start().await.unwrap();

        let session = controller.snapshot();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert!(!session.authenticated());
        assert!(!session.loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.principal(), None);
        assert!(controller.has_client());
    }

    #[tokio::test]
    async fn start_runs_once() {
        let (provider, mut controller) = controller(Provider::default());
        controller.start().await.unwrap();
        controller.start().await.unwrap();
        controller.login().await.unwrap();
        controller.start().await.unwrap();

        assert_eq!(provider.borrow().creates, 1);
    }

    #[tokio::test]
    async fn restores_existing_session() {
        let (_, mut controller) = controller(Provider {
            authenticated: true,
            ..Provider::default()
        });
        controller.start().await.unwrap();

        let session = controller.session();
        assert_eq!(session.state(), &SessionState::Authenticated);
        assert_eq!(session.principal(), Some("aaaaa-aa"));
        assert_eq!(
            controller.location().principal_id(),
            Some("aaaaa-aa".to_string())
        );
    }

    #[tokio::test]
    async fn login_fetches_principal() {
        let (_, mut controller) = controller(Provider::default());
        controller.start().await.unwrap();
        controller.login().await.unwrap();

        let session = controller.session();
        assert_eq!(session.state(), &SessionState::Authenticated);
        assert!(session.authenticated());
        assert_eq!(session.principal(), Some("aaaaa-aa"));
        assert!(!session.loading());
        assert_eq!(
            controller.location().url().as_str(),
            "https://whoami.example/?principalId=aaaaa-aa"
        );
        // no redirect target, so nothing is handed off
        assert!(controller.host().clipboard.is_empty());
        assert!(!session.window_closed());
    }

    #[tokio::test]
    async fn provider_error_fails_login() {
        let (_, mut controller) = controller(Provider {
            login: ProviderBehaviour::Reject("user_cancelled".to_string()),
            ..Provider::default()
        });
        controller.start().await.unwrap();

        let err = controller.login().await.unwrap_err();
        assert!(matches!(err, SessionError::LoginRejected(_)));

        let session = controller.session();
        assert!(matches!(session.state(), SessionState::Failed { .. }));
        assert!(session.error().unwrap().contains("user_cancelled"));
        assert_eq!(session.error(), Some("Login failed: user_cancelled"));
        assert!(!session.loading());
        assert!(!session.authenticated());
    }

    #[tokio::test]
    async fn thrown_login_is_an_exception() {
        let (_, mut controller) = controller(Provider {
            login: ProviderBehaviour::Throw("popup blocked".to_string()),
            ..Provider::default()
        });
        controller.start().await.unwrap();

        assert!(matches!(
            controller.login().await,
            Err(SessionError::LoginException(_))
        ));
        assert_eq!(
            controller.session().error(),
            Some("Login exception: popup blocked")
        );
        assert!(!controller.session().loading());
    }

    #[tokio::test]
    async fn silent_provider_is_abandoned() {
        let (_, mut controller) = controller(Provider {
            login: ProviderBehaviour::Vanish,
            ..Provider::default()
        });
        controller.start().await.unwrap();

        assert!(matches!(
            controller.login().await,
            Err(SessionError::LoginAbandoned())
        ));
        assert!(!controller.session().authenticated());
    }

    #[tokio::test]
    async fn login_without_client_is_rejected() {
        let (_, mut controller) = controller(Provider::default());

        assert!(matches!(
            controller.login().await,
            Err(SessionError::ClientNotInitialized())
        ));
        let session = controller.session();
        assert_eq!(
            session.error(),
            Some("Cannot login: Auth client not initialized")
        );
        assert!(!session.authenticated());
        assert_eq!(session.state(), &SessionState::Uninitialized);
    }

    #[tokio::test]
    async fn initialization_failure_is_reported_not_retried() {
        let (provider, mut controller) = controller(Provider {
            fail_create: Some("SubtleCrypto is not available in this environment".to_string()),
            ..Provider::default()
        });

        assert!(matches!(
            controller.start().await,
            Err(SessionError::Initialization(_))
        ));
        assert_eq!(
            controller.session().error(),
            Some("Auth initialization failed: SubtleCrypto is not available in this environment")
        );
        assert!(!controller.session().loading());
        assert!(!controller.has_client());

        controller.start().await.unwrap();
        assert_eq!(provider.borrow().creates, 1);

        assert!(matches!(
            controller.login().await,
            Err(SessionError::ClientNotInitialized())
        ));
    }

    #[tokio::test]
    async fn failure_is_not_terminal() {
        let (provider, mut controller) = controller(Provider {
            login: ProviderBehaviour::Reject("UserInterrupt".to_string()),
            ..Provider::default()
        });
        controller.start().await.unwrap();
        controller.login().await.unwrap_err();

        provider.borrow_mut().login = ProviderBehaviour::Approve;
        controller.login().await.unwrap();

        let session = controller.session();
        assert_eq!(session.state(), &SessionState::Authenticated);
        assert_eq!(session.error(), None);
        assert_eq!(session.principal(), Some("aaaaa-aa"));
    }

    #[tokio::test]
    async fn logout_clears_principal() {
        let (provider, mut controller) = controller(Provider::default());
        controller.start().await.unwrap();
        controller.login().await.unwrap();
        controller.logout().await.unwrap();

        let session = controller.session();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert!(!session.authenticated());
        assert_eq!(session.principal(), None);
        assert_eq!(controller.location().url().as_str(), "https://whoami.example/");
        assert!(!provider.borrow().authenticated);
    }

    #[tokio::test]
    async fn logout_when_signed_out_is_a_noop() {
        let (_, mut controller) = controller(Provider::default());
        controller.logout().await.unwrap();
        assert_eq!(controller.session().state(), &SessionState::Uninitialized);

        controller.start().await.unwrap();
        controller.logout().await.unwrap();
        let session = controller.session();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(session.error(), None);
        assert!(!session.authenticated());
    }

    #[tokio::test]
    async fn logout_failure_is_reported() {
        let (_, mut controller) = controller(Provider {
            authenticated: true,
            fail_logout: Some("storage locked".to_string()),
            ..Provider::default()
        });
        controller.start().await.unwrap();

        assert!(matches!(
            controller.logout().await,
            Err(SessionError::Logout(_))
        ));
        let session = controller.session();
        assert_eq!(session.error(), Some("Logout failed: storage locked"));
        assert!(!session.loading());
        assert!(session.invariants_hold());
    }

    #[tokio::test]
    async fn identity_fetch_failure_is_reported() {
        let (_, mut controller) = controller(Provider {
            fail_identity: Some("identity unavailable".to_string()),
            ..Provider::default()
        });
        controller.start().await.unwrap();

        assert!(matches!(
            controller.login().await,
            Err(SessionError::IdentityFetch(_))
        ));
        let session = controller.session();
        assert_eq!(
            session.error(),
            Some("Failed to fetch principal ID: identity unavailable")
        );
        assert!(session.authenticated());
        assert_eq!(session.principal(), None);
        assert!(!session.loading());
    }

    #[tokio::test]
    async fn hands_off_once_principal_is_known() {
        let (_, mut controller) = controller_at(
            Provider::default(),
            "https://whoami.example/?redirectScheme=myapp",
        );
        controller.start().await.unwrap();
        assert!(controller.host().clipboard.is_empty());

        controller.login().await.unwrap();

        let host = controller.host();
        assert_eq!(host.clipboard, vec!["myapp:aaaaa-aa"]);
        assert_eq!(host.notices, vec![HANDOFF_NOTICE]);
        assert!(host.closed);
        assert!(controller.session().window_closed());
        assert_eq!(
            controller.location().url().query(),
            Some("redirectScheme=myapp&principalId=aaaaa-aa")
        );
    }

    #[tokio::test]
    async fn complete_authentication_copies_token() {
        let (_, mut controller) = controller_at(
            Provider {
                authenticated: true,
                ..Provider::default()
            },
            "https://whoami.example/?redirectScheme=myapp",
        );
        controller.start().await.unwrap();
        controller.complete_authentication().unwrap();

        let host = controller.host();
        assert_eq!(host.clipboard, vec!["myapp:aaaaa-aa", "myapp:aaaaa-aa"]);
        assert!(host.closed);
    }

    #[tokio::test]
    async fn clipboard_failure_surfaces() {
        let provider = Rc::new(RefCell::new(Provider {
            authenticated: true,
            ..Provider::default()
        }));
        let mut controller = SessionController::new(
            FakeFactory(Rc::clone(&provider)),
            RecordingHost {
                clipboard_broken: true,
                ..RecordingHost::default()
            },
            ControllerSettings {
                identity_provider: Url::parse("https://identity.ic0.app").unwrap(),
                app_prefix: "myapp".to_string(),
            },
            PageLocation::new(Url::parse("https://whoami.example/?redirectScheme=myapp").unwrap()),
            Logger::root(slog::Discard, slog::o!()),
        );

        assert!(matches!(
            controller.start().await,
            Err(SessionError::Handoff(HandoffError::ClipboardUnavailable(_)))
        ));
        let session = controller.session();
        assert!(session.error().unwrap().starts_with("Hand-off failed"));
        assert_eq!(session.principal(), Some("aaaaa-aa"));
        assert!(!session.window_closed());
        assert!(!controller.host().closed);
    }

    #[tokio::test]
    async fn logout_still_works_after_failed_handoff() {
        let provider = Rc::new(RefCell::new(Provider {
            authenticated: true,
            ..Provider::default()
        }));
        let mut controller = SessionController::new(
            FakeFactory(Rc::clone(&provider)),
            RecordingHost {
                clipboard_broken: true,
                ..RecordingHost::default()
            },
            ControllerSettings {
                identity_provider: Url::parse("https://identity.ic0.app").unwrap(),
                app_prefix: "myapp".to_string(),
            },
            PageLocation::new(Url::parse("https://whoami.example/?redirectScheme=myapp").unwrap()),
            Logger::root(slog::Discard, slog::o!()),
        );
        controller.start().await.unwrap_err();
        assert!(controller.has_client());

        controller.logout().await.unwrap();

        let session = controller.session();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(session.error(), None);
        assert_eq!(session.principal(), None);
        assert!(!provider.borrow().authenticated);
        assert_eq!(
            controller.location().url().query(),
            Some("redirectScheme=myapp")
        );
    }

    #[tokio::test]
    async fn complete_authentication_needs_target_and_principal() {
        let (_, mut controller) = controller(Provider {
            authenticated: true,
            ..Provider::default()
        });
        controller.start().await.unwrap();
        assert!(matches!(
            controller.complete_authentication(),
            Err(SessionError::Handoff(HandoffError::NoRedirectTarget()))
        ));

        let (_, mut controller) =
            controller_at(Provider::default(), "https://whoami.example/?redirectScheme=myapp");
        controller.start().await.unwrap();
        assert!(matches!(
            controller.complete_authentication(),
            Err(SessionError::Handoff(HandoffError::NoPrincipal()))
        ));
        assert!(controller.host().clipboard.is_empty());
    }

    #[derive(Clone, Debug)]
    enum Action {
        Start,
        Login(ProviderBehaviour),
        Logout,
        Complete,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Start),
            Just(Action::Login(ProviderBehaviour::Approve)),
            Just(Action::Login(ProviderBehaviour::Reject(
                "user_cancelled".to_string()
            ))),
            Just(Action::Login(ProviderBehaviour::Throw("boom".to_string()))),
            Just(Action::Login(ProviderBehaviour::Vanish)),
            Just(Action::Logout),
            Just(Action::Complete),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_sequence(
            actions in prop::collection::vec(action(), 0..24),
            restored in any::<bool>(),
            redirect in any::<bool>(),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let page = if redirect {
                    "https://whoami.example/?redirectScheme=myapp"
                } else {
                    "https://whoami.example/"
                };
                let (provider, mut controller) = controller_at(
                    Provider { authenticated: restored, ..Provider::default() },
                    page,
                );

                for action in actions {
                    match action {
                        Action::Start => {
                            let _ = controller.start().await;
                        }
                        Action::Login(behaviour) => {
                            provider.borrow_mut().login = behaviour;
                            let _ = controller.login().await;
                        }
                        Action::Logout => {
                            let _ = controller.logout().await;
                            let session = controller.session();
                            prop_assert!(!session.authenticated());
                            prop_assert_eq!(session.principal(), None);
                        }
                        Action::Complete => {
                            let _ = controller.complete_authentication();
                        }
                    }

                    let session = controller.session();
                    prop_assert!(session.invariants_hold());
                    prop_assert!(!session.loading());
                    prop_assert!(provider.borrow().creates <= 1);
                    let shown = controller.location().principal_id();
                    prop_assert_eq!(shown.as_deref(), session.principal());
                }
                Ok(())
            })?;
        }
    }
}
