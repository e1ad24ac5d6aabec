//! The identity client capability.
//!
//! The controller never talks to an identity provider directly. It is handed a
//! [`ClientFactory`], constructs exactly one [`AuthClient`] from it and drives that.
use crate::error::client::ClientError;
use candid::Principal;
use futures::channel::oneshot;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use url::Url;

pub mod delegation;
pub mod stored;

/// An authenticated (or anonymous) identity, as seen by this page.
pub trait Identity {
    fn principal(&self) -> Principal;
}

/// Constructs identity clients.
pub trait ClientFactory {
    type Client: AuthClient;

    /// Fails when the environment cannot support a client, for example when there is no
    /// usable storage for session material.
    fn create(&self) -> impl Future<Output = Result<Self::Client, ClientError>>;
}

pub trait AuthClient {
    type Identity: Identity;

    fn is_authenticated(&self) -> impl Future<Output = Result<bool, ClientError>>;

    /// Runs the login ceremony. The outcome is reported through exactly one of the
    /// callbacks in `options`; an `Err` return means the call itself failed.
    fn login(&self, options: LoginOptions) -> impl Future<Output = Result<(), ClientError>>;

    fn logout(&self) -> impl Future<Output = Result<(), ClientError>>;

    fn get_identity(&self) -> impl Future<Output = Result<Self::Identity, ClientError>>;
}

pub type OnSuccess = Box<dyn FnOnce() + Send + 'static>;
pub type OnError = Box<dyn FnOnce(String) + Send + 'static>;

pub struct LoginOptions {
    pub identity_provider: Url,
    pub on_success: OnSuccess,
    pub on_error: OnError,
}

impl fmt::Debug for LoginOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOptions")
            .field("identity_provider", &self.identity_provider.as_str())
            .finish_non_exhaustive()
    }
}

/// What the identity provider reported: `Ok` on success, the provider's message on error.
pub type LoginOutcome = Result<(), String>;

impl LoginOptions {
    /// Builds options whose callbacks resolve a single future.
    ///
    /// Whichever callback runs first settles the receiver; later calls are ignored. If
    /// both callbacks are dropped without being called, the receiver yields `Canceled`.
    pub fn bridged(identity_provider: Url) -> (Self, oneshot::Receiver<LoginOutcome>) {
        let (sender, receiver) = oneshot::channel();
        let slot = Arc::new(Mutex::new(Some(sender)));

        let success_slot = Arc::clone(&slot);
        let on_success: OnSuccess = Box::new(move || settle(&success_slot, Ok(())));
        let on_error: OnError = Box::new(move |message| settle(&slot, Err(message)));

        let options = Self {
            identity_provider,
            on_success,
            on_error,
        };
        (options, receiver)
    }
}

fn settle(slot: &Mutex<Option<oneshot::Sender<LoginOutcome>>>, outcome: LoginOutcome) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(sender) = slot.take() {
            // The receiver is gone only if the controller stopped waiting.
            let _ = sender.send(outcome);
        }
    }
}

/// An identity known only by its principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrincipalIdentity(pub Principal);

impl PrincipalIdentity {
    pub fn anonymous() -> Self {
        Self(Principal::anonymous())
    }
}

impl Identity for PrincipalIdentity {
    fn principal(&self) -> Principal {
        self.0
    }
}
