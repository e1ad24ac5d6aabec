//! An identity client that keeps the provider's delegation chain on disk.
//!
//! Only the delegation chain is stored. It carries public keys and signatures, never a
//! private key.
use crate::client::delegation::{current_time_nanos, DelegationChain, JsonDelegationChain};
use crate::client::{AuthClient, ClientFactory, LoginOptions, PrincipalIdentity};
use crate::error::client::ClientError;
use crate::error::client::ClientError::{
    InvalidSession, ReadSessionFailed, RemoveSessionFailed, SaveSessionFailed,
    StorageUnavailable,
};
use crate::error::delegation::DelegationError;
use crate::fs::{ensure_dir_exists, remove_file_if_exists};
use crate::json::{load_json_file, save_json_file};
use slog::{debug, info, warn, Logger};
use std::future::Future;
use std::path::{Path, PathBuf};
use url::Url;

pub const DELEGATION_FILE: &str = "delegation.json";

/// The message passed to `on_error` when the user abandons the login.
pub const USER_INTERRUPT: &str = "UserInterrupt";

/// Obtains a delegation chain from the identity provider.
pub trait DelegationSource {
    /// Returns the JSON-encoded chain, or `None` if the user gave up.
    fn request_delegation(
        &self,
        authorize_url: &Url,
    ) -> impl Future<Output = Result<Option<String>, ClientError>>;
}

/// The provider's authorization endpoint: `<provider>#authorize`.
pub fn authorize_url(identity_provider: &Url) -> Url {
    let mut url = identity_provider.clone();
    url.set_fragment(Some("authorize"));
    url
}

#[derive(Clone)]
pub struct StoredSessionFactory<S> {
    session_dir: PathBuf,
    source: S,
    logger: Logger,
}

impl<S> StoredSessionFactory<S> {
    pub fn new(session_dir: PathBuf, source: S, logger: Logger) -> Self {
        Self {
            session_dir,
            source,
            logger,
        }
    }
}

impl<S: DelegationSource + Clone> ClientFactory for StoredSessionFactory<S> {
    type Client = StoredSessionClient<S>;

    async fn create(&self) -> Result<Self::Client, ClientError> {
        ensure_dir_exists(&self.session_dir).map_err(StorageUnavailable)?;
        debug!(self.logger, "Session storage ready"; "dir" => %self.session_dir.display());

        Ok(StoredSessionClient {
            session_file: self.session_dir.join(DELEGATION_FILE),
            source: self.source.clone(),
            logger: self.logger.clone(),
        })
    }
}

pub struct StoredSessionClient<S> {
    session_file: PathBuf,
    source: S,
    logger: Logger,
}

impl<S> StoredSessionClient<S> {
    pub fn session_file(&self) -> &Path {
        &self.session_file
    }

    fn load_chain(&self) -> Result<Option<DelegationChain>, ClientError> {
        if !self.session_file.exists() {
            return Ok(None);
        }
        let json: JsonDelegationChain =
            load_json_file(&self.session_file).map_err(ReadSessionFailed)?;
        let now = current_time_nanos().map_err(InvalidSession)?;
        json.to_delegation_chain(now)
            .map(Some)
            .map_err(InvalidSession)
    }
}

fn validate(response: &str) -> Result<JsonDelegationChain, DelegationError> {
    let json = JsonDelegationChain::parse(response)?;
    json.to_delegation_chain(current_time_nanos()?)?;
    Ok(json)
}

impl<S: DelegationSource> AuthClient for StoredSessionClient<S> {
    type Identity = PrincipalIdentity;

    async fn is_authenticated(&self) -> Result<bool, ClientError> {
        match self.load_chain() {
            Ok(Some(chain)) => {
                debug!(self.logger, "Stored session is valid"; "expires_at_ns" => chain.expiration());
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => {
                warn!(self.logger, "Ignoring stored session: {}", err);
                Ok(false)
            }
        }
    }

    async fn login(&self, options: LoginOptions) -> Result<(), ClientError> {
        let authorize_url = authorize_url(&options.identity_provider);
        info!(self.logger, "Requesting a delegation"; "url" => %authorize_url);

        let response = self.source.request_delegation(&authorize_url).await?;
        let Some(response) = response.filter(|r| !r.trim().is_empty()) else {
            (options.on_error)(USER_INTERRUPT.to_string());
            return Ok(());
        };

        match validate(&response) {
            Ok(json) => {
                save_json_file(&self.session_file, &json).map_err(SaveSessionFailed)?;
                debug!(self.logger, "Saved delegation chain"; "file" => %self.session_file.display());
                (options.on_success)();
            }
            Err(err) => (options.on_error)(err.to_string()),
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), ClientError> {
        remove_file_if_exists(&self.session_file).map_err(RemoveSessionFailed)
    }

    async fn get_identity(&self) -> Result<Self::Identity, ClientError> {
        Ok(match self.load_chain()? {
            Some(chain) => PrincipalIdentity(chain.principal()),
            None => PrincipalIdentity::anonymous(),
        })
    }
}
