use crate::config::directories::get_default_session_directory;
use crate::error::config::ConfigError;
use crate::error::config::ConfigError::{
    InvalidIdentityProviderUrl, InvalidPageUrl, LoadConfigFailed,
};
use crate::json::load_json_file;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_IDENTITY_PROVIDER: &str = "https://identity.ic0.app";
pub const DEFAULT_APP_PREFIX: &str = "whoami";
pub const DEFAULT_PAGE_URL: &str = "http://localhost/";

/// User configuration, read from `config.json` in the whoami config directory.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoamiConfig {
    /// Where the login ceremony happens.
    pub identity_provider: Url,

    /// Namespace placed in front of the principal when handing it off to another application.
    pub app_prefix: String,

    /// The address this page is considered to be served from. Query parameters on it
    /// (notably `redirectScheme`) are read at startup.
    pub page_url: Url,

    /// Where the identity client keeps its delegation chain.
    /// Defaults to the platform's local data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_dir: Option<PathBuf>,
}

impl Default for WhoamiConfig {
    fn default() -> Self {
        Self {
            identity_provider: Url::parse(DEFAULT_IDENTITY_PROVIDER)
                .expect("default identity provider URL is valid"),
            app_prefix: DEFAULT_APP_PREFIX.to_string(),
            page_url: Url::parse(DEFAULT_PAGE_URL).expect("default page URL is valid"),
            session_dir: None,
        }
    }
}

impl WhoamiConfig {
    /// Loads the config at `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        load_json_file(path).map_err(LoadConfigFailed)
    }

    pub fn with_identity_provider(mut self, identity_provider: &str) -> Result<Self, ConfigError> {
        self.identity_provider = Url::parse(identity_provider)
            .map_err(|err| InvalidIdentityProviderUrl(identity_provider.to_string(), err))?;
        Ok(self)
    }

    pub fn with_page_url(mut self, page_url: &str) -> Result<Self, ConfigError> {
        self.page_url =
            Url::parse(page_url).map_err(|err| InvalidPageUrl(page_url.to_string(), err))?;
        Ok(self)
    }

    pub fn get_session_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.session_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_default_session_directory(),
        }
    }
}
