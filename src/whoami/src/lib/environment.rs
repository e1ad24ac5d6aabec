use crate::lib::error::WhoamiResult;
use anyhow::Context;
use std::path::{Path, PathBuf};
use whoami_core::config::directories::get_user_whoami_config_file;
use whoami_core::config::model::whoami_config::WhoamiConfig;

pub trait Environment {
    fn get_config(&self) -> &WhoamiConfig;
    fn get_config_path(&self) -> &Path;

    /// The `redirectScheme` supplied on the command line, if any. It takes precedence over
    /// one carried by the configured page URL.
    fn get_redirect_scheme(&self) -> Option<&str>;

    fn get_logger(&self) -> &slog::Logger;
}

pub struct EnvironmentImpl {
    config: WhoamiConfig,
    config_path: PathBuf,
    redirect_scheme: Option<String>,
    logger: Option<slog::Logger>,
}

impl EnvironmentImpl {
    pub fn new(config_path: Option<PathBuf>) -> WhoamiResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => get_user_whoami_config_file()?,
        };
        let config = WhoamiConfig::load(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        Ok(EnvironmentImpl {
            config,
            config_path,
            redirect_scheme: None,
            logger: None,
        })
    }

    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_identity_provider(mut self, identity_provider: Option<String>) -> WhoamiResult<Self> {
        if let Some(identity_provider) = identity_provider {
            self.config = self.config.with_identity_provider(&identity_provider)?;
        }
        Ok(self)
    }

    pub fn with_page_url(mut self, page_url: Option<String>) -> WhoamiResult<Self> {
        if let Some(page_url) = page_url {
            self.config = self.config.with_page_url(&page_url)?;
        }
        Ok(self)
    }

    pub fn with_redirect_scheme(mut self, redirect_scheme: Option<String>) -> Self {
        self.redirect_scheme = redirect_scheme.filter(|scheme| !scheme.is_empty());
        self
    }
}

impl Environment for EnvironmentImpl {
    fn get_config(&self) -> &WhoamiConfig {
        &self.config
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    fn get_redirect_scheme(&self) -> Option<&str> {
        self.redirect_scheme.as_deref()
    }

    fn get_logger(&self) -> &slog::Logger {
        self.logger
            .as_ref()
            .expect("Log was not setup, but is being used.")
    }
}
