use crate::error::config::ConfigError;
use crate::error::config::ConfigError::{
    DetermineConfigDirectoryFailed, DetermineSessionDirectoryFailed,
};
use crate::error::foundation::FoundationError;
use crate::error::foundation::FoundationError::NoHomeInEnvironment;

use directories_next::ProjectDirs;
use std::path::PathBuf;

pub const CONFIG_FILENAME: &str = "config.json";

pub fn project_dirs() -> Result<&'static ProjectDirs, FoundationError> {
    lazy_static::lazy_static! {
        static ref DIRS: Option<ProjectDirs> = ProjectDirs::from("org", "dfinity", "whoami");
    }
    DIRS.as_ref().ok_or(NoHomeInEnvironment())
}

pub fn get_user_whoami_config_file() -> Result<PathBuf, ConfigError> {
    let project_dirs = project_dirs().map_err(DetermineConfigDirectoryFailed)?;
    Ok(project_dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn get_default_session_directory() -> Result<PathBuf, ConfigError> {
    let project_dirs = project_dirs().map_err(DetermineSessionDirectoryFailed)?;
    Ok(project_dirs.data_local_dir().join("session"))
}
