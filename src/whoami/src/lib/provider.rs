use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::path::PathBuf;
use url::Url;
use whoami_core::client::stored::DelegationSource;
use whoami_core::error::client::ClientError;

/// Where the delegation chain issued by Internet Identity comes from.
#[derive(Clone, Debug)]
pub enum DelegationPrompt {
    /// Ask for the JSON-encoded chain on the terminal.
    Interactive,

    /// Read it from a file.
    File(PathBuf),
}

impl DelegationSource for DelegationPrompt {
    async fn request_delegation(&self, authorize_url: &Url) -> Result<Option<String>, ClientError> {
        match self {
            DelegationPrompt::File(path) => {
                let content = whoami_core::fs::read(path)
                    .map_err(|err| ClientError::DelegationRequestFailed(err.to_string()))?;
                String::from_utf8(content).map(Some).map_err(|err| {
                    ClientError::DelegationRequestFailed(format!(
                        "{} is not valid UTF-8: {}",
                        path.display(),
                        err
                    ))
                })
            }
            DelegationPrompt::Interactive => {
                eprintln!("Open {authorize_url} in a browser and sign in with Internet Identity.");
                Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt("Enter the JSON-encoded delegation chain (leave empty to cancel)")
                    .allow_empty(true)
                    .interact_text()
                    .map(Some)
                    .map_err(|err| ClientError::DelegationRequestFailed(err.to_string()))
            }
        }
    }
}
