use crate::lib::environment::Environment;
use crate::lib::error::WhoamiResult;
use crate::lib::host::TerminalHost;
use crate::lib::provider::DelegationPrompt;
use anyhow::Context;
use clap::Subcommand;
use std::future::Future;
use tokio::runtime::Runtime;
use whoami_core::client::stored::StoredSessionFactory;
use whoami_core::location::PageLocation;
use whoami_core::session::{ControllerSettings, SessionController};

mod complete;
mod config;
mod format;
mod login;
mod logout;
mod status;

#[derive(Subcommand)]
pub enum Command {
    Complete(complete::CompleteOpts),
    Config(config::ConfigOpts),
    Format(format::FormatOpts),
    Login(login::LoginOpts),
    Logout(logout::LogoutOpts),
    Status(status::StatusOpts),
}

pub fn exec(env: &dyn Environment, cmd: Command) -> WhoamiResult {
    match cmd {
        Command::Complete(v) => complete::exec(env, v),
        Command::Config(v) => config::exec(env, v),
        Command::Format(v) => format::exec(v),
        Command::Login(v) => login::exec(env, v),
        Command::Logout(v) => logout::exec(env, v),
        Command::Status(v) => status::exec(env, v),
    }
}

pub type Controller = SessionController<StoredSessionFactory<DelegationPrompt>, TerminalHost>;

/// The controller for this invocation. One command run is one page lifetime.
pub fn new_controller(env: &dyn Environment, prompt: DelegationPrompt) -> WhoamiResult<Controller> {
    let config = env.get_config();
    let logger = env.get_logger();

    let mut location = PageLocation::new(config.page_url.clone());
    if let Some(scheme) = env.get_redirect_scheme() {
        location = location.with_redirect_scheme(scheme);
    }

    let factory = StoredSessionFactory::new(config.get_session_dir()?, prompt, logger.clone());
    let settings = ControllerSettings {
        identity_provider: config.identity_provider.clone(),
        app_prefix: config.app_prefix.clone(),
    };

    Ok(SessionController::new(
        factory,
        TerminalHost::new(logger.clone()),
        settings,
        location,
        logger.clone(),
    ))
}

pub fn block_on<F: Future>(future: F) -> WhoamiResult<F::Output> {
    let runtime = Runtime::new().context("Unable to create a runtime")?;
    Ok(runtime.block_on(future))
}
