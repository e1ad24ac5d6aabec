use crate::commands::{block_on, new_controller};
use crate::lib::display::print_view;
use crate::lib::environment::Environment;
use crate::lib::error::WhoamiResult;
use crate::lib::provider::DelegationPrompt;
use clap::Parser;
use slog::info;
use std::path::PathBuf;

/// Logs in with Internet Identity.
///
/// Prints the Internet Identity address to sign in at, then asks for the delegation chain it
/// issues.
#[derive(Parser)]
pub struct LoginOpts {
    /// Read the JSON-encoded delegation chain from this file instead of prompting for it.
    #[arg(long, value_name = "FILE")]
    delegation_file: Option<PathBuf>,
}

pub fn exec(env: &dyn Environment, opts: LoginOpts) -> WhoamiResult {
    let prompt = match opts.delegation_file {
        Some(path) => DelegationPrompt::File(path),
        None => DelegationPrompt::Interactive,
    };
    let mut controller = new_controller(env, prompt)?;

    let result = block_on(async {
        let started = controller.start().await;
        if !controller.has_client() {
            return started;
        }
        if controller.session().authenticated() {
            info!(env.get_logger(), "Already logged in.");
            return started;
        }
        controller.login().await
    })?;

    print_view(controller.session(), controller.location());
    Ok(result?)
}
