use crate::commands::{block_on, new_controller};
use crate::lib::display::print_view;
use crate::lib::environment::Environment;
use crate::lib::error::WhoamiResult;
use crate::lib::provider::DelegationPrompt;
use clap::Parser;
use slog::info;

/// Hands your principal back to the application that asked for it.
///
/// Requires --redirect-scheme (or a redirectScheme on the page URL). Copies
/// "<app prefix>:<principal>" to the clipboard.
#[derive(Parser)]
pub struct CompleteOpts {}

pub fn exec(env: &dyn Environment, _opts: CompleteOpts) -> WhoamiResult {
    let mut controller = new_controller(env, DelegationPrompt::Interactive)?;
    let started = block_on(controller.start())?;

    // With a redirect scheme present, starting already hands off a restored session.
    let result = started.and_then(|()| {
        if controller.session().window_closed() {
            info!(env.get_logger(), "Authentication already completed.");
            Ok(())
        } else {
            controller.complete_authentication()
        }
    });

    print_view(controller.session(), controller.location());
    if controller.host().is_closed() {
        info!(env.get_logger(), "You can now return to the application.");
    }
    Ok(result?)
}
