use crate::commands::{block_on, new_controller};
use crate::lib::display::print_view;
use crate::lib::environment::Environment;
use crate::lib::error::WhoamiResult;
use crate::lib::provider::DelegationPrompt;
use clap::Parser;
use whoami_core::client::ClientFactory;
use whoami_core::error::session::SessionError;
use whoami_core::handoff::HandoffHost;
use whoami_core::session::SessionController;

/// Logs out and forgets the stored delegation.
#[derive(Parser)]
pub struct LogoutOpts {}

pub fn exec(env: &dyn Environment, _opts: LogoutOpts) -> WhoamiResult {
    let mut controller = new_controller(env, DelegationPrompt::Interactive)?;
    let result = block_on(logout(&mut controller))?;
    print_view(controller.session(), controller.location());
    Ok(result?)
}

/// Starts the controller and logs out. A failed start only stops the logout when it left
/// no client behind; a restored session whose hand-off failed can still be ended.
pub(crate) async fn logout<F: ClientFactory, H: HandoffHost>(
    controller: &mut SessionController<F, H>,
) -> Result<(), SessionError> {
    let started = controller.start().await;
    if !controller.has_client() {
        return started;
    }
    controller.logout().await
}
