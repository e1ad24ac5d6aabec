use crate::commands::{block_on, new_controller};
use crate::lib::display::print_view;
use crate::lib::environment::Environment;
use crate::lib::error::WhoamiResult;
use crate::lib::provider::DelegationPrompt;
use clap::Parser;

/// Shows whether you are logged in, and your principal ID if you are.
#[derive(Parser)]
pub struct StatusOpts {}

pub fn exec(env: &dyn Environment, _opts: StatusOpts) -> WhoamiResult {
    let mut controller = new_controller(env, DelegationPrompt::Interactive)?;
    let result = block_on(controller.start())?;
    print_view(controller.session(), controller.location());
    Ok(result?)
}
