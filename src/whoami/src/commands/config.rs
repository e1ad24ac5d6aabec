use crate::lib::environment::Environment;
use crate::lib::error::WhoamiResult;
use clap::Parser;

/// Prints the effective configuration, after command-line overrides.
#[derive(Parser)]
pub struct ConfigOpts {
    /// Only print the path of the config file.
    #[arg(long)]
    path: bool,
}

pub fn exec(env: &dyn Environment, opts: ConfigOpts) -> WhoamiResult {
    if opts.path {
        println!("{}", env.get_config_path().display());
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(env.get_config())?);
    Ok(())
}
