use crate::lib::error::WhoamiResult;
use clap::Parser;
use whoami_core::principal::format_principal;

/// Shortens a principal ID the way it is displayed.
#[derive(Parser)]
pub struct FormatOpts {
    /// The principal ID to format.
    principal: String,
}

pub fn exec(opts: FormatOpts) -> WhoamiResult {
    println!("{}", format_principal(Some(opts.principal.as_str())));
    Ok(())
}
