#![allow(special_module_name)]
use crate::lib::diagnosis::{diagnose, Diagnosis};
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::{WhoamiError, WhoamiResult};
use crate::lib::logger::{create_root_logger, LoggingMode};
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::PathBuf;

mod commands;
mod lib;

/// Log in with Internet Identity and show your principal.
#[derive(Parser)]
#[command(name = "whoami", version, arg_required_else_help = true)]
pub struct CliOpts {
    /// Displays detailed information about operations. -vv shows every session transition.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", default_value = "stderr", value_parser = ["stderr", "tee", "file"], global = true)]
    logmode: String,

    /// The file to log to, if logging to a file (see --logmode).
    #[arg(long, global = true)]
    logfile: Option<String>,

    /// The config file to use instead of the one in the user config directory.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// The Internet Identity to log in with.
    #[arg(long, env = "WHOAMI_II_URL", global = true, value_name = "URL")]
    identity_provider: Option<String>,

    /// The page address, including any query parameters it was opened with.
    #[arg(long, global = true, value_name = "URL")]
    page_url: Option<String>,

    /// The URL scheme of the application waiting for your principal. Enables the hand-off.
    #[arg(long, global = true, value_name = "SCHEME")]
    redirect_scheme: Option<String>,

    #[command(subcommand)]
    command: commands::Command,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> slog::Logger {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;

    let mode = match opts.logmode.as_str() {
        "tee" => LoggingMode::Tee(PathBuf::from(opts.logfile.as_deref().unwrap_or("log.txt"))),
        "file" => LoggingMode::File(PathBuf::from(opts.logfile.as_deref().unwrap_or("log.txt"))),
        _ => LoggingMode::Stderr,
    };

    create_root_logger(verbose_level, mode)
}

fn write_label(stderr: &mut term::StderrTerminal, color: term::color::Color, label: &str) {
    // Coloring is best effort; the text is written either way.
    let _ = stderr.fg(color);
    let _ = write!(stderr, "{label}");
    let _ = stderr.reset();
}

fn print_error_and_diagnosis(err: WhoamiError, error_diagnosis: Diagnosis) {
    let Some(mut stderr) = term::stderr() else {
        for (level, cause) in err.chain().enumerate() {
            let prefix = if level == 0 { "Error" } else { "Caused by" };
            eprintln!("{prefix}: {cause}");
        }
        if let Some(error_explanation) = error_diagnosis.0 {
            eprintln!("Error explanation:\n{error_explanation}");
        }
        if let Some(action_suggestion) = error_diagnosis.1 {
            eprintln!("How to resolve the error:\n{action_suggestion}");
        }
        return;
    };

    // print error chain stack
    for (level, cause) in err.chain().enumerate() {
        let (color, prefix) = if level == 0 {
            (term::color::RED, "Error")
        } else {
            (term::color::YELLOW, "Caused by")
        };
        write_label(stderr.as_mut(), color, &format!("{prefix}: "));
        let _ = writeln!(stderr, "{cause}");
    }

    // print diagnosis
    if let Some(error_explanation) = error_diagnosis.0 {
        write_label(stderr.as_mut(), term::color::YELLOW, "Error explanation:\n");
        let _ = writeln!(stderr, "{}", error_explanation);
    }
    if let Some(action_suggestion) = error_diagnosis.1 {
        write_label(stderr.as_mut(), term::color::YELLOW, "How to resolve the error:\n");
        let _ = writeln!(stderr, "{}", action_suggestion);
    }
}

fn inner_main() -> WhoamiResult {
    let cli_opts = CliOpts::parse();
    let log = setup_logging(&cli_opts);

    let env = EnvironmentImpl::new(cli_opts.config)?
        .with_logger(log)
        .with_identity_provider(cli_opts.identity_provider)?
        .with_page_url(cli_opts.page_url)?
        .with_redirect_scheme(cli_opts.redirect_scheme);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    commands::exec(&env, cli_opts.command)
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        let error_diagnosis = diagnose(&err);
        print_error_and_diagnosis(err, error_diagnosis);
        std::process::exit(255);
    }
}
