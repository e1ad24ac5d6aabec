use slog::{Drain, Key, Level, Logger, OwnedKVList, Record, KV};
use std::fmt::Arguments;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Where log records end up.
pub enum LoggingMode {
    /// Terminal output on STDERR, filtered by verbosity.
    Stderr,

    /// STDERR as above, plus a full copy of every record in a file.
    Tee(PathBuf),

    /// Everything goes to a file, nothing to the terminal.
    File(PathBuf),
}

/// Terminal formatter. Warnings and errors get a colored level label. With `-v` or more,
/// each record's key-values (session transitions, outcomes) follow the message.
pub struct SessionFormat<D: slog_term::Decorator> {
    decorator: D,
    show_values: bool,
}

impl<D: slog_term::Decorator> SessionFormat<D> {
    pub fn new(decorator: D, show_values: bool) -> Self {
        SessionFormat {
            decorator,
            show_values,
        }
    }
}

impl<D: slog_term::Decorator> Drain for SessionFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<(), std::io::Error> {
        self.decorator.with_record(record, values, |decorator| {
            if record.level() <= Level::Warning {
                decorator.start_level()?;
                write!(decorator, "{}: ", record.level().as_str())?;
                decorator.start_whitespace()?;
            }

            decorator.start_msg()?;
            write!(decorator, "{}", record.msg())?;

            if self.show_values {
                let mut pairs = Pairs::default();
                record
                    .kv()
                    .serialize(record, &mut pairs)
                    .map_err(std::io::Error::other)?;
                if !pairs.0.is_empty() {
                    decorator.start_whitespace()?;
                    write!(decorator, " ")?;
                    decorator.start_key()?;
                    write!(decorator, "[{}]", pairs.0.join(" "))?;
                }
            }

            decorator.start_whitespace()?;
            writeln!(decorator)?;
            decorator.flush()
        })
    }
}

#[derive(Default)]
struct Pairs(Vec<String>);

impl slog::Serializer for Pairs {
    fn emit_arguments(&mut self, key: Key, val: &Arguments<'_>) -> slog::Result {
        self.0.push(format!("{}={}", key, val));
        Ok(())
    }
}

fn file_logger(path: PathBuf) -> Option<Logger> {
    match File::create(&path) {
        Ok(file) => {
            let decorator = slog_term::PlainDecorator::new(file);
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            Some(Logger::root(
                slog_async::Async::new(drain).build().fuse(),
                slog::o!(),
            ))
        }
        Err(err) => {
            let _ = writeln!(
                std::io::stderr(),
                "Couldn't open log file {}: {}",
                path.display(),
                err
            );
            None
        }
    }
}

fn terminal_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = SessionFormat::new(decorator, level >= Level::Debug).fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();
    Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
}

/// Maps `-v`/`-q` counts onto a level. `None` silences the terminal.
fn level_for(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        i64::MIN..=-4 => None,
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        _ => Some(Level::Trace),
    }
}

/// Create the root logger. File output is never filtered by verbosity; if the
/// log file can't be created, logging falls back to the terminal.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> Logger {
    let level = level_for(verbose_level);
    let terminal = || match level {
        Some(level) => terminal_logger(level),
        None => Logger::root(slog::Discard, slog::o!()),
    };

    let drain = match mode {
        LoggingMode::Stderr => terminal(),
        LoggingMode::File(path) => file_logger(path).unwrap_or_else(terminal),
        LoggingMode::Tee(path) => match file_logger(path) {
            Some(file) => Logger::root(slog::Duplicate::new(terminal(), file).fuse(), slog::o!()),
            None => terminal(),
        },
    };

    Logger::root(drain, slog::o!("version" => env!("CARGO_PKG_VERSION")))
}
