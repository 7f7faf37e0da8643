mod app;
mod background;
mod calendar;
mod help;
mod input;
mod ledger;
mod panel;
mod share;
mod theme;
use crate::app::{App, ShareSettings};
use crate::background::Background;
use crate::calendar::MonthView;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use log::info;
use ratatui::DefaultTerminal;
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime, format_description::FormatItem, macros::format_description};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Eq, PartialEq)]
struct Options {
    date: Option<Date>,
    background: Option<PathBuf>,
    mail_to: String,
    opener: String,
    log_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            date: None,
            background: None,
            mail_to: String::new(),
            opener: String::from(share::DEFAULT_OPENER),
            log_file: None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('b') | Arg::Long("background") => {
                    opts.background = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('m') | Arg::Long("mail-to") => {
                    opts.mail_to = parser.value()?.string()?;
                }
                Arg::Long("opener") => opts.opener = parser.value()?.string()?,
                Arg::Short('l') | Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if opts.date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            });
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let _logger = match opts.log_file {
                    Some(ref path) => Some(init_logging(path)?),
                    None => None,
                };
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut view = MonthView::new(today)?;
                if let Some(date) = opts.date {
                    view = view.start_date(date)?;
                }
                let mut app = App::new(
                    view,
                    ShareSettings {
                        recipient: opts.mail_to,
                        opener: opts.opener,
                    },
                );
                if let Some(path) = opts.background {
                    let background = Background::load(&path)?;
                    info!("Starting with background {background}");
                    app = app.background(background);
                }
                info!("Starting on {today}");
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    app.run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: dayledger [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal month calendar with per-day to-do lists and memos");
                println!();
                println!("Options:");
                println!("  -b, --background FILE   Start with FILE as the background image");
                println!("  -m, --mail-to ADDR      Recipient used for \"share via mail\"");
                println!("      --opener PROG       Program used to open mailto: links");
                println!("  -l, --log-file FILE     Write a log to FILE");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

// The terminal belongs to the TUI, so logs only ever go to a file.
fn init_logging(path: &Path) -> anyhow::Result<LoggerHandle> {
    let spec = FileSpec::try_from(path)
        .with_context(|| format!("invalid log file path {}", path.display()))?
        .suppress_timestamp();
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?
        .log_to_file(spec)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
