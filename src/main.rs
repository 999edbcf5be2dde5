//! rxless - file viewer with regexp colorizing.
//!
//! CLI glue only: argument parsing, input opening, session log setup, and
//! wiring the Scroller to the terminal session. Errors in this phase are
//! reported before the terminal enters raw mode; errors after that propagate
//! through the session guard, which restores the terminal first.

use anyhow::Result;
use clap::{Arg, Command};
use rxless::ui::{renderer, Palette, TerminalSession};
use rxless::{source, Scroller, SessionLog};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("rxless")
        .version(rxless::VERSION)
        .about("File viewer with regexp colorizing")
        .arg(
            Arg::new("file")
                .help("File to view (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("regex")
                .long("regex")
                .value_name("PATTERN")
                .help("Regular expression to match and colorize"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .default_value("rxless.log")
                .help("Session debug log location"),
        )
        .get_matches();

    let path = matches.get_one::<String>("file").map(PathBuf::from);
    let pattern = matches.get_one::<String>("regex").map(String::as_str);
    let log_path = matches
        .get_one::<String>("log-file")
        .expect("log-file has a default");

    // Fatal before raw mode: missing/unreadable input.
    let lines = source::read_lines(path.as_deref())?;
    let input_name = source::input_name(path.as_deref());

    let mut session_log = SessionLog::open(log_path).unwrap_or_else(|err| {
        log::warn!("session log disabled: {err}");
        SessionLog::disabled()
    });
    session_log.event(format_args!("session start: {input_name}"));

    let (width, height) = TerminalSession::size()?;
    session_log.event(format_args!("terminal {width}x{height}"));

    // Fatal before raw mode: invalid --regex.
    let mut scroller = Scroller::new(width, height, lines, pattern, session_log)?;

    let palette = Palette::default();
    let mut session = TerminalSession::enter()?;
    let result = renderer::run(&mut session, &mut scroller, &input_name, &palette);
    let restored = session.restore();

    if let Err(ref err) = result {
        scroller.record(format_args!("session failed: {err}"));
    }
    result?;
    restored?;
    Ok(())
}
