/// Diagnostics output
///
/// Stdout belongs to the report. Progress and errors go to stderr so that
/// `--json` and `--markdown` output can be piped as-is.
use std::io::{self, IsTerminal, Write};

const STATUS_PREFIX: &str = "double-check";

/// Print a progress line, e.g. "double-check: WCIF fetched successfully!"
pub fn status(msg: &str) {
    eprintln!("{}: {}", STATUS_PREFIX, msg);
}

/// Print "error: <msg>" to stderr, with a bold red label on a terminal
pub fn print_error(msg: &str) {
    if io::stderr().is_terminal() {
        if let Some(mut t) = term::stderr() {
            if t.fg(term::color::BRIGHT_RED).is_ok() {
                let _ = t.attr(term::Attr::Bold);
                let _ = write!(t, "error");
                let _ = t.reset();
                let _ = writeln!(t, ": {}", msg);
                return;
            }
        }
    }
    eprintln!("error: {}", msg);
}
