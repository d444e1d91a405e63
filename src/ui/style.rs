//! Terminal colors and warning styling

use std::io::{self, IsTerminal, Write};

const BOLD: &str = "\x1b[1m";
const BOLD_YELLOW: &str = "\x1b[1;33m";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Whether stderr is attached to a terminal
pub fn stderr_is_terminal() -> bool {
    io::stderr().is_terminal()
}

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && stderr_is_terminal()
}

fn paint(code: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Yellow text for warnings
pub fn warning_color(text: &str) -> String {
    paint(BOLD_YELLOW, text, colors_enabled())
}

/// Red text for failures
pub fn failure_color(text: &str) -> String {
    paint(BOLD_RED, text, colors_enabled())
}

/// Bold text for commands the operator should copy
pub fn embolden(text: &str) -> String {
    paint(BOLD, text, colors_enabled())
}

/// Print the `WARNING:` header followed by a blank line
pub fn print_warning_header(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", warning_color("WARNING:"))?;
    writeln!(w)
}
