//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners,
//! confirmation prompts and warning styling.

mod confirm;
mod spinner;
mod style;

pub use confirm::{confirm_action, Prompter, TerminalPrompter};
pub use spinner::{create_spinner, finish_spinner};
pub use style::{
    embolden, failure_color, print_warning_header, stderr_is_terminal, warning_color,
};
