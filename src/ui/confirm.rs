//! User confirmation prompts

use dialoguer::Confirm;

use crate::error::Result;

/// Source of yes/no answers from the operator
pub trait Prompter {
    /// Ask `prompt` and return the answer.
    ///
    /// Fails when no answer can be obtained, e.g. stdin is not a terminal.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Prompter reading answers from the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

/// Confirm an action, or skip the prompt entirely when `skip` is set.
///
/// Returns `true` without asking when `skip` is true.
pub fn confirm_action(prompter: &dyn Prompter, prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    prompter.confirm(prompt)
}
