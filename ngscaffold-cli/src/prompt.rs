//! Terminal-backed [`Prompter`] built on dialoguer.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use ngscaffold_core::{Prompter, ScaffoldError};

/// Asks questions on the controlling terminal.
///
/// Every call fails with [`ScaffoldError::Prompt`] when stderr is not a TTY.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_err(err: dialoguer::Error) -> ScaffoldError {
    match err {
        dialoguer::Error::IO(source) => ScaffoldError::Prompt(source),
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, ScaffoldError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_err)
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String, ScaffoldError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)
    }

    // `.default()` would turn an empty answer back into the preset, so the
    // preset goes in as editable text instead.
    fn input_optional(&mut self, message: &str, initial: &str) -> Result<String, ScaffoldError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)
    }

    fn select(&mut self, message: &str, items: &[&str], default: usize) -> Result<usize, ScaffoldError> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_err)
    }

    fn multi_select(&mut self, message: &str, items: &[&str]) -> Result<Vec<usize>, ScaffoldError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .interact()
            .map_err(prompt_err)
    }
}
