//! The questionnaire.
//!
//! Questions are asked through [`Prompter`] so the sequence can be driven by
//! a real terminal in the binary and by scripted answers in tests.

use crate::error::ScaffoldError;
use crate::types::{ProjectAnswers, RegistryConfig, Stylesheet, OPTIONAL_DEPENDENCIES};

/// The primitive question types.
pub trait Prompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, ScaffoldError>;

    /// Free text. An empty answer yields `default`.
    fn input(&mut self, message: &str, default: &str) -> Result<String, ScaffoldError>;

    /// Free text pre-filled with `initial`. The user may edit or clear it,
    /// and an empty answer is returned as `""`.
    fn input_optional(&mut self, message: &str, initial: &str) -> Result<String, ScaffoldError>;

    /// Returns the index of the chosen item.
    fn select(&mut self, message: &str, items: &[&str], default: usize) -> Result<usize, ScaffoldError>;

    /// Returns the indices of the checked items, in ascending order.
    fn multi_select(&mut self, message: &str, items: &[&str]) -> Result<Vec<usize>, ScaffoldError>;
}

pub const USE_DEFAULT_DEPS: &str = "Use default Angular dependencies?";
pub const ADDITIONAL_DEPS: &str = "Select additional dependencies:";
pub const STYLING: &str = "Choose styling preprocessor:";
pub const REGISTRY_URL: &str = "NPM Registry URL:";
pub const SAVE_EXACT: &str = "Save exact versions in package.json?";
pub const AUDIT: &str = "Enable npm audit?";
pub const SCOPE: &str = "Organization scope (optional, without @):";

/// Dependency and styling questions.
///
/// The checklist is only asked when the defaults are declined.
pub fn ask_project(prompter: &mut dyn Prompter) -> Result<ProjectAnswers, ScaffoldError> {
    let use_default_dependencies = prompter.confirm(USE_DEFAULT_DEPS, true)?;

    let additional_dependencies = if use_default_dependencies {
        Vec::new()
    } else {
        prompter
            .multi_select(ADDITIONAL_DEPS, OPTIONAL_DEPENDENCIES)?
            .into_iter()
            .filter_map(|i| OPTIONAL_DEPENDENCIES.get(i))
            .map(|d| d.to_string())
            .collect()
    };

    let labels: Vec<String> = Stylesheet::ALL.iter().map(ToString::to_string).collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
    let choice = prompter.select(STYLING, &labels, 0)?;
    let styling = Stylesheet::ALL.get(choice).copied().unwrap_or_default();

    Ok(ProjectAnswers {
        use_default_dependencies,
        additional_dependencies,
        styling,
    })
}

/// Registry questions. `defaults` supplies the pre-filled answers.
pub fn ask_registry(
    prompter: &mut dyn Prompter,
    defaults: &RegistryConfig,
) -> Result<RegistryConfig, ScaffoldError> {
    let url = prompter.input(REGISTRY_URL, &defaults.url)?;
    let save_exact = prompter.confirm(SAVE_EXACT, defaults.save_exact)?;
    let audit = prompter.confirm(AUDIT, defaults.audit)?;
    let scope = prompter.input_optional(SCOPE, defaults.scope.as_deref().unwrap_or(""))?;

    Ok(RegistryConfig {
        url,
        save_exact,
        audit,
        scope: Some(scope).filter(|s| !s.is_empty()),
    })
}
