//! ngscaffold core library — answers, `.npmrc` rendering, external commands.
//!
//! Public API surface:
//! - [`types`] — project name, stylesheet, dependency catalogs, answer records
//! - [`prompt`] — [`Prompter`] trait and the question sequence
//! - [`npmrc`] — `.npmrc` lines and writer
//! - [`command`] — generator/install commands and [`CommandRunner`]
//! - [`config`] — optional `~/.ngscaffold/config.yaml` defaults
//! - [`error`] — [`ScaffoldError`]

pub mod command;
pub mod config;
pub mod error;
pub mod npmrc;
pub mod prompt;
pub mod types;

pub use command::{CommandRunner, ExternalCommand, SystemRunner};
pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use prompt::Prompter;
pub use types::{
    ProjectAnswers, ProjectConfiguration, ProjectName, RegistryConfig, Stylesheet,
    DEFAULT_DEPENDENCIES, DEFAULT_NPM_CONFIG, OPTIONAL_DEPENDENCIES,
};
