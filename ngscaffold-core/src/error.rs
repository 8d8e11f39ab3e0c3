//! Error types for ngscaffold-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while scaffolding a project.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The prompt engine could not ask a question (e.g. stdin is not a terminal).
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// Filesystem failure, annotated with the path being touched.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external program could not be started at all.
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program ran but exited unsuccessfully.
    #[error("`{command}` exited with {}", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The defaults file exists but is not valid YAML for [`crate::config::ScaffoldConfig`].
    #[error("failed to parse defaults at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Convenience constructor for [`ScaffoldError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.into(),
        source,
    }
}
