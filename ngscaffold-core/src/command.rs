//! External commands: the Angular generator and `npm install`.
//!
//! Commands are modelled as program + argv and executed directly, without a
//! shell. [`ExternalCommand`]'s `Display` gives the familiar one-line form
//! used in logs and error messages.

use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::error::ScaffoldError;
use crate::types::{ProjectName, Stylesheet};

/// Version tag used for `@angular/cli@<pin>` when nothing else is configured.
pub const DEFAULT_ANGULAR_CLI: &str = "latest";

/// A program invocation that has not been run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// `npx @angular/cli@<pin> new <name> --style=<style> --routing=true`
pub fn generator_command(name: &ProjectName, styling: Stylesheet, cli_pin: &str) -> ExternalCommand {
    ExternalCommand::new(
        "npx",
        [
            format!("@angular/cli@{cli_pin}"),
            "new".to_string(),
            name.to_string(),
            format!("--style={}", styling.flag()),
            "--routing=true".to_string(),
        ],
    )
}

/// `npm install <pkg>...` in selection order, or `None` when there is nothing to add.
pub fn install_command(packages: &[String]) -> Option<ExternalCommand> {
    if packages.is_empty() {
        return None;
    }
    let args = std::iter::once("install".to_string()).chain(packages.iter().cloned());
    Some(ExternalCommand::new("npm", args))
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Executes an [`ExternalCommand`] to completion.
pub trait CommandRunner {
    /// Run `command` in `cwd`, blocking until it exits.
    ///
    /// Returns [`ScaffoldError::Spawn`] if the program cannot be started and
    /// [`ScaffoldError::CommandFailed`] if it exits unsuccessfully.
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<(), ScaffoldError>;
}

/// Runs commands as child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<(), ScaffoldError> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "spawning");

        let status = Command::new(resolve_program(&command.program))
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| ScaffoldError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            });
        }

        tracing::info!(command = %command, "command finished");
        Ok(())
    }
}

// npm ships `npx`/`npm` as .cmd shims on Windows.
#[cfg(windows)]
fn resolve_program(program: &str) -> String {
    match program {
        "npx" | "npm" => format!("{program}.cmd"),
        other => other.to_string(),
    }
}

#[cfg(not(windows))]
fn resolve_program(program: &str) -> String {
    program.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generator_command_line() {
        let cmd = generator_command(&ProjectName::from("demo-app"), Stylesheet::Css, "latest");
        assert_eq!(
            cmd.to_string(),
            "npx @angular/cli@latest new demo-app --style=css --routing=true"
        );
    }

    #[test]
    fn generator_honours_pin() {
        let cmd = generator_command(&ProjectName::from("shop"), Stylesheet::Scss, "17.3.0");
        assert_eq!(cmd.args[0], "@angular/cli@17.3.0");
        assert_eq!(cmd.args[3], "--style=scss");
    }

    #[test]
    fn install_preserves_order_and_duplicates() {
        let pkgs = vec![
            "tailwindcss".to_string(),
            "bootstrap".to_string(),
            "tailwindcss".to_string(),
        ];
        let cmd = install_command(&pkgs).expect("some");
        assert_eq!(cmd.to_string(), "npm install tailwindcss bootstrap tailwindcss");
    }

    #[test]
    fn install_skipped_when_empty() {
        assert_eq!(install_command(&[]), None);
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_exit_status() {
        let dir = TempDir::new().expect("tempdir");
        let cmd = ExternalCommand::new("sh", ["-c", "exit 3"]);
        let err = SystemRunner.run(&cmd, dir.path()).unwrap_err();
        assert!(
            matches!(err, ScaffoldError::CommandFailed { code: Some(3), .. }),
            "got: {err}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_runs_in_given_directory() {
        let dir = TempDir::new().expect("tempdir");
        let cmd = ExternalCommand::new("sh", ["-c", "touch marker"]);
        SystemRunner.run(&cmd, dir.path()).expect("run");
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let dir = TempDir::new().expect("tempdir");
        let cmd = ExternalCommand::new("ngscaffold-definitely-not-installed", Vec::<String>::new());
        let err = SystemRunner.run(&cmd, dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Spawn { .. }), "got: {err}");
    }
}
