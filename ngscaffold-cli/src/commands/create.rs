//! `ngscaffold create <projectName>`
//!
//! Prompting → Generating → Writing `.npmrc` → (optional) Installing.
//! Any error stops the run; nothing is retried or rolled back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use ngscaffold_core::{
    command::{self, ExternalCommand},
    config, npmrc, prompt, CommandRunner, ProjectConfiguration, ProjectName, Prompter,
    RegistryConfig, ScaffoldConfig, ScaffoldError, SystemRunner,
};

use crate::prompt::TerminalPrompter;

/// Create a new Angular project.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Directory and project name handed to the Angular generator.
    #[arg(value_name = "projectName")]
    pub project_name: String,
}

impl CreateArgs {
    pub fn run(self) -> Result<()> {
        let config = load_defaults()?;
        let base_dir = std::env::current_dir().context("cannot resolve current directory")?;

        let outcome = create_in(
            &base_dir,
            ProjectName::from(self.project_name),
            &config,
            &mut TerminalPrompter::new(),
            &SystemRunner,
        )?;
        tracing::debug!(
            generate = %outcome.generate,
            install = ?outcome.install.as_ref().map(ToString::to_string),
            npmrc = %outcome.npmrc.display(),
            dir = %outcome.project_dir.display(),
            "create finished"
        );

        let name = &outcome.project.project_name;
        println!(
            "{} Project {} created successfully!",
            "✨".green(),
            name.as_str().bold()
        );
        println!("cd {name} to get started");
        Ok(())
    }
}

fn load_defaults() -> Result<ScaffoldConfig> {
    defaults_or_builtin(config::load())
}

/// A missing home directory is not fatal; anything else about the file is.
fn defaults_or_builtin(loaded: Result<ScaffoldConfig, ScaffoldError>) -> Result<ScaffoldConfig> {
    match loaded {
        Ok(config) => Ok(config),
        Err(ScaffoldError::HomeNotFound) => {
            tracing::warn!("home directory not found; using built-in defaults");
            Ok(ScaffoldConfig::default())
        }
        Err(err) => Err(err).context("failed to load ~/.ngscaffold/config.yaml"),
    }
}

/// What a successful run did.
#[derive(Debug)]
pub(crate) struct CreateOutcome {
    pub project: ProjectConfiguration,
    pub project_dir: PathBuf,
    pub npmrc: PathBuf,
    pub generate: ExternalCommand,
    pub install: Option<ExternalCommand>,
}

/// Run the whole pipeline with `base_dir` as the generator's working directory.
pub(crate) fn create_in(
    base_dir: &Path,
    project_name: ProjectName,
    config: &ScaffoldConfig,
    prompter: &mut dyn Prompter,
    runner: &dyn CommandRunner,
) -> Result<CreateOutcome> {
    let answers = prompt::ask_project(prompter).context("failed to collect project options")?;

    println!("🚀 Creating Angular project: {}", project_name.as_str().bold());

    let registry = prompt::ask_registry(prompter, &RegistryConfig::from(&config.registry))
        .context("failed to collect registry options")?;
    let project = ProjectConfiguration::new(project_name, answers, registry);
    tracing::debug!(dependencies = ?project.dependencies(), "resolved dependency set");

    let generate = command::generator_command(
        &project.project_name,
        project.styling,
        &config.generator.angular_cli,
    );
    runner
        .run(&generate, base_dir)
        .with_context(|| format!("failed to generate '{}'", project.project_name))?;

    let project_dir = base_dir.join(project.project_name.as_str());
    let npmrc = npmrc::write_npmrc(&project_dir, &project.registry)
        .context("failed to write .npmrc")?;
    println!("📝 Created .npmrc configuration");

    let install = command::install_command(project.packages_to_install());
    if let Some(install) = &install {
        println!("📦 Installing additional dependencies...");
        runner
            .run(install, &project_dir)
            .context("failed to install additional dependencies")?;
    }

    Ok(CreateOutcome {
        project,
        project_dir,
        npmrc,
        generate,
        install,
    })
}
