//! Domain types for a single scaffolding run.
//!
//! Everything here lives only for the duration of one `create` invocation;
//! nothing is persisted apart from the rendered `.npmrc`.

use std::fmt;

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

/// Packages every generated project is assumed to depend on.
pub const DEFAULT_DEPENDENCIES: &[&str] = &[
    "angular/core",
    "angular/forms",
    "angular/router",
    "angular/common",
    "rxjs",
];

/// Extra packages offered in the dependency checklist, in display order.
pub const OPTIONAL_DEPENDENCIES: &[&str] = &[
    "angular/material",
    "ngrx/store",
    "angular/animations",
    "angular/http",
    "bootstrap",
    "tailwindcss",
];

/// Baseline npm settings. Only `registry`, `save_exact` and `audit` are ever
/// offered to the user; the rest are emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpmDefaults {
    pub registry: &'static str,
    pub strict_ssl: bool,
    pub save_exact: bool,
    pub package_lock: bool,
    pub audit: bool,
    pub fund: bool,
    pub progress: bool,
}

pub const DEFAULT_NPM_CONFIG: NpmDefaults = NpmDefaults {
    registry: "https://registry.npmjs.org/",
    strict_ssl: true,
    save_exact: true,
    package_lock: true,
    audit: true,
    fund: false,
    progress: false,
};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of the project handed to the generator. Not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(pub String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Stylesheet preprocessor passed to the generator's `--style` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stylesheet {
    #[default]
    Css,
    Scss,
    Sass,
    Less,
}

impl Stylesheet {
    /// Catalog order used by the styling question.
    pub const ALL: [Stylesheet; 4] = [
        Stylesheet::Css,
        Stylesheet::Scss,
        Stylesheet::Sass,
        Stylesheet::Less,
    ];

    /// Value for `--style=`.
    pub fn flag(self) -> &'static str {
        match self {
            Stylesheet::Css => "css",
            Stylesheet::Scss => "scss",
            Stylesheet::Sass => "sass",
            Stylesheet::Less => "less",
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stylesheet::Css => write!(f, "CSS"),
            Stylesheet::Scss => write!(f, "SCSS"),
            Stylesheet::Sass => write!(f, "SASS"),
            Stylesheet::Less => write!(f, "Less"),
        }
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// Answers to the registry half of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub url: String,
    pub save_exact: bool,
    pub audit: bool,
    /// Organisation scope without the leading `@`. `None` when left blank.
    pub scope: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NPM_CONFIG.registry.to_string(),
            save_exact: DEFAULT_NPM_CONFIG.save_exact,
            audit: DEFAULT_NPM_CONFIG.audit,
            scope: None,
        }
    }
}

/// Answers to the project half of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectAnswers {
    pub use_default_dependencies: bool,
    /// Always empty when `use_default_dependencies` is true.
    pub additional_dependencies: Vec<String>,
    pub styling: Stylesheet,
}

/// Everything gathered for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfiguration {
    pub project_name: ProjectName,
    pub use_default_dependencies: bool,
    pub additional_dependencies: Vec<String>,
    pub styling: Stylesheet,
    pub registry: RegistryConfig,
}

impl ProjectConfiguration {
    pub fn new(project_name: ProjectName, answers: ProjectAnswers, registry: RegistryConfig) -> Self {
        Self {
            project_name,
            use_default_dependencies: answers.use_default_dependencies,
            additional_dependencies: answers.additional_dependencies,
            styling: answers.styling,
            registry,
        }
    }

    /// Defaults first, then the user's picks. No de-duplication.
    pub fn dependencies(&self) -> Vec<String> {
        DEFAULT_DEPENDENCIES
            .iter()
            .map(|d| d.to_string())
            .chain(self.additional_dependencies.iter().cloned())
            .collect()
    }

    /// Packages that need an explicit `npm install` after generation.
    pub fn packages_to_install(&self) -> &[String] {
        if self.use_default_dependencies {
            &[]
        } else {
            &self.additional_dependencies[..]
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_defaults: bool, extra: &[&str]) -> ProjectConfiguration {
        ProjectConfiguration::new(
            ProjectName::from("demo-app"),
            ProjectAnswers {
                use_default_dependencies: use_defaults,
                additional_dependencies: extra.iter().map(|s| s.to_string()).collect(),
                styling: Stylesheet::Scss,
            },
            RegistryConfig::default(),
        )
    }

    #[test]
    fn stylesheet_display_and_flag() {
        let labels: Vec<String> = Stylesheet::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["CSS", "SCSS", "SASS", "Less"]);
        assert_eq!(Stylesheet::Less.flag(), "less");
        assert_eq!(Stylesheet::Scss.flag(), "scss");
    }

    #[test]
    fn dependencies_put_defaults_first_without_dedup() {
        let cfg = config(false, &["rxjs", "bootstrap"]);
        let deps = cfg.dependencies();
        assert_eq!(deps.len(), DEFAULT_DEPENDENCIES.len() + 2);
        assert_eq!(deps[0], "angular/core");
        assert_eq!(&deps[DEFAULT_DEPENDENCIES.len()..], ["rxjs", "bootstrap"]);
    }

    #[test]
    fn nothing_to_install_with_default_dependencies() {
        assert!(config(true, &[]).packages_to_install().is_empty());
        assert_eq!(config(false, &["bootstrap"]).packages_to_install(), ["bootstrap"]);
    }

    #[test]
    fn registry_defaults_follow_npm_table() {
        let reg = RegistryConfig::default();
        assert_eq!(reg.url, "https://registry.npmjs.org/");
        assert!(reg.save_exact);
        assert!(reg.audit);
        assert_eq!(reg.scope, None);
    }
}
