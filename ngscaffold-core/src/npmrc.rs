//! `.npmrc` rendering and writing.
//!
//! Line order is fixed:
//!
//! ```text
//! registry=<url>
//! save-exact=<bool>
//! audit=<bool>
//! strict-ssl=true
//! package-lock=true
//! fund=false
//! progress=false
//! @<scope>:registry=<url>    (only when a scope was given)
//! ```

use std::path::{Path, PathBuf};

use crate::error::{io_err, ScaffoldError};
use crate::types::{RegistryConfig, DEFAULT_NPM_CONFIG};

/// File name written at the project root.
pub const NPMRC_FILE: &str = ".npmrc";

/// Build the ordered `key=value` lines for `registry`.
///
/// The `strict-ssl`, `package-lock`, `fund` and `progress` lines come from
/// [`DEFAULT_NPM_CONFIG`] and never depend on the answers.
pub fn npmrc_lines(registry: &RegistryConfig) -> Vec<String> {
    let mut lines = vec![
        format!("registry={}", registry.url),
        format!("save-exact={}", registry.save_exact),
        format!("audit={}", registry.audit),
        format!("strict-ssl={}", DEFAULT_NPM_CONFIG.strict_ssl),
        format!("package-lock={}", DEFAULT_NPM_CONFIG.package_lock),
        format!("fund={}", DEFAULT_NPM_CONFIG.fund),
        format!("progress={}", DEFAULT_NPM_CONFIG.progress),
    ];

    if let Some(scope) = registry.scope.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("@{scope}:registry={}", registry.url));
    }

    lines
}

/// Newline-joined file body. No trailing newline.
pub fn render(registry: &RegistryConfig) -> String {
    npmrc_lines(registry).join("\n")
}

/// Write `.npmrc` into `project_dir`, replacing any existing file.
///
/// Content goes to `.npmrc.tmp` first and is renamed into place. The
/// directory must already exist; it is never created here.
pub fn write_npmrc(project_dir: &Path, registry: &RegistryConfig) -> Result<PathBuf, ScaffoldError> {
    let path = project_dir.join(NPMRC_FILE);
    let tmp = project_dir.join(format!("{NPMRC_FILE}.tmp"));

    if let Err(e) = std::fs::write(&tmp, render(registry)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(&tmp, e));
    }
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(&path, e));
    }

    tracing::info!(path = %path.display(), "wrote npm config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry(scope: Option<&str>) -> RegistryConfig {
        RegistryConfig {
            url: "https://npm.example.com/".to_string(),
            save_exact: false,
            audit: true,
            scope: scope.map(str::to_string),
        }
    }

    #[test]
    fn empty_scope_is_treated_as_absent() {
        assert_eq!(npmrc_lines(&registry(Some(""))).len(), 7);
        assert_eq!(npmrc_lines(&registry(None)).len(), 7);
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let body = render(&registry(None));
        assert!(body.starts_with("registry=https://npm.example.com/\nsave-exact=false\n"));
        assert!(body.ends_with("progress=false"));
    }

    #[test]
    fn write_overwrites_existing_file_and_leaves_no_tmp() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join(".npmrc"), "stale=1\n").expect("seed");

        let path = write_npmrc(dir.path(), &registry(Some("acme"))).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(!written.contains("stale"));
        assert!(written.ends_with("@acme:registry=https://npm.example.com/"));
        assert!(!dir.path().join(".npmrc.tmp").exists());
    }

    #[test]
    fn failed_tmp_write_reports_tmp_path_and_leaves_npmrc_untouched() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join(".npmrc"), "stale=1").expect("seed");
        // A directory squatting on the temp name makes the write fail.
        std::fs::create_dir(dir.path().join(".npmrc.tmp")).expect("mkdir");

        let err = write_npmrc(dir.path(), &registry(None)).unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }), "got: {err}");
        assert!(err.to_string().contains(".npmrc.tmp"));
        let kept = std::fs::read_to_string(dir.path().join(".npmrc")).expect("read");
        assert_eq!(kept, "stale=1");
    }

    #[cfg(unix)]
    #[test]
    fn failed_tmp_write_removes_partial_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("tempdir");
        let tmp = dir.path().join(".npmrc.tmp");
        std::fs::write(&tmp, "partial").expect("seed tmp");
        std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o444)).expect("chmod");
        if std::fs::OpenOptions::new().write(true).open(&tmp).is_ok() {
            // Running as root: permission bits are not enforced.
            return;
        }

        let err = write_npmrc(dir.path(), &registry(None)).unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }), "got: {err}");
        assert!(!tmp.exists(), "leftover temp file must be removed");
        assert!(!dir.path().join(".npmrc").exists());
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("never-generated");

        let err = write_npmrc(&missing, &registry(None)).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }), "got: {err}");
        assert!(err.to_string().contains("never-generated"));
    }
}
