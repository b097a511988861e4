//! husky initialization and pre-commit hook installation

use crate::config::generator::{write_artifact, Artifact};
use crate::error::ConfigureError;
use crate::runtime::exec::{run_checked, CommandRunner, ShellCommand};
use std::path::{Path, PathBuf};

/// Initializes husky's hook directory and points git at it
pub fn husky_install_command() -> ShellCommand {
    ShellCommand::new("npx").args(["husky", "install"])
}

/// Autofix pass run once after the hook is in place
pub fn lint_fix_command() -> ShellCommand {
    ShellCommand::new("npm").args(["run", "lint:fix"])
}

/// What happened during hook installation beyond the fatal steps
#[derive(Debug, Default)]
pub struct HookReport {
    pub hook_path: PathBuf,
    /// Non-fatal problems (permission bits, autofix pass)
    pub warnings: Vec<String>,
}

/// Install husky and the pre-commit hook.
///
/// `husky install` and the hook write are fatal (`HookInstallFailed`); the
/// executable bit and the follow-up `lint:fix` pass only add warnings.
pub async fn install_hook<R: CommandRunner>(
    runner: &R,
    root: &Path,
    hook: &Artifact,
) -> Result<HookReport, ConfigureError> {
    run_checked(runner, &husky_install_command())
        .await
        .map_err(|output| ConfigureError::HookInstallFailed {
            message: "husky install failed".to_string(),
            output,
        })?;

    let relative = write_artifact(root, hook)
        .await
        .map_err(|e| ConfigureError::HookInstallFailed {
            message: e.to_string(),
            output: String::new(),
        })?;
    let hook_path = root.join(&relative);

    let mut warnings = Vec::new();

    if let Err(e) = make_executable(&hook_path) {
        warnings.push(format!(
            "Could not mark {} executable: {}",
            relative.display(),
            e
        ));
    }

    if let Err(output) = run_checked(runner, &lint_fix_command()).await {
        warnings.push(format!("Initial lint:fix pass failed\n{}", output));
    }

    Ok(HookReport {
        hook_path,
        warnings,
    })
}

/// Add the owner and group execute bits (`chmod ug+x`)
#[cfg(unix)]
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o110);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
