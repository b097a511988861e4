//! Dev-dependency installation

use crate::answers::UserConfiguration;
use crate::error::ConfigureError;
use crate::runtime::exec::{run_checked, CommandRunner, ShellCommand};

/// Installed for every project, in install order
pub const BASE_PACKAGES: [&str; 8] = [
    "prettier",
    "eslint",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
    "eslint-plugin-simple-import-sort",
    "husky",
    "lint-staged",
    "eslint-config-next",
];

/// Added when the project uses Tailwind CSS
pub const TAILWIND_PLUGIN: &str = "eslint-plugin-tailwindcss";

/// Packages to install for `config`, base list first.
///
/// The order is stable so repeated runs produce the same lockfile.
pub fn package_list(config: &UserConfiguration) -> Vec<&'static str> {
    let mut packages = BASE_PACKAGES.to_vec();
    if config.uses_tailwind {
        packages.push(TAILWIND_PLUGIN);
    }
    packages
}

/// The package manager invocation that installs `package_list(config)`
pub fn install_command(config: &UserConfiguration) -> ShellCommand {
    let manager = config.package_manager;
    ShellCommand::new(manager.program())
        .args(manager.dev_install_args().iter().copied())
        .args(package_list(config))
}

/// Install the dev tooling, returning the packages that were installed.
pub async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    config: &UserConfiguration,
) -> Result<Vec<&'static str>, ConfigureError> {
    run_checked(runner, &install_command(config))
        .await
        .map_err(|output| ConfigureError::DependencyInstallFailed { output })?;
    Ok(package_list(config))
}
