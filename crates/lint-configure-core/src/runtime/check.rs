//! Tooling detection for Node.js and the package managers

use crate::answers::PackageManager;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release the installed tooling (husky, eslint) still supports
pub const MIN_NODE_VERSION: &str = "14.0.0";

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if the chosen package manager is available
pub fn check_package_manager(manager: PackageManager) -> RuntimeInfo {
    probe(manager.display_name(), manager.program())
}

/// Parse version string, handling a leading `v` as printed by `node --version`
pub fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}

/// Returns a warning when `node_version` is older than [`MIN_NODE_VERSION`].
/// Unparseable versions are not warned about.
pub fn node_version_warning(node_version: &str) -> Option<String> {
    let installed = parse_version(node_version)?;
    let minimum = parse_version(MIN_NODE_VERSION)?;

    if installed < minimum {
        Some(format!(
            "Node.js {} is older than {}; eslint and husky may fail to install",
            node_version.trim(),
            MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

/// Probe the tooling the run depends on and collect advisory warnings.
/// Missing tools never abort the run; the install stage reports the real failure.
pub fn preflight(manager: PackageManager) -> (Vec<RuntimeInfo>, Vec<String>) {
    let node = check_node();
    let pm = check_package_manager(manager);
    let mut warnings = Vec::new();

    match node.version.as_deref() {
        Some(version) => warnings.extend(node_version_warning(version)),
        None => warnings.push("Node.js not found (install from https://nodejs.org)".to_string()),
    }

    if !pm.available {
        warnings.push(format!("{} not found in PATH", manager.display_name()));
    }

    (vec![node, pm], warnings)
}
