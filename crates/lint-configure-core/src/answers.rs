//! The answers collected from the user for one run

use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Package manager used to install the dev tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Program name invoked for installs
    pub fn program(&self) -> &'static str {
        self.display_name()
    }

    /// Arguments preceding the package list in a dev-dependency install
    pub fn dev_install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "-D"],
            PackageManager::Yarn => &["add", "-D"],
        }
    }

    /// Lockfile whose presence marks a project as managed by this tool
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    /// Guess the package manager from the lockfile present in `root`.
    /// Falls back to npm when no yarn lockfile exists.
    pub fn detect(root: &Path) -> PackageManager {
        if root.join(PackageManager::Yarn.lockfile()).exists() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Web framework whose ESLint preset gets extended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Framework {
    #[default]
    #[value(name = "next", alias = "nextjs")]
    NextJs,
    #[value(name = "react", alias = "reactjs")]
    React,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::React => "React",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the later stages need to know about the project.
///
/// Built once by the collector and then only borrowed; no stage holds a
/// mutable reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserConfiguration {
    pub uses_typescript: bool,
    pub uses_tailwind: bool,
    pub package_manager: PackageManager,
    pub framework: Framework,
}

impl Default for UserConfiguration {
    fn default() -> Self {
        Self {
            uses_typescript: true,
            uses_tailwind: true,
            package_manager: PackageManager::Npm,
            framework: Framework::NextJs,
        }
    }
}
