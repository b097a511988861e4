//! Question flow that produces the [`UserConfiguration`]

use crate::answers::{Framework, PackageManager, UserConfiguration};
use crate::error::ConfigureError;
use std::io;
use std::path::Path;

/// Source of answers for `confirm` and `list` questions
pub trait Prompter {
    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool>;

    fn select<T: Copy + Eq + Send + 'static>(
        &mut self,
        question: &str,
        choices: &[(T, &'static str)],
        default: T,
    ) -> io::Result<T>;
}

/// Answers fixed ahead of time (CLI flags); these questions are not asked
#[derive(Debug, Clone, Copy, Default)]
pub struct Presets {
    pub typescript: Option<bool>,
    pub tailwind: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub framework: Option<Framework>,
    /// Take the default for every question without a preset
    pub accept_defaults: bool,
}

pub const FRAMEWORK_QUESTION: &str = "Which framework do you use?";
pub const TAILWIND_QUESTION: &str = "Do you use TailwindCSS?";
pub const TYPESCRIPT_QUESTION: &str = "Do you use TypeScript?";
pub const PACKAGE_MANAGER_QUESTION: &str = "Which package manager do you use?";

const FRAMEWORK_CHOICES: [(Framework, &str); 2] = [
    (Framework::NextJs, "Next.js"),
    (Framework::React, "React"),
];

const PACKAGE_MANAGER_CHOICES: [(PackageManager, &str); 2] = [
    (PackageManager::Npm, "npm"),
    (PackageManager::Yarn, "yarn"),
];

fn confirm<P: Prompter>(
    prompter: &mut P,
    preset: Option<bool>,
    accept_defaults: bool,
    question: &str,
    default: bool,
) -> io::Result<bool> {
    match preset {
        Some(answer) => Ok(answer),
        None if accept_defaults => Ok(default),
        None => prompter.confirm(question, default),
    }
}

fn select<P: Prompter, T: Copy + Eq + Send + 'static>(
    prompter: &mut P,
    preset: Option<T>,
    accept_defaults: bool,
    question: &str,
    choices: &[(T, &'static str)],
    default: T,
) -> io::Result<T> {
    match preset {
        Some(answer) => Ok(answer),
        None if accept_defaults => Ok(default),
        None => prompter.select(question, choices, default),
    }
}

/// Ask the questions in order: framework, Tailwind, TypeScript, package manager.
///
/// The package manager defaults to whatever lockfile `root` contains. Any
/// prompt failure (closed stdin, Ctrl+C) becomes `InputUnavailable`.
pub fn collect<P: Prompter>(
    prompter: &mut P,
    presets: &Presets,
    root: &Path,
) -> Result<UserConfiguration, ConfigureError> {
    let yes = presets.accept_defaults;

    let framework = select(
        prompter,
        presets.framework,
        yes,
        FRAMEWORK_QUESTION,
        &FRAMEWORK_CHOICES,
        Framework::default(),
    )
    .map_err(ConfigureError::InputUnavailable)?;

    let uses_tailwind = confirm(prompter, presets.tailwind, yes, TAILWIND_QUESTION, true)
        .map_err(ConfigureError::InputUnavailable)?;

    let uses_typescript = confirm(prompter, presets.typescript, yes, TYPESCRIPT_QUESTION, true)
        .map_err(ConfigureError::InputUnavailable)?;

    let package_manager = select(
        prompter,
        presets.package_manager,
        yes,
        PACKAGE_MANAGER_QUESTION,
        &PACKAGE_MANAGER_CHOICES,
        PackageManager::detect(root),
    )
    .map_err(ConfigureError::InputUnavailable)?;

    Ok(UserConfiguration {
        uses_typescript,
        uses_tailwind,
        package_manager,
        framework,
    })
}
