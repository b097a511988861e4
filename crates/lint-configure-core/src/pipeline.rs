//! Sequential stage orchestration
//!
//! Stages run strictly one after another, each awaited to completion:
//! cleanup, dependency install, script registration, artifact writing, hook
//! installation. Cleanup, install and script registration abort the run on
//! failure. Artifact write failures are collected and the run continues; only
//! the pre-commit hook, written by the hook stage, is fatal again.

use crate::answers::UserConfiguration;
use crate::cleanup;
use crate::config::generator::{self, Artifact};
use crate::error::ConfigureError;
use crate::hooks::{self, HookReport};
use crate::install;
use crate::runtime::exec::CommandRunner;
use crate::scripts::{self, Script};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Cleanup,
    Install,
    Scripts,
    Artifacts,
    Hook,
}

impl Stage {
    /// Spinner text while the stage runs
    pub fn running_message(&self) -> &'static str {
        match self {
            Stage::Cleanup => "Removing old files...",
            Stage::Install => "Installing dependencies...",
            Stage::Scripts => "Setting scripts...",
            Stage::Artifacts => "Creating files...",
            Stage::Hook => "Creating husky...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Cleanup => "cleanup",
            Stage::Install => "install",
            Stage::Scripts => "scripts",
            Stage::Artifacts => "artifacts",
            Stage::Hook => "hook",
        };
        write!(f, "{}", name)
    }
}

/// Receives progress from the pipeline; the TUI drives spinners from it
pub trait Reporter {
    fn stage_started(&mut self, stage: Stage);
    fn stage_finished(&mut self, stage: Stage, summary: String);
    fn stage_failed(&mut self, stage: Stage, error: &ConfigureError);
    fn warning(&mut self, message: String);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Leave dependencies as they are (tooling already installed)
    pub skip_install: bool,
}

/// Everything a completed run did
#[derive(Debug, Default)]
pub struct RunSummary {
    pub removed: Vec<PathBuf>,
    pub packages: Vec<&'static str>,
    pub scripts: Vec<Script>,
    pub written: Vec<PathBuf>,
    pub failed_artifacts: Vec<ConfigureError>,
    pub hook: Option<HookReport>,
}

impl RunSummary {
    pub fn is_degraded(&self) -> bool {
        !self.failed_artifacts.is_empty()
    }
}

fn fail<P: Reporter>(reporter: &mut P, stage: Stage, error: ConfigureError) -> ConfigureError {
    reporter.stage_failed(stage, &error);
    error
}

/// Run only the cleanup stage
pub async fn clear<P: Reporter>(
    root: &Path,
    reporter: &mut P,
) -> Result<Vec<PathBuf>, ConfigureError> {
    reporter.stage_started(Stage::Cleanup);
    let removed = cleanup::remove_legacy_files(root)
        .await
        .map_err(|e| fail(reporter, Stage::Cleanup, e))?;

    let summary = if removed.is_empty() {
        "No old files found".to_string()
    } else {
        format!("Old files removed ({})", removed.len())
    };
    reporter.stage_finished(Stage::Cleanup, summary);
    Ok(removed)
}

/// Run every stage for `config` inside `root`.
pub async fn execute<R: CommandRunner, P: Reporter>(
    root: &Path,
    config: &UserConfiguration,
    runner: &R,
    options: PipelineOptions,
    reporter: &mut P,
) -> Result<RunSummary, ConfigureError> {
    let mut summary = RunSummary {
        removed: clear(root, reporter).await?,
        ..RunSummary::default()
    };

    if options.skip_install {
        reporter.warning("Skipping dependency installation".to_string());
    } else {
        reporter.stage_started(Stage::Install);
        summary.packages = install::install_dependencies(runner, config)
            .await
            .map_err(|e| fail(reporter, Stage::Install, e))?;
        reporter.stage_finished(
            Stage::Install,
            format!("Dependencies installed ({})", summary.packages.len()),
        );
    }

    reporter.stage_started(Stage::Scripts);
    summary.scripts = scripts::register_scripts(runner, config)
        .await
        .map_err(|e| fail(reporter, Stage::Scripts, e))?;
    let names: Vec<&str> = summary.scripts.iter().map(|s| s.name).collect();
    reporter.stage_finished(Stage::Scripts, format!("Scripts set: {}", names.join(", ")));

    reporter.stage_started(Stage::Artifacts);
    let (hook, files): (Vec<Artifact>, Vec<Artifact>) = generator::generate(config)
        .map_err(|e| fail(reporter, Stage::Artifacts, e))?
        .into_iter()
        .partition(Artifact::is_pre_commit_hook);

    let report = generator::write_artifacts(root, &files).await;
    summary.written = report.written;
    summary.failed_artifacts = report.failed;
    if summary.failed_artifacts.is_empty() {
        reporter.stage_finished(Stage::Artifacts, "Files created".to_string());
    } else {
        for error in &summary.failed_artifacts {
            reporter.stage_failed(Stage::Artifacts, error);
        }
    }

    reporter.stage_started(Stage::Hook);
    // generate() always yields exactly one pre-commit artifact
    let hook = hook.into_iter().next().ok_or_else(|| {
        fail(
            reporter,
            Stage::Hook,
            ConfigureError::HookInstallFailed {
                message: "no pre-commit hook was generated".to_string(),
                output: String::new(),
            },
        )
    })?;
    let hook_report = hooks::install_hook(runner, root, &hook)
        .await
        .map_err(|e| fail(reporter, Stage::Hook, e))?;
    for warning in &hook_report.warnings {
        reporter.warning(warning.clone());
    }
    summary.written.push(hook.path.clone());
    reporter.stage_finished(Stage::Hook, "Husky created".to_string());
    summary.hook = Some(hook_report);

    Ok(summary)
}
