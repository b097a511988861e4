//! Charm-style CLI prompts using cliclack

use crate::answers::{PackageManager, UserConfiguration};
use crate::collector::{self, Prompter};
use crate::error::ConfigureError;
use crate::options::RunOptions;
use crate::pipeline::{self, Reporter, RunSummary, Stage};
use crate::runtime::{check, SystemRunner};
use anyhow::Result;
use colored::Colorize;
use std::io;

/// Answers questions through cliclack inline prompts
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(question).initial_value(default).interact()
    }

    fn select<T: Copy + Eq + Send + 'static>(
        &mut self,
        question: &str,
        choices: &[(T, &'static str)],
        default: T,
    ) -> io::Result<T> {
        let mut select = cliclack::select(question);
        for (value, label) in choices {
            select = select.item(*value, *label, "");
        }
        select.initial_value(default).interact()
    }
}

/// Drives one cliclack spinner per stage
#[derive(Default)]
pub struct SpinnerReporter {
    spinner: Option<cliclack::ProgressBar>,
}

impl Reporter for SpinnerReporter {
    fn stage_started(&mut self, stage: Stage) {
        let spinner = cliclack::spinner();
        spinner.start(stage.running_message());
        self.spinner = Some(spinner);
    }

    fn stage_finished(&mut self, _stage: Stage, summary: String) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(summary);
        }
    }

    fn stage_failed(&mut self, _stage: Stage, error: &ConfigureError) {
        match self.spinner.take() {
            Some(spinner) => spinner.error(error),
            None => {
                let _ = cliclack::log::error(error);
            }
        }
        if let Some(output) = error.process_output() {
            let _ = cliclack::log::error(output);
        }
    }

    fn warning(&mut self, message: String) {
        let _ = cliclack::log::warning(message);
    }
}

/// Run the full interactive flow
pub async fn run(options: RunOptions) -> Result<()> {
    let root = options.project_root()?;

    cliclack::intro("lint-configure")?;
    if options.directory.is_some() {
        cliclack::log::info(format!("Using directory: {}", root.display()))?;
    }

    let config = match collector::collect(&mut CliclackPrompter, &options.presets, &root) {
        Ok(config) => config,
        Err(e) => {
            let _ = cliclack::outro_cancel("Setup cancelled.");
            return Err(e.into());
        }
    };

    check_tooling(&config)?;

    let runner = SystemRunner::new(&root);
    let mut reporter = SpinnerReporter::default();

    let summary = match pipeline::execute(
        &root,
        &config,
        &runner,
        options.pipeline_options(),
        &mut reporter,
    )
    .await
    {
        Ok(summary) => summary,
        Err(e) => {
            cliclack::outro_cancel("Setup aborted. Fix the problem above and run again.")?;
            return Err(e.into());
        }
    };

    print_next_steps(&config, &summary)?;

    Ok(())
}

fn check_tooling(config: &UserConfiguration) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tooling...");

    let (infos, warnings) = check::preflight(config.package_manager);
    let detected: Vec<String> = infos
        .iter()
        .map(|r| match (&r.version, r.available) {
            (Some(version), true) => format!("{} ({})", r.name, version),
            _ => format!("{} (not installed)", r.name),
        })
        .collect();
    spinner.stop(format!("Detected tooling: {}", detected.join(", ")));

    for warning in warnings {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn print_next_steps(config: &UserConfiguration, summary: &RunSummary) -> Result<()> {
    if summary.is_degraded() {
        cliclack::log::warning(format!(
            "{} file(s) could not be created; re-run once the problem is fixed",
            summary.failed_artifacts.len()
        ))?;
    }

    let mut steps = vec![format!("{} lint", run_prefix(config))];
    if config.uses_typescript {
        steps.push(format!("{} type-check", run_prefix(config)));
    }
    steps.push("git commit (the pre-commit hook now lints before every commit)".to_string());

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Happy linting!")?;

    Ok(())
}

fn run_prefix(config: &UserConfiguration) -> &'static str {
    match config.package_manager {
        PackageManager::Npm => "npm run",
        PackageManager::Yarn => "yarn",
    }
}
