//! Plain terminal progress output for non-interactive runs

use crate::error::ConfigureError;
use crate::pipeline::{Reporter, Stage};
use colored::Colorize;

/// Prints one line per stage event with `colored` markers
#[derive(Debug, Default)]
pub struct PlainReporter;

impl Reporter for PlainReporter {
    fn stage_started(&mut self, stage: Stage) {
        println!("  {} {}", "->".blue(), stage.running_message());
    }

    fn stage_finished(&mut self, _stage: Stage, summary: String) {
        println!("  {} {}", "done".green(), summary);
    }

    fn stage_failed(&mut self, _stage: Stage, error: &ConfigureError) {
        eprintln!("  {} {}", "failed".red(), error);
        if let Some(output) = error.process_output() {
            for line in output.lines() {
                eprintln!("    {}", line.dimmed());
            }
        }
    }

    fn warning(&mut self, message: String) {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }
}
