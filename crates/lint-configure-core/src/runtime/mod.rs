//! Process execution and tooling detection
//!
//! This module provides:
//! - A [`CommandRunner`] seam for every external command the stages invoke
//! - Node.js and package manager detection for the preflight check

pub mod check;
pub mod exec;

pub use check::{check_node, check_package_manager, preflight, RuntimeInfo};
pub use exec::{run_checked, CommandOutput, CommandRunner, ShellCommand, SystemRunner};
