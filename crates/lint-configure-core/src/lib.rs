//! lint-configure core - configures ESLint, Prettier, lint-staged and husky
//!
//! This library implements the whole configuration run for an existing
//! JavaScript or TypeScript project. The binary only parses flags and hands
//! over to [`tui::run`] or [`pipeline::clear`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Stages** - cleanup, dependency install, script registration,
//!   artifact generation and hook installation, each a function of an
//!   immutable [`UserConfiguration`]
//! - **Layer 2: Orchestration** - [`pipeline::execute`] runs the stages in
//!   order and reports progress through the [`pipeline::Reporter`] trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use lint_configure_core::{config, UserConfiguration};
//!
//! let answers = UserConfiguration::default();
//! for artifact in config::generate(&answers)? {
//!     println!("{}", artifact.path.display());
//! }
//! ```

pub mod answers;
pub mod cleanup;
pub mod collector;
pub mod config;
pub mod error;
pub mod hooks;
pub mod install;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod runtime;
pub mod scripts;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{Framework, PackageManager, UserConfiguration};
pub use collector::Presets;
pub use config::{generate, Artifact};
pub use error::ConfigureError;
pub use options::RunOptions;
pub use pipeline::{PipelineOptions, Reporter, RunSummary, Stage};
pub use report::PlainReporter;
pub use runtime::{CommandRunner, ShellCommand, SystemRunner};

#[cfg(feature = "tui")]
pub use tui::run;
