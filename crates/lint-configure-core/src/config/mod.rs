//! Generated configuration files
//!
//! Each submodule owns one artifact's template; [`generator`] turns a
//! [`UserConfiguration`](crate::answers::UserConfiguration) into the full set
//! of artifacts and writes them.

pub mod eslint;
pub mod generator;
pub mod husky;
pub mod lint_staged;
pub mod prettier;
pub mod vscode;

pub use generator::{generate, write_artifact, write_artifacts, Artifact, WriteReport};
