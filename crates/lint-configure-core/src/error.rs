//! Failure taxonomy shared by every stage

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the configuration stages
#[derive(Debug, Error)]
pub enum ConfigureError {
    /// The prompt could not read an answer (stdin closed, not a terminal, Ctrl+C)
    #[error("Could not read input: {0}")]
    InputUnavailable(#[source] io::Error),

    #[error("Error removing old files ({}): {source}", .path.display())]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error installing dependencies")]
    DependencyInstallFailed { output: String },

    #[error("Error setting scripts")]
    ScriptRegistrationFailed { output: String },

    #[error("Error creating file {}: {source}", .path.display())]
    ArtifactWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating husky hook: {message}")]
    HookInstallFailed { message: String, output: String },
}

impl ConfigureError {
    /// Captured output of the external process that caused the failure, if any
    pub fn process_output(&self) -> Option<&str> {
        match self {
            ConfigureError::DependencyInstallFailed { output }
            | ConfigureError::ScriptRegistrationFailed { output }
            | ConfigureError::HookInstallFailed { output, .. } => {
                Some(output.as_str()).filter(|o| !o.trim().is_empty())
            }
            _ => None,
        }
    }
}
