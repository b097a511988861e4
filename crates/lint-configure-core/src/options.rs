//! Run options shared by the interactive flow and `--clear`

use crate::collector::Presets;
use crate::pipeline::PipelineOptions;
use anyhow::Result;
use std::path::PathBuf;

/// Options for one configuration run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Project root (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Answers supplied up front
    pub presets: Presets,

    /// Skip the dependency install stage
    pub skip_install: bool,
}

impl RunOptions {
    /// Absolute project root; fails when the directory does not exist
    pub fn project_root(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let path = match &self.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => current_dir.join(dir),
            None => current_dir,
        };

        if !path.is_dir() {
            anyhow::bail!("Project directory does not exist: {}", path.display());
        }

        Ok(path)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            skip_install: self.skip_install,
        }
    }
}
