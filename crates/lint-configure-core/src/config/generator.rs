//! Artifact generation and writing

use super::{eslint, husky, lint_staged, prettier, vscode};
use crate::answers::UserConfiguration;
use crate::error::ConfigureError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A generated file: destination relative to the project root, plus content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    fn new(path: &str, content: String) -> Self {
        Self {
            path: PathBuf::from(path),
            content,
        }
    }

    fn json<T: Serialize>(path: &str, document: &T) -> Result<Self, ConfigureError> {
        let content =
            to_pretty_json(document).map_err(|e| ConfigureError::ArtifactWriteFailed {
                path: PathBuf::from(path),
                source: e.into(),
            })?;
        Ok(Self::new(path, content))
    }

    pub fn is_pre_commit_hook(&self) -> bool {
        self.path == Path::new(husky::FILE_NAME)
    }
}

/// Two-space pretty JSON with a trailing newline
fn to_pretty_json<T: Serialize>(document: &T) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

/// Produce every artifact for `config`, in write order.
///
/// Deterministic: the same answers always yield byte-identical content. A
/// document that fails to serialize is reported as `ArtifactWriteFailed`
/// rather than written empty.
pub fn generate(config: &UserConfiguration) -> Result<Vec<Artifact>, ConfigureError> {
    Ok(vec![
        Artifact::json(eslint::FILE_NAME, &eslint::document(config))?,
        Artifact::json(prettier::FILE_NAME, &prettier::PRETTIER_CONFIG)?,
        Artifact::new(
            lint_staged::FILE_NAME,
            lint_staged::LINT_STAGED_CONFIG.to_string(),
        ),
        Artifact::json(vscode::FILE_NAME, &vscode::document())?,
        Artifact::new(
            husky::FILE_NAME,
            husky::pre_commit_script(config.uses_typescript),
        ),
    ])
}

/// Outcome of writing a batch of artifacts
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ConfigureError>,
}

impl WriteReport {
    pub fn is_degraded(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Write one artifact under `root`, creating parent directories
pub async fn write_artifact(
    root: &Path,
    artifact: &Artifact,
) -> Result<PathBuf, ConfigureError> {
    let target = root.join(&artifact.path);
    let fail = |source: std::io::Error| ConfigureError::ArtifactWriteFailed {
        path: artifact.path.clone(),
        source,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).await.map_err(fail)?;
    }
    fs::write(&target, &artifact.content).await.map_err(fail)?;

    Ok(artifact.path.clone())
}

/// Write each artifact independently; one failure does not stop the others.
pub async fn write_artifacts(root: &Path, artifacts: &[Artifact]) -> WriteReport {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        match write_artifact(root, artifact).await {
            Ok(path) => report.written.push(path),
            Err(e) => report.failed.push(e),
        }
    }

    report
}
