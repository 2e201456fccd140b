use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::StoreError;

/// The flat files a pipeline run reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Description,
    Profile,
    Billing,
    Report,
}

impl Artifact {
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Description => "project_description.txt",
            Artifact::Profile => "project_profile.json",
            Artifact::Billing => "mock_billing.json",
            Artifact::Report => "cost_optimization_report.json",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Write-through artifact storage in a single directory. Every save replaces
/// the previous file wholesale; there is no locking.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.root.join(artifact.file_name())
    }

    pub fn exists(&self, artifact: Artifact) -> bool {
        self.path(artifact).is_file()
    }

    /// Writes `value` as JSON indented with four spaces.
    pub fn save_json<T: Serialize + ?Sized>(
        &self,
        artifact: Artifact,
        value: &T,
    ) -> Result<PathBuf, StoreError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value
            .serialize(&mut ser)
            .map_err(|source| StoreError::Serialize {
                name: artifact.file_name().to_string(),
                source,
            })?;
        self.write(artifact, &buf)
    }

    pub fn load_json(&self, artifact: Artifact) -> Result<Value, StoreError> {
        let path = self.path(artifact);
        let data = self.read(&path)?;
        serde_json::from_str(&data).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Artifact is not valid JSON");
            StoreError::Parse { path, source }
        })
    }

    pub fn save_text(&self, artifact: Artifact, text: &str) -> Result<PathBuf, StoreError> {
        self.write(artifact, text.as_bytes())
    }

    pub fn load_text(&self, artifact: Artifact) -> Result<String, StoreError> {
        self.read(&self.path(artifact))
    }

    fn write(&self, artifact: Artifact, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.path(artifact);
        let result = fs::create_dir_all(&self.root).and_then(|()| fs::write(&path, bytes));
        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved artifact");
                Ok(path)
            }
            Err(source) => {
                tracing::error!(path = %path.display(), error = %source, "Error saving artifact");
                Err(StoreError::Io { path, source })
            }
        }
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), "File not found");
                StoreError::NotFound(path.to_path_buf())
            } else {
                tracing::error!(path = %path.display(), error = %source, "Error reading artifact");
                StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }
}
