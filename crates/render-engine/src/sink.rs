//! Destinations for encoded exports.

use std::path::{Path, PathBuf};

use framer_common::error::{FramerError, FramerResult};

/// Somewhere an encoded image can be saved under a file name.
#[allow(async_fn_in_trait)]
pub trait SaveSink {
    async fn save(&mut self, bytes: Vec<u8>, filename: &str) -> FramerResult<()>;
}

/// Writes each export as a file inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in save order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SaveSink for DirectorySink {
    async fn save(&mut self, bytes: Vec<u8>, filename: &str) -> FramerResult<()> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(FramerError::export(format!(
                "Invalid export file name: {filename:?}"
            )));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        tokio::fs::write(&path, &bytes).await?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Export saved");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps exports in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved `(filename, bytes)` pairs in save order.
    pub fn saved(&self) -> &[(String, Vec<u8>)] {
        &self.saved
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.saved.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl SaveSink for MemorySink {
    async fn save(&mut self, bytes: Vec<u8>, filename: &str) -> FramerResult<()> {
        self.saved.push((filename.to_string(), bytes));
        Ok(())
    }
}
