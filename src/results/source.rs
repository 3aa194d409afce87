//! Result sources for rqlens.
//!
//! Provides a trait-based interface for obtaining result sets, allowing the
//! file-backed loader and in-memory test fixtures to be used interchangeably.

use crate::error::{Result, RqlensError};
use crate::results::json::parse_results;
use crate::results::types::TabularResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// A provider of tabular results.
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// A short name for the source, shown as the tab title.
    fn name(&self) -> &str;

    /// Loads the result set.
    async fn load(&self) -> Result<TabularResult>;
}

/// Loads a result set from a SPARQL JSON results file, or stdin for `-`.
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    /// Creates a file source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = if path.as_os_str() == "-" {
            "stdin".to_string()
        } else {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        };
        Self { path, name }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    async fn read_contents(&self) -> Result<String> {
        if self.is_stdin() {
            let mut contents = String::new();
            tokio::io::stdin()
                .read_to_string(&mut contents)
                .await
                .map_err(|e| RqlensError::results(format!("Could not read stdin: {e}")))?;
            return Ok(contents);
        }

        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RqlensError::results(format!("Could not read {}: {e}", self.path.display()))
        })
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<TabularResult> {
        let contents = self.read_contents().await?;
        parse_results(&contents)
    }
}

/// An in-memory result source for tests and fixtures.
pub struct InMemorySource {
    name: String,
    result: TabularResult,
}

impl InMemorySource {
    /// Creates an in-memory source with the given name and result.
    pub fn new(name: impl Into<String>, result: TabularResult) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }
}

#[async_trait]
impl ResultSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<TabularResult> {
        Ok(self.result.clone())
    }
}
