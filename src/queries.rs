//! Example query loading.
//!
//! Canned example queries live as plain `.rq` files in a directory and are
//! loaded by name. Loading never fails outward: any problem yields a
//! commented error line followed by the default query, so the query panel
//! always has something sensible to show. This is the one asynchronous
//! boundary in the application; a query is fully loaded before anything
//! renders it.

use crate::error::{Result, RqlensError};
use std::path::Path;
use tracing::{debug, warn};

/// Lists the example query names (file stems of `*.rq` files), sorted.
///
/// A missing or unreadable directory is a query error; an empty directory
/// is an empty list.
pub async fn list_queries(dir: &Path) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        RqlensError::query(format!("Could not read {}: {e}", dir.display()))
    })?;

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        RqlensError::query(format!("Could not read {}: {e}", dir.display()))
    })? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "rq") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
    }

    names.sort();
    debug!(count = names.len(), dir = %dir.display(), "listed example queries");
    Ok(names)
}

/// Loads one example query by name, falling back to the default query.
///
/// On any failure the returned text is a comment describing the problem
/// followed by `default_query`, never an error.
pub async fn load_query(dir: &Path, name: &str, default_query: &str) -> String {
    let path = dir.join(format!("{name}.rq"));
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(query = name, error = %e, "failed to load example query");
            format!("# Error loading query: {e}\n{default_query}")
        }
    }
}
