//! Cache command implementation.
//!
//! Builds or refreshes the protocol conformance cache. When the existing
//! snapshot loads, only the supplied changed paths are rescanned; when it
//! is missing or malformed, the supplied directories are scanned as well
//! and the cache is rebuilt from scratch.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swiftstyle_core::{DocumentLoader, ProtocolIndex, SourceDocument};
use swiftstyle_syntax::SwiftLoader;

/// Runs the cache command.
pub fn run(cache_path: &Path, directories: &[PathBuf], paths: &[PathBuf]) -> Result<()> {
    let (mut index, fresh) = match ProtocolIndex::try_load(cache_path) {
        Some(index) => (index, false),
        None => (ProtocolIndex::new(), true),
    };

    let mut files: Vec<PathBuf> = paths
        .iter()
        .flat_map(|path| super::swift_files(path, &[]))
        .collect();
    if fresh {
        tracing::info!("no usable snapshot, scanning directories");
        for directory in directories {
            files.extend(super::swift_files(directory, &[]));
        }
    }
    files.sort();
    files.dedup();

    let loader = SwiftLoader::new();
    let documents: Vec<Arc<SourceDocument>> =
        files.iter().filter_map(|file| loader.load(file)).collect();
    index.update(documents.iter().map(Arc::as_ref));

    index
        .persist(cache_path)
        .with_context(|| format!("failed to write cache {}", cache_path.display()))?;

    println!(
        "Cached {} protocol(s) from {} file(s) to {}",
        index.len(),
        documents.len(),
        cache_path.display()
    );
    Ok(())
}
