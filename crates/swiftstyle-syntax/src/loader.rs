//! Filesystem-backed document loading.

use crate::scanner;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use swiftstyle_core::{DocumentLoader, SourceDocument};
use tracing::debug;

/// Loads and scans Swift files from disk, parsing each path at most once.
#[derive(Debug, Default)]
pub struct SwiftLoader {
    cache: RwLock<HashMap<PathBuf, Arc<SourceDocument>>>,
}

impl SwiftLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentLoader for SwiftLoader {
    fn load(&self, path: &Path) -> Option<Arc<SourceDocument>> {
        if let Ok(cache) = self.cache.read() {
            if let Some(document) = cache.get(path) {
                return Some(Arc::clone(document));
            }
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("failed to read {}: {err}", path.display());
                return None;
            }
        };
        let document = Arc::new(scanner::parse(Some(path.to_path_buf()), &contents));

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(path.to_path_buf(), Arc::clone(&document));
        }
        Some(document)
    }
}
