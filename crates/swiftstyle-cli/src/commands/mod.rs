//! CLI subcommands.

pub mod cache;
pub mod check;
pub mod list_rules;
pub mod output;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Swift files under `root`, sorted for deterministic processing order.
///
/// A `root` that is itself a `.swift` file yields just that file.
pub(crate) fn swift_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "swift"))
        .filter(|path| !is_excluded(path, exclude))
        .collect();
    files.sort();
    files
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    exclude.iter().any(|pattern| {
        let fragment = pattern.replace('*', "");
        !fragment.is_empty() && path_str.contains(&fragment)
    })
}
