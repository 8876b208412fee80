//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use swiftstyle_core::{
    Config, DocumentLoader, LintResult, Linter, ProtocolIndex, Severity,
};
use swiftstyle_rules::catalog;
use swiftstyle_syntax::SwiftLoader;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = match config_path {
        Some(p) => Config::from_file(p)
            .with_context(|| format!("failed to load config: {}", p.display()))?,
        None => Config::default(),
    };

    // The index is built beforehand by `cache`; here it is read-only.
    let index = config
        .cache_path
        .as_deref()
        .map_or_else(ProtocolIndex::new, ProtocolIndex::load);

    let loader = Arc::new(SwiftLoader::new());
    let rules = catalog(&config, index, Arc::clone(&loader) as Arc<dyn DocumentLoader>)
        .context("failed to build rule catalog")?;
    let linter = Linter::new(rules);

    let mut excludes = exclude;
    excludes.extend(config.exclude.clone());

    let files = super::swift_files(path, &excludes);
    tracing::info!(
        "linting {} file(s) under {} with {} rules",
        files.len(),
        path.display(),
        linter.rules().len()
    );

    let mut result = LintResult::new();
    for file in &files {
        let Some(document) = loader.load(file) else {
            tracing::warn!("skipping unreadable {}", file.display());
            continue;
        };
        result.violations.extend(linter.lint(&document));
        result.files_checked += 1;
    }

    // Engine output is unsorted by design; order it for display.
    result.violations.sort_by(|a, b| {
        a.location
            .file
            .cmp(&b.location.file)
            .then(a.location.line.cmp(&b.location.line))
            .then(a.location.character.cmp(&b.location.character))
    });

    super::output::print(&result, format)?;

    if result.has_violations_at(Severity::Warning) {
        std::process::exit(1);
    }
    Ok(())
}
