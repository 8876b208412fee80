//! List available rules.

use anyhow::Result;
use std::sync::Arc;
use swiftstyle_core::{Config, MemoryLoader, ProtocolIndex};
use swiftstyle_rules::catalog;

/// Prints the catalog in evaluation order.
pub fn run() -> Result<()> {
    let rules = catalog(
        &Config::default(),
        ProtocolIndex::new(),
        Arc::new(MemoryLoader::new()),
    )?;
    for rule in &rules {
        let description = rule.description();
        println!("{:<26} {}", description.identifier, description.description);
    }
    Ok(())
}
