//! Cross-document protocol conformance cache.
//!
//! Maps protocol names to the files declaring them so the documentation
//! rule can resolve which members of a conforming type are satisfying an
//! external contract without re-scanning the corpus per lookup.

use crate::document::SourceDocument;
use crate::structure::DeclarationKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while persisting an index snapshot.
#[derive(Debug, Error)]
pub enum IndexError {
    /// IO error writing the snapshot.
    #[error("failed to write snapshot {path}: {source}")]
    Io {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Snapshot serialization failed.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolves a path into a parsed document.
///
/// This is the seam between the engine and whatever frontend parses
/// source files. Returning `None` means the document cannot be provided;
/// the engine degrades rather than erroring.
pub trait DocumentLoader: Send + Sync {
    /// Loads and parses the document at `path`.
    fn load(&self, path: &Path) -> Option<Arc<SourceDocument>>;
}

/// In-memory loader serving pre-built documents.
///
/// Useful for tests and for callers that already hold a parsed corpus.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: HashMap<PathBuf, Arc<SourceDocument>>,
}

impl MemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document under its own path. Pathless documents are
    /// ignored.
    pub fn insert(&mut self, document: SourceDocument) {
        if let Some(path) = document.path.clone() {
            self.documents.insert(path, Arc::new(document));
        }
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, path: &Path) -> Option<Arc<SourceDocument>> {
        self.documents.get(path).cloned()
    }
}

/// A `(name, declaration-kind)` pair identifying a protocol requirement.
///
/// A subtype member equal to one of these is satisfying an external
/// contract and carries no local documentation obligation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtocolMember {
    /// Member name.
    pub name: String,
    /// Declaration kind of the member.
    pub kind: DeclarationKind,
}

/// Mapping from protocol name to the file that declares it.
///
/// Built incrementally: loaded from a persisted snapshot, updated from a
/// document set, persisted again. Read-only during ordinary lint runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolIndex {
    paths: BTreeMap<String, PathBuf>,
}

impl ProtocolIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a snapshot, if one exists and parses.
    ///
    /// Returns `None` for a missing or malformed snapshot, so callers can
    /// tell a fresh build from an incremental one.
    #[must_use]
    pub fn try_load(path: &Path) -> Option<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("no index snapshot at {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(index) => Some(index),
            Err(err) => {
                warn!("malformed index snapshot {}: {err}", path.display());
                None
            }
        }
    }

    /// Loads a snapshot, treating a missing or malformed one as empty.
    ///
    /// Exemption lookups then find nothing and the documentation rule
    /// over-reports instead of failing; callers rely on this policy, so
    /// it must not be upgraded to an error.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_default()
    }

    /// Records every top-level protocol declared by the documents.
    ///
    /// Later documents overwrite earlier ones for the same protocol name,
    /// so insertion order decides conflicts; supply documents in a
    /// deterministic order.
    pub fn update<'a>(&mut self, documents: impl IntoIterator<Item = &'a SourceDocument>) {
        for document in documents {
            let Some(path) = &document.path else { continue };
            for node in document.structure.roots() {
                if node.kind != DeclarationKind::Protocol {
                    continue;
                }
                if let Some(name) = &node.name {
                    self.insert(name.clone(), path.clone());
                }
            }
        }
    }

    /// Inserts or overwrites one entry.
    pub fn insert(&mut self, name: String, path: PathBuf) {
        self.paths.insert(name, path);
    }

    /// Path declaring `name`, if indexed.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).map(PathBuf::as_path)
    }

    /// Number of indexed protocols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Checks whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Writes the snapshot to a temporary sibling and renames it into
    /// place, so a concurrent reader never observes a truncated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if serialization or the write/rename fails.
    pub fn persist(&self, path: &Path) -> Result<(), IndexError> {
        let bytes = serde_json::to_vec_pretty(self)?;
        let staging = path.with_extension("tmp");
        std::fs::write(&staging, &bytes).map_err(|source| IndexError::Io {
            path: staging.clone(),
            source,
        })?;
        std::fs::rename(&staging, path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Direct members of the named protocol.
    ///
    /// Resolves the declaring file through the index, loads it through
    /// the supplied loader, and reads the top-level protocol node whose
    /// name matches. Any failure along the way yields an empty list;
    /// lookups never fail the caller.
    #[must_use]
    pub fn members_of(&self, name: &str, loader: &dyn DocumentLoader) -> Vec<ProtocolMember> {
        let Some(path) = self.resolve(name) else {
            return Vec::new();
        };
        let Some(document) = loader.load(path) else {
            debug!("protocol {name} resolved to unloadable {}", path.display());
            return Vec::new();
        };
        let Some(declaration) = document.structure.roots().find(|node| {
            node.kind == DeclarationKind::Protocol && node.name.as_deref() == Some(name)
        }) else {
            return Vec::new();
        };

        document
            .structure
            .children(declaration)
            .filter_map(|child| {
                child.name.as_ref().map(|member| ProtocolMember {
                    name: member.clone(),
                    kind: child.kind,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Structure, StructureNode};

    fn protocol_document(path: &str, protocols: &[(&str, &[(&str, DeclarationKind)])]) -> SourceDocument {
        let mut structure = Structure::new();
        for (name, members) in protocols {
            let id = structure.add(
                None,
                StructureNode::new(DeclarationKind::Protocol, 0).with_name(*name),
            );
            for (member, kind) in *members {
                structure.add(Some(id), StructureNode::new(*kind, 0).with_name(*member));
            }
        }
        SourceDocument::new(Some(PathBuf::from(path)), "", structure)
    }

    #[test]
    fn update_records_top_level_protocols() {
        let mut index = ProtocolIndex::new();
        index.update([&protocol_document("/a.swift", &[("Fooable", &[])])]);
        assert_eq!(index.resolve("Fooable"), Some(Path::new("/a.swift")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn later_documents_win() {
        let mut index = ProtocolIndex::new();
        index.update([
            &protocol_document("/a.swift", &[("Fooable", &[])]),
            &protocol_document("/b.swift", &[("Fooable", &[])]),
        ]);
        assert_eq!(index.resolve("Fooable"), Some(Path::new("/b.swift")));
    }

    #[test]
    fn incremental_update_matches_single_pass() {
        let a = protocol_document("/a.swift", &[("A", &[])]);
        let b = protocol_document("/b.swift", &[("B", &[])]);
        let c = protocol_document("/c.swift", &[("B", &[]), ("C", &[])]);

        let mut incremental = ProtocolIndex::new();
        incremental.update([&a, &b]);
        incremental.update([&c]);

        let mut single = ProtocolIndex::new();
        single.update([&a, &b, &c]);

        assert_eq!(incremental, single);
        assert_eq!(incremental.resolve("B"), Some(Path::new("/c.swift")));
    }

    #[test]
    fn members_of_reads_direct_children() {
        let document = protocol_document(
            "/p.swift",
            &[(
                "Greets",
                &[
                    ("greeting", DeclarationKind::InstanceVar),
                    ("greet", DeclarationKind::InstanceMethod),
                ],
            )],
        );
        let mut index = ProtocolIndex::new();
        index.update([&document]);
        let mut loader = MemoryLoader::new();
        loader.insert(document);

        let members = index.members_of("Greets", &loader);
        assert_eq!(members.len(), 2);
        assert!(members.contains(&ProtocolMember {
            name: "greet".to_string(),
            kind: DeclarationKind::InstanceMethod,
        }));
    }

    #[test]
    fn members_of_matches_protocol_by_name() {
        let document = protocol_document(
            "/p.swift",
            &[
                ("Greets", &[("greet", DeclarationKind::InstanceMethod)]),
                ("Waves", &[("wave", DeclarationKind::InstanceMethod)]),
            ],
        );
        let mut index = ProtocolIndex::new();
        index.update([&document]);
        let mut loader = MemoryLoader::new();
        loader.insert(document);

        let members = index.members_of("Waves", &loader);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "wave");
    }

    #[test]
    fn lookup_failures_degrade_to_empty() {
        let mut index = ProtocolIndex::new();
        let loader = MemoryLoader::new();
        assert!(index.members_of("Missing", &loader).is_empty());

        // Indexed, but the loader cannot provide the file.
        index.insert("Orphan".to_string(), PathBuf::from("/gone.swift"));
        assert!(index.members_of("Orphan", &loader).is_empty());
    }

    #[test]
    fn persist_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = dir.path().join("protocols.json");

        let mut index = ProtocolIndex::new();
        index.insert("Fooable".to_string(), PathBuf::from("/a.swift"));
        index.persist(&snapshot).expect("persist");

        assert_eq!(ProtocolIndex::load(&snapshot), index);
        assert!(ProtocolIndex::try_load(&snapshot).is_some());
    }

    #[test]
    fn malformed_snapshot_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = dir.path().join("protocols.json");
        std::fs::write(&snapshot, b"not json at all {{").expect("write");

        assert!(ProtocolIndex::try_load(&snapshot).is_none());
        assert!(ProtocolIndex::load(&snapshot).is_empty());
    }

    #[test]
    fn missing_snapshot_loads_as_empty() {
        assert!(ProtocolIndex::load(Path::new("/definitely/not/here.json")).is_empty());
    }
}
