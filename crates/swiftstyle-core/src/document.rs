//! Parsed source documents consumed by the engine.
//!
//! The engine never parses text itself; a frontend collaborator supplies
//! each document as contents plus a declaration tree, and the line table
//! is derived here.

use crate::structure::Structure;
use crate::types::Location;
use std::path::PathBuf;

/// One line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line number (1-indexed).
    pub index: usize,
    /// Line content without its terminator.
    pub content: String,
    /// Byte offset of the line start within the document contents.
    pub offset: usize,
}

/// A source file already parsed into text, a line table, and a declaration
/// tree.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path the document was read from; `None` for synthetic documents.
    pub path: Option<PathBuf>,
    /// Full text.
    pub contents: String,
    /// Line table derived from the contents.
    pub lines: Vec<Line>,
    /// Declaration tree.
    pub structure: Structure,
}

impl SourceDocument {
    /// Creates a document, deriving its line table from the contents.
    #[must_use]
    pub fn new(path: Option<PathBuf>, contents: impl Into<String>, structure: Structure) -> Self {
        let contents = contents.into();
        let lines = line_table(&contents);
        Self {
            path,
            contents,
            lines,
            structure,
        }
    }

    /// Resolves a byte offset into a full location.
    ///
    /// The character column counts UTF-16 code units from the line start.
    /// An offset that does not fall on a character boundary resolves to
    /// its line with no character column.
    #[must_use]
    pub fn location(&self, offset: usize) -> Location {
        let line = self.lines.iter().rev().find(|line| line.offset <= offset);
        let (line_index, character) = match line {
            Some(line) => {
                let character = self
                    .contents
                    .get(line.offset..offset)
                    .map(|prefix| prefix.encode_utf16().count() + 1);
                (line.index, character)
            }
            None => (1, None),
        };
        Location {
            file: self.path.clone(),
            line: line_index,
            character,
            offset: Some(offset),
        }
    }

    /// First line of the document, if any.
    #[must_use]
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(|line| line.content.as_str())
    }
}

/// Splits contents into lines, dropping the empty tail segment a trailing
/// newline would otherwise produce.
fn line_table(contents: &str) -> Vec<Line> {
    if contents.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<&str> = contents.split('\n').collect();
    if contents.ends_with('\n') {
        segments.pop();
    }

    let mut lines = Vec::with_capacity(segments.len());
    let mut offset = 0;
    for (i, content) in segments.iter().enumerate() {
        lines.push(Line {
            index: i + 1,
            content: (*content).to_string(),
            offset,
        });
        offset += content.len() + 1;
    }
    lines
}
