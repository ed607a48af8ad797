// ============================================================
// Layer 4 — Question Extractor
// ============================================================
// Walks the catalog tree depth-first, in document order, and
// collects the question records of every leaf section.
//
// Rules applied to each node of a section list, in order:
//   1. Node has "questions" → take them all, stop here
//   2. Node has "sections"  → recurse into them
//   3. Neither              → error, naming the section path
//
// Example tree and resulting order:
//
//   sections
//     ├── 1 ── 1.1 questions [VA101, VA102]
//     │    └── 1.2 ── 1.2.1 questions [VB101]
//     └── 2 ── 2.1 questions [BA101]
//
//   → [VA101, VA102, VB101, BA101]
//
// Each call returns its own Vec and the caller appends it;
// nothing is accumulated across calls.
//
// Depth is unbounded unless a ceiling is configured. Published
// catalogs nest at most five levels below the root.
//
// Reference: Rust Book §8 (Vectors), §6 (Pattern Matching)

use serde_json::Value;

use crate::domain::catalog::{Catalog, SectionNode};
use crate::domain::error::{FlattenError, FlattenResult};

/// Extracts question records from a catalog tree.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    /// Deepest section level visited (top-level sections are level 1)
    max_depth: Option<usize>,
}

impl Extractor {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Collect every question record of the catalog, consuming it.
    pub fn extract(&self, catalog: Catalog) -> FlattenResult<Vec<Value>> {
        if !self.allows(1) {
            tracing::warn!("Depth limit 0 excludes every section");
            return Ok(Vec::new());
        }
        self.collect(catalog.sections, 1, "")
    }

    fn allows(&self, level: usize) -> bool {
        self.max_depth.map_or(true, |max| level <= max)
    }

    fn collect(
        &self,
        nodes:  Vec<SectionNode>,
        level:  usize,
        parent: &str,
    ) -> FlattenResult<Vec<Value>> {
        let mut blocks = Vec::new();

        for (index, node) in nodes.into_iter().enumerate() {
            let path = section_path(parent, index);

            let found = match node {
                SectionNode { questions: Some(questions), .. } => questions,
                SectionNode { sections: Some(children), .. } => {
                    if self.allows(level + 1) {
                        self.collect(children, level + 1, &path)?
                    } else {
                        tracing::warn!(
                            "Skipping {} child sections of section {} below depth limit {}",
                            children.len(),
                            path,
                            level,
                        );
                        Vec::new()
                    }
                }
                SectionNode { .. } => {
                    return Err(FlattenError::SectionKeyMissing { path });
                }
            };

            blocks.extend(found);
        }

        Ok(blocks)
    }
}

/// Build the 1-based dotted path of a child section, e.g. "2.1.3".
fn section_path(parent: &str, index: usize) -> String {
    if parent.is_empty() {
        (index + 1).to_string()
    } else {
        format!("{}.{}", parent, index + 1)
    }
}

/// Collect the question records of a catalog. `None` walks the whole tree.
pub fn extract_questions(
    catalog:   Catalog,
    max_depth: Option<usize>,
) -> FlattenResult<Vec<Value>> {
    Extractor::new(max_depth).extract(catalog)
}
