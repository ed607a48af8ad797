// ============================================================
// Layer 3 — Catalog Domain Types
// ============================================================
// The question catalog is a tree:
//
//   Catalog
//     └── sections: Vec<SectionNode>
//           ├── sections: Vec<SectionNode>   (inner node)
//           │     └── ...
//           └── questions: Vec<Value>        (leaf node)
//
// A node carries either child sections or a list of questions.
// Titles and section numbers in the source file are ignored.
// A key that is present must hold an array; an explicit null
// is rejected rather than read as "key absent".
//
// Question records stay as raw serde_json values here; the
// normalizer decides which keys are required.
//
// Reference: Rust Book §5 (Structs), §6 (Option)

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The root of the catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Top-level sections (level 1)
    pub sections: Vec<SectionNode>,
}

/// One grouping level of the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionNode {
    /// Child sections, present on inner nodes
    #[serde(default, deserialize_with = "present")]
    pub sections: Option<Vec<SectionNode>>,

    /// Question records, present on leaf nodes
    #[serde(default, deserialize_with = "present")]
    pub questions: Option<Vec<Value>>,
}

/// Only called for keys that exist, so `null` fails to parse as `T`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
impl SectionNode {
    /// Build an inner node
    pub fn with_sections(sections: Vec<SectionNode>) -> Self {
        Self { sections: Some(sections), questions: None }
    }

    /// Build a leaf node
    pub fn with_questions(questions: Vec<Value>) -> Self {
        Self { sections: None, questions: Some(questions) }
    }
}

#[cfg(test)]
impl Catalog {
    pub fn new(sections: Vec<SectionNode>) -> Self {
        Self { sections }
    }
}

impl Catalog {
    /// Total number of question records reachable through leaf nodes,
    /// without any depth ceiling.
    pub fn question_count(&self) -> usize {
        fn count(nodes: &[SectionNode]) -> usize {
            nodes
                .iter()
                .map(|node| match (&node.questions, &node.sections) {
                    (Some(questions), _) => questions.len(),
                    (None, Some(children)) => count(children),
                    (None, None) => 0,
                })
                .sum()
        }
        count(&self.sections)
    }
}
