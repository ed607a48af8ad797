// ============================================================
// Layer 3 — FlatQuestion Domain Type
// ============================================================
// The flat, non-nested representation of one exam question.
// This is the record shape the learning application reads.
//
// Field order here IS the key order of the output file, since
// serde serialises struct fields in declaration order.
//
// Text fields are kept as serde_json values so they pass
// through byte-for-byte, including a null picture reference.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys of the four answer texts, in output order.
pub const ANSWER_KEYS: [&str; 4] = ["answer_a", "answer_b", "answer_c", "answer_d"];

/// Keys of the five picture references, in output order.
pub const PICTURE_KEYS: [&str; 5] = [
    "picture_question",
    "picture_a",
    "picture_b",
    "picture_c",
    "picture_d",
];

/// One question with every field at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatQuestion {
    /// First character of the identifier, e.g. "V", "B", "N", "E", "A"
    pub category: String,

    /// The catalog number, e.g. "VA101"
    pub identifier: String,

    /// The question prompt
    pub question: Value,

    // Answer texts ("" when the catalog has null)
    pub answer_a: Value,
    pub answer_b: Value,
    pub answer_c: Value,
    pub answer_d: Value,

    // Picture references ("" when the catalog has no such key)
    pub picture_question: Value,
    pub picture_a: Value,
    pub picture_b: Value,
    pub picture_c: Value,
    pub picture_d: Value,
}

impl FlatQuestion {
    /// Derive the category from an identifier.
    /// Returns None for an empty identifier.
    pub fn category_of(identifier: &str) -> Option<String> {
        identifier.chars().next().map(String::from)
    }
}
