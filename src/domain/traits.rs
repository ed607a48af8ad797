// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer reads catalogs and writes question
// lists only through these traits:
//   - CatalogLoader implements CatalogSource  (JSON file)
//   - JsonWriter    implements QuestionSink   (JSON file)
//
// Tests substitute in-memory implementations.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::catalog::Catalog;
use crate::domain::error::FlattenResult;
use crate::domain::question::FlatQuestion;

// ─── CatalogSource ────────────────────────────────────────────────────────────
/// Any component that can produce a parsed question catalog.
pub trait CatalogSource {
    fn load(&self) -> FlattenResult<Catalog>;
}

// ─── QuestionSink ─────────────────────────────────────────────────────────────
/// Any component that can persist the flat question list.
/// Implementations replace whatever the destination held before.
pub trait QuestionSink {
    fn save(&self, questions: &[FlatQuestion]) -> FlattenResult<()>;
}
