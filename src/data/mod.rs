// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the catalog file and the flat records:
//
//   fragenkatalog.json
//       │
//       ▼
//   CatalogLoader    → reads the file, parses the section tree
//       │
//       ▼
//   Extractor        → depth-first walk, collects raw questions
//       │
//       ▼
//   Normalizer       → maps each raw question to a FlatQuestion
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads and parses the catalog JSON file
pub mod loader;

/// Collects question records from the section tree
pub mod extractor;

/// Reshapes raw question records into flat records
pub mod normalizer;
