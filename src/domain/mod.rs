// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing the question catalog
// and the flat question list it is reshaped into.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap types
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The nested input tree: catalog root and section nodes
pub mod catalog;

// The flat output record
pub mod question;

// Error taxonomy shared by every layer below the CLI
pub mod error;

// Abstractions for reading catalogs and writing question lists
pub mod traits;
