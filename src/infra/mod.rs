// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns that sit outside the data pipeline itself:
//
//   writer.rs  — Persisting the flat question list
//                Renders the records as a 4-space indented
//                JSON array and replaces the output file.
//
//   summary.rs — Run report
//                Counts questions per category and logs
//                the totals at the end of a run.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// JSON file writer for the flat question list
pub mod writer;

/// Per-category question counts
pub mod summary;
