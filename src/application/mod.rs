// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to turn the catalog into the
// flat question list.
//
// Rules for this layer:
//   - No clap types (that's Layer 1)
//   - No JSON parsing or file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The flattening workflow and its configuration
pub mod flatten_use_case;
