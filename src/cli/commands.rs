// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag is optional. With no arguments the tool reads and
// writes the fixed resource paths and walks the whole tree.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use std::path::PathBuf;

use crate::application::flatten_use_case::{FlattenConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Arguments of the flattening run.
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Nested question catalog to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Flat question list to write (overwritten if present)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Deepest section level to visit; deeper sections are skipped.
    /// Published catalogs nest at most 5 levels deep
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Treat a missing answer_a..answer_d key like null instead of failing
    #[arg(long)]
    pub lenient_answers: bool,
}

/// The application layer never sees clap types.
impl From<FlattenArgs> for FlattenConfig {
    fn from(a: FlattenArgs) -> Self {
        FlattenConfig {
            input:           a.input,
            output:          a.output,
            max_depth:       a.max_depth,
            lenient_answers: a.lenient_answers,
        }
    }
}
