// ============================================================
// Layer 2 — FlattenUseCase
// ============================================================
// Runs the full pipeline in order:
//
//   Step 1: Load the catalog            (Layer 4 - data)
//   Step 2: Extract question records    (Layer 4 - data)
//   Step 3: Normalize every record      (Layer 4 - data)
//   Step 4: Save the flat list          (Layer 6 - infra)
//   Step 5: Report category counts      (Layer 6 - infra)
//
// Any failure aborts the run. The output file is only touched
// in Step 4, after every record normalized successfully.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::PathBuf;

use crate::data::{extractor::extract_questions, loader::CatalogLoader, normalizer::Normalizer};
use crate::domain::error::FlattenResult;
use crate::domain::question::FlatQuestion;
use crate::domain::traits::{CatalogSource, QuestionSink};
use crate::infra::{summary::CategorySummary, writer::JsonWriter};

/// Catalog location used when no --input is given
pub const DEFAULT_INPUT: &str = "./resources/fragenkatalog/fragenkatalog.json";

/// Question list location used when no --output is given
pub const DEFAULT_OUTPUT: &str = "./resources/ffh_questions.json";

// ─── Flatten Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenConfig {
    pub input:           PathBuf,
    pub output:          PathBuf,
    /// Deepest section level to visit; None walks the whole tree
    pub max_depth:       Option<usize>,
    /// Accept records without some answer keys
    pub lenient_answers: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            input:           PathBuf::from(DEFAULT_INPUT),
            output:          PathBuf::from(DEFAULT_OUTPUT),
            max_depth:       None,
            lenient_answers: false,
        }
    }
}

// ─── FlattenUseCase ───────────────────────────────────────────────────────────
pub struct FlattenUseCase {
    config: FlattenConfig,
}

impl FlattenUseCase {
    pub fn new(config: FlattenConfig) -> Self {
        Self { config }
    }

    /// Run against the files named in the configuration.
    pub fn execute(&self) -> FlattenResult<CategorySummary> {
        let cfg = &self.config;
        tracing::info!("Loading catalog from '{}'", cfg.input.display());

        let writer = JsonWriter::new(&cfg.output);
        let summary = self.run_with(&CatalogLoader::new(&cfg.input), &writer)?;

        tracing::info!("Saved question list to '{}'", writer.path().display());
        Ok(summary)
    }

    /// Run against any catalog source and question sink.
    pub fn run_with(
        &self,
        source: &impl CatalogSource,
        sink:   &impl QuestionSink,
    ) -> FlattenResult<CategorySummary> {
        let cfg = &self.config;

        // ── Step 1: Load ─────────────────────────────────────────────────────
        let catalog = source.load()?;
        let reachable = catalog.question_count();

        // ── Step 2: Extract ──────────────────────────────────────────────────
        let blocks = extract_questions(catalog, cfg.max_depth)?;
        tracing::info!("Extracted {} question records", blocks.len());
        if blocks.len() < reachable {
            tracing::warn!(
                "{} questions lie below the depth limit and were left out",
                reachable - blocks.len()
            );
        }

        // ── Step 3: Normalize ────────────────────────────────────────────────
        let questions: Vec<FlatQuestion> =
            Normalizer::new(cfg.lenient_answers).normalize_all(blocks)?;

        // ── Step 4: Save ─────────────────────────────────────────────────────
        sink.save(&questions)?;

        // ── Step 5: Report ───────────────────────────────────────────────────
        let summary = CategorySummary::from_questions(&questions);
        summary.log();
        Ok(summary)
    }
}
