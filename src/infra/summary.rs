// ============================================================
// Layer 6 — Category Summary
// ============================================================
// Counts the flattened questions per category and reports the
// result through tracing once a run is complete.
//
// Example log output:
//   INFO Flattened 2 questions
//   INFO   category A: 1
//   INFO   category V: 1

use std::collections::BTreeMap;

use crate::domain::question::FlatQuestion;

/// Number of questions per category, ordered by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    counts: BTreeMap<String, usize>,
}

impl CategorySummary {
    pub fn from_questions(questions: &[FlatQuestion]) -> Self {
        let mut counts = BTreeMap::new();
        for q in questions {
            *counts.entry(q.category.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(c, n)| (c.as_str(), *n))
    }

    pub fn log(&self) {
        tracing::info!("Flattened {} questions", self.total());
        for (category, count) in self.categories() {
            tracing::info!("  category {}: {}", category, count);
        }
    }
}
