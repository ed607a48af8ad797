// ============================================================
// Layer 4 — Question Normalizer
// ============================================================
// Maps one raw catalog question record onto a FlatQuestion.
//
// Field rules:
//
//   category          first character of "number"
//   identifier        "number", unchanged
//   question          "question", unchanged
//   answer_a..d       null → "", otherwise unchanged
//                     key absent → error (strict mode)
//   picture_question  key present → unchanged (null included)
//   picture_a..d      key absent  → ""
//
// The answer and picture rules differ on purpose: the catalog
// always lists every answer key but omits unused picture keys.
//
// Reference: serde_json::Map documentation
//            Rust Book §6 (Option and match)

use serde_json::{Map, Value};

use crate::domain::error::{FlattenError, FlattenResult, RecordRef};
use crate::domain::question::{FlatQuestion, ANSWER_KEYS, PICTURE_KEYS};

/// Converts raw question records into flat records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    /// Treat an absent answer key like null instead of failing
    lenient_answers: bool,
}

impl Normalizer {
    pub fn new(lenient_answers: bool) -> Self {
        Self { lenient_answers }
    }

    /// Normalize every record, in order. Stops at the first failure.
    pub fn normalize_all(&self, blocks: Vec<Value>) -> FlattenResult<Vec<FlatQuestion>> {
        blocks
            .into_iter()
            .enumerate()
            .map(|(position, block)| self.normalize(position, block))
            .collect()
    }

    /// Normalize one record. `position` is its index in extraction
    /// order and only used for error messages.
    pub fn normalize(&self, position: usize, block: Value) -> FlattenResult<FlatQuestion> {
        let mut record = RecordRef { position, identifier: None };

        let mut fields = match block {
            Value::Object(map) => map,
            _ => {
                return Err(FlattenError::InvalidField {
                    record,
                    key:    "number",
                    reason: "cannot be read, record is not an object",
                })
            }
        };

        // ── Identifier and category ──────────────────────────────────────────
        let identifier = match fields.remove("number") {
            None => return Err(FlattenError::KeyMissing { record, key: "number" }),
            Some(Value::String(number)) => number,
            Some(_) => {
                return Err(FlattenError::InvalidField {
                    record,
                    key:    "number",
                    reason: "is not a string",
                })
            }
        };
        let category = match FlatQuestion::category_of(&identifier) {
            Some(category) => category,
            None => {
                return Err(FlattenError::InvalidField {
                    record,
                    key:    "number",
                    reason: "is empty",
                })
            }
        };
        record.identifier = Some(identifier.clone());

        // ── Question text ────────────────────────────────────────────────────
        let question = fields
            .remove("question")
            .ok_or_else(|| FlattenError::KeyMissing { record: record.clone(), key: "question" })?;

        // ── Answers: null means empty ────────────────────────────────────────
        let [answer_a, answer_b, answer_c, answer_d] = self.answers(&mut fields, &record)?;

        // ── Pictures: absence means empty ────────────────────────────────────
        let [picture_question, picture_a, picture_b, picture_c, picture_d] =
            PICTURE_KEYS.map(|key| fields.remove(key).unwrap_or_else(empty));

        Ok(FlatQuestion {
            category,
            identifier,
            question,
            answer_a,
            answer_b,
            answer_c,
            answer_d,
            picture_question,
            picture_a,
            picture_b,
            picture_c,
            picture_d,
        })
    }

    fn answers(
        &self,
        fields: &mut Map<String, Value>,
        record: &RecordRef,
    ) -> FlattenResult<[Value; 4]> {
        let mut out: [Value; 4] = Default::default();
        for (slot, key) in out.iter_mut().zip(ANSWER_KEYS) {
            *slot = match fields.remove(key) {
                Some(Value::Null) => empty(),
                Some(value) => value,
                None if self.lenient_answers => empty(),
                None => {
                    return Err(FlattenError::KeyMissing { record: record.clone(), key });
                }
            };
        }
        Ok(out)
    }
}

fn empty() -> Value {
    Value::String(String::new())
}
