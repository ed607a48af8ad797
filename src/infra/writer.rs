// ============================================================
// Layer 6 — Question List Writer
// ============================================================
// Writes the flat question list as a pretty-printed JSON
// array with 4-space indentation:
//
//   [
//       {
//           "category": "V",
//           "identifier": "VA101",
//           ...
//       }
//   ]
//
// Every character above U+007F is written as a \uXXXX escape
// (lowercase hex, UTF-16 surrogate pairs beyond the BMP), so
// the file is pure ASCII:
//
//   "Spannung über R?"  →  "Spannung \u00fcber R?"
//
// The document is rendered into memory first and written in
// one call, replacing any existing file. Missing parent
// directories are not created.
//
// Reference: serde_json::ser::PrettyFormatter documentation
//            Rust Book §12 (I/O and File Handling)

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::{fs, io, path::PathBuf};

use crate::domain::error::{FlattenError, FlattenResult};
use crate::domain::question::FlatQuestion;
use crate::domain::traits::QuestionSink;

const INDENT: &[u8] = b"    ";

// ─── ASCII Formatter ──────────────────────────────────────────────────────────
/// Pretty layout from [`PrettyFormatter`], with non-ASCII text escaped.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self { pretty: PrettyFormatter::with_indent(indent) }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first:  bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first:  bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer:   &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Render records as a JSON array indented with four spaces.
pub fn to_pretty_json(questions: &[FlatQuestion]) -> FlattenResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter::with_indent(INDENT));
    questions
        .serialize(&mut ser)
        .map_err(FlattenError::Serialize)?;
    Ok(buf)
}

/// Saves the question list to a JSON file on disk.
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl QuestionSink for JsonWriter {
    fn save(&self, questions: &[FlatQuestion]) -> FlattenResult<()> {
        let json = to_pretty_json(questions)?;

        fs::write(&self.path, &json).map_err(|source| FlattenError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Wrote {} questions ({} bytes) to '{}'",
            questions.len(),
            json.len(),
            self.path.display()
        );
        Ok(())
    }
}
