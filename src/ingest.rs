//! Record ingestion: raw rows in, [`Tile`]s out.
//!
//! Rows arrive as a JSON array of arrays (the shape a spreadsheet export
//! produces). The first `header_rows` rows are skipped. Each remaining row
//! yields a label, an image reference and a formatted amount such as
//! `"$1,234,567"`, which is normalized to a number.
//!
//! A bad row never aborts the batch. A row without a label is skipped; a
//! row whose amount cannot be read keeps its tile with a value of `0.0`.
//! Both cases are reported as [`IngestIssue`]s.

use std::fmt;

use serde_json::Value;

use crate::error::TilescapeError;
use crate::options::IngestOptions;

/// One ingested record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Display label.
    pub label: String,
    /// Image reference (URL or path), possibly empty.
    pub image: String,
    /// Normalized amount.
    pub value: f64,
}

/// What went wrong with a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The row is not an array or has no label cell; it was skipped.
    MissingLabel,
    /// The amount cell was absent or unreadable; the tile got `0.0`.
    MalformedValue {
        /// The cell text as received.
        raw: String,
    },
}

/// A problem found in one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestIssue {
    /// Zero-based row index in the input, header rows included.
    pub row: usize,
    /// What went wrong.
    pub kind: IssueKind,
}

impl fmt::Display for IngestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingLabel => {
                write!(f, "row {}: no label, skipped", self.row)
            }
            IssueKind::MalformedValue { raw } => {
                write!(f, "row {}: unreadable amount {raw:?}, using 0", self.row)
            }
        }
    }
}

/// Result of ingesting a batch of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Tiles in input order.
    pub tiles: Vec<Tile>,
    /// Rows that were skipped or defaulted.
    pub issues: Vec<IngestIssue>,
}

/// Strip everything but ASCII digits and `.` from `raw`, then read the
/// longest leading decimal number.
///
/// `"$1,234,567"` gives `1234567.0`, `"12.5.3"` gives `12.5`. Returns `None`
/// when no digits remain or the result is not finite.
#[must_use]
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let mut end = 0;
    for (i, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    let number = &cleaned[..end];
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ingest already-parsed rows.
#[must_use]
pub fn ingest_rows(rows: &[Value], opts: &IngestOptions) -> IngestReport {
    let mut report = IngestReport::default();

    for (row_idx, row) in rows.iter().enumerate().skip(opts.header_rows) {
        let cells = row.as_array().map_or(&[][..], Vec::as_slice);
        let Some(label) = cells.get(opts.label_column).map(cell_text) else {
            log::warn!("row {row_idx}: no label, skipping");
            report.issues.push(IngestIssue {
                row: row_idx,
                kind: IssueKind::MissingLabel,
            });
            continue;
        };

        let image = cells
            .get(opts.image_column)
            .map(cell_text)
            .unwrap_or_default();
        let raw = cells
            .get(opts.value_column)
            .map(cell_text)
            .unwrap_or_default();

        let value = normalize_amount(&raw).unwrap_or_else(|| {
            log::warn!("row {row_idx}: unreadable amount {raw:?}, using 0");
            report.issues.push(IngestIssue {
                row: row_idx,
                kind: IssueKind::MalformedValue { raw: raw.clone() },
            });
            0.0
        });

        report.tiles.push(Tile {
            label,
            image,
            value,
        });
    }

    log::debug!(
        "ingested {} tiles ({} issues)",
        report.tiles.len(),
        report.issues.len()
    );
    report
}

/// Parse a JSON document holding an array of rows and ingest it.
///
/// Only a document that is not an array at all is an error; problems
/// inside individual rows are reported in the [`IngestReport`].
pub fn ingest_json(
    json: &str,
    opts: &IngestOptions,
) -> Result<IngestReport, TilescapeError> {
    let doc: Value = serde_json::from_str(json)?;
    let rows = doc.as_array().ok_or_else(|| {
        TilescapeError::Ingest("expected a JSON array of rows".to_owned())
    })?;
    Ok(ingest_rows(rows, opts))
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
