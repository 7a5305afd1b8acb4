//! Normalized table assembly.
//!
//! The final artifact the core produces per sheet: an optional header row, a
//! fully stringified body, per-column width hints, and the resolved style
//! lookup. Width hints are a cheap proxy for "widest rendered content"
//! (character count times a fixed scale, floored and capped), not a
//! font-metrics measurement; precise text placement is the renderer's job.

use std::collections::{BTreeMap, HashMap};

use crate::sheet::{CellRef, CellValue};
use crate::style::ResolvedCellStyle;

/// Narrowest width hint a column may receive, in millimeters.
pub const MIN_COLUMN_WIDTH: f32 = 15.0;
/// Width contributed per character of cell text, in millimeters.
pub const WIDTH_PER_CHAR: f32 = 2.0;
/// Widest width hint a column may receive, in millimeters.
pub const MAX_COLUMN_WIDTH: f32 = 55.0;

/// Normalized description of one sheet, ready for the document renderer.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    /// Header row, empty when no header was detected
    pub head: Vec<String>,
    /// Stringified body rows
    pub body: Vec<Vec<String>>,
    /// Per-column width hints keyed by column index
    pub column_widths: BTreeMap<usize, f32>,
    /// Resolved style lookup keyed by original cell coordinate
    pub styles: HashMap<CellRef, ResolvedCellStyle>,
}

impl NormalizedTable {
    /// Whether the table carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty()
    }

    /// Resolved style for a cell, by its coordinate in the original sheet.
    pub fn style(&self, row: usize, col: usize) -> Option<&ResolvedCellStyle> {
        self.styles.get(&CellRef::new(row, col))
    }
}

/// Build the normalized table for one sheet.
///
/// Every cell is converted to its string form (empty string for empty
/// cells). When `has_header` is set, row 0 becomes `head` and the remainder
/// the body; otherwise `head` stays empty and the body is the whole matrix.
/// Degenerate input (no rows, zero columns) yields an empty table, never an
/// error.
pub fn build_table(
    rows: &[Vec<CellValue>],
    has_header: bool,
    styles: HashMap<CellRef, ResolvedCellStyle>,
) -> NormalizedTable {
    let mut text: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(CellValue::to_string).collect())
        .collect();

    let column_widths = width_hints(&text);

    let (head, body) = if has_header && !text.is_empty() {
        let head = text.remove(0);
        (head, text)
    } else {
        (Vec::new(), text)
    };

    NormalizedTable {
        head,
        body,
        column_widths,
        styles,
    }
}

/// One width hint per column, over the maximum row length.
///
/// Short rows contribute nothing to the columns they lack; they are treated
/// as having empty trailing cells, never as an error.
fn width_hints(rows: &[Vec<String>]) -> BTreeMap<usize, f32> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut hints = BTreeMap::new();
    for col in 0..columns {
        let mut width = MIN_COLUMN_WIDTH;
        for row in rows {
            if let Some(cell) = row.get(col) {
                let fitted = (cell.chars().count() as f32 * WIDTH_PER_CHAR).min(MAX_COLUMN_WIDTH);
                width = width.max(fitted);
            }
        }
        hints.insert(col, width);
    }
    hints
}
