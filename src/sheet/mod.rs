//! Input model for parsed worksheets.
//!
//! The conversion core does not read workbook bytes itself; an upstream
//! parser hands it one [`SheetData`] per worksheet. A sheet is a row-major
//! value matrix (rows may have unequal lengths) plus a sparse mapping from
//! cell coordinate to the raw style record the parser observed. Both are
//! immutable inputs to the pipeline.

use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::style::StyleDescriptor;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Date/time value
    DateTime(NaiveDateTime),
    /// Error value (e.g. `#DIV/0!`)
    Error(String),
}

// Largest magnitude at which every integral f64 is exactly representable as
// an i64, so integral floats can take the integer formatting path.
const MAX_EXACT_INT_FLOAT: f64 = 9_007_199_254_740_992.0;

impl fmt::Display for CellValue {
    /// The canonical string form used for header detection, width hints, and
    /// the body of the normalized table. `Empty` renders as the empty
    /// string, never as a placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            CellValue::Int(i) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*i))
            },
            CellValue::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT_INT_FLOAT {
                    let mut buffer = itoa::Buffer::new();
                    f.write_str(buffer.format(*v as i64))
                } else {
                    let mut buffer = ryu::Buffer::new();
                    f.write_str(buffer.format(*v))
                }
            },
            CellValue::String(s) => f.write_str(s),
            CellValue::DateTime(dt) => {
                if dt.time() == NaiveTime::MIN {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            },
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl CellRef {
    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One parsed worksheet: a value matrix plus sparse per-cell styles.
///
/// Rows may have unequal lengths; a missing trailing cell is equivalent to
/// [`CellValue::Empty`]. Cells without an entry in `styles` carry no explicit
/// styling.
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    /// Cell values in row-major order
    pub rows: Vec<Vec<CellValue>>,
    /// Sparse style records keyed by cell coordinate
    pub styles: HashMap<CellRef, StyleDescriptor>,
}

impl SheetData {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the value matrix.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, defined as the maximum row length.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the sheet contains no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}

/// Worksheet metadata surfaced to selection UIs before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetInfo {
    /// Worksheet name
    pub name: String,
    /// Position within the workbook (0-based)
    pub index: usize,
    /// Number of rows
    pub row_count: usize,
    /// Number of columns (maximum row length)
    pub column_count: usize,
    /// Whether the sheet contains any cells
    pub has_data: bool,
}
