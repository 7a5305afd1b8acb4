//! Header-row detection.
//!
//! Workbooks do not record whether their first row is a header, so the
//! layout engine infers it from the first two rows alone: a header row is
//! mostly text sitting above a row that is mostly numbers. The heuristic is
//! cheap and local, and it misclassifies sheets whose header row is itself
//! numeric (e.g. years as column labels). Known limitation.

use crate::sheet::CellValue;

/// Decide whether row 0 of the given matrix is a header row.
///
/// Counts cells in row 0 whose string form is non-empty and not parseable
/// as a number, and cells in row 1 whose string form is non-empty and
/// parseable. Row 0 is a header iff the first count strictly exceeds the
/// second and is non-zero. Sheets with fewer than two rows have no header.
///
/// # Examples
///
/// ```rust
/// use quire::CellValue;
/// use quire::layout::detect_header;
///
/// let rows = vec![
///     vec![CellValue::String("Name".into()), CellValue::String("Age".into())],
///     vec![CellValue::String("Alice".into()), CellValue::Int(30)],
/// ];
/// assert!(detect_header(&rows));
/// ```
pub fn detect_header(rows: &[Vec<CellValue>]) -> bool {
    if rows.len() < 2 {
        return false;
    }

    let text_like = rows[0].iter().filter(|cell| is_text_like(cell)).count();
    let number_like = rows[1].iter().filter(|cell| is_number_like(cell)).count();

    text_like > number_like && text_like > 0
}

fn is_text_like(cell: &CellValue) -> bool {
    let text = cell.to_string();
    !text.is_empty() && text.trim().parse::<f64>().is_err()
}

fn is_number_like(cell: &CellValue) -> bool {
    let text = cell.to_string();
    !text.is_empty() && text.trim().parse::<f64>().is_ok()
}
