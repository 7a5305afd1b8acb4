//! Sheet-wide shading analysis.
//!
//! Spreadsheet authors often express table shading as a real pattern
//! (alternating row colors, or one background shared by most of the table)
//! rather than as per-cell noise. This pass runs once per sheet, before
//! per-cell extraction, so that cells without an explicit background still
//! render consistently with their styled neighbors.

use std::collections::{BTreeMap, HashMap};

use crate::common::Rgb;
use crate::sheet::CellRef;

use super::{StyleDescriptor, fill_color};

/// Minimum number of colored rows before banding detection is attempted.
const MIN_BANDED_ROWS: usize = 4;

/// Sheet-wide derived shading facts, computed once per sheet and read-only
/// thereafter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyleProfile {
    /// Whether the sheet uses a strict alternating row-shading pattern
    pub banded_rows: bool,
    /// Shading of even-indexed rows, when `banded_rows` is set
    pub even_row_color: Option<Rgb>,
    /// Shading of odd-indexed rows, when `banded_rows` is set
    pub odd_row_color: Option<Rgb>,
    /// Sheet-level default fill, consulted only after per-cell and banded
    /// colors both fail to apply
    pub table_background: Option<Rgb>,
}

impl TableStyleProfile {
    /// Banded shading for the given row index, when the sheet is banded.
    pub fn banded_color(&self, row: usize) -> Option<Rgb> {
        if !self.banded_rows {
            return None;
        }
        if row % 2 == 0 {
            self.even_row_color
        } else {
            self.odd_row_color
        }
    }
}

/// Analyze the sparse style map of one sheet.
///
/// Each row's representative color is the most frequent resolved fill color
/// among its cells (ties broken by first encounter, visiting cells in column
/// order). Banding requires at least [`MIN_BANDED_ROWS`] rows with a
/// representative color and a strict alternating pattern across every pair
/// of adjacent colored rows; a single break invalidates banding for the
/// whole sheet. Non-adjacent colored rows are skipped, not treated as
/// breaks.
pub fn analyze(styles: &HashMap<CellRef, StyleDescriptor>) -> TableStyleProfile {
    // Map iteration order is not row order; group by row index first.
    let mut by_row: BTreeMap<usize, Vec<(usize, &StyleDescriptor)>> = BTreeMap::new();
    for (cell, style) in styles {
        by_row.entry(cell.row).or_default().push((cell.col, style));
    }

    let mut census: Vec<(Rgb, usize)> = Vec::new();
    let mut fill_cells = 0usize;
    let mut row_colors: Vec<(usize, Rgb)> = Vec::new();

    for (row, mut cells) in by_row {
        cells.sort_by_key(|(col, _)| *col);

        let mut votes: Vec<(Rgb, usize)> = Vec::new();
        for (_, style) in cells {
            let Some(color) = fill_color(style) else {
                continue;
            };
            bump(&mut votes, color);
            bump(&mut census, color);
            fill_cells += 1;
        }

        if let Some(representative) = winner(&votes) {
            row_colors.push((row, representative));
        }
    }

    let bands = detect_banding(&row_colors);
    TableStyleProfile {
        banded_rows: bands.is_some(),
        even_row_color: bands.map(|(even, _)| even),
        odd_row_color: bands.map(|(_, odd)| odd),
        table_background: strict_majority(&census, fill_cells),
    }
}

/// Walk adjacent colored-row pairs and verify the alternating pattern.
///
/// The first adjacent pair seeds the even- and odd-row colors by row parity;
/// every later adjacent pair must reproduce them. Returns the `(even, odd)`
/// colors when the pattern holds.
fn detect_banding(row_colors: &[(usize, Rgb)]) -> Option<(Rgb, Rgb)> {
    if row_colors.len() < MIN_BANDED_ROWS {
        return None;
    }

    let mut even: Option<Rgb> = None;
    let mut odd: Option<Rgb> = None;
    let mut seeded = false;

    for pair in row_colors.windows(2) {
        let (row_a, color_a) = pair[0];
        let (row_b, color_b) = pair[1];
        if row_b != row_a + 1 {
            continue;
        }

        for (row, color) in [(row_a, color_a), (row_b, color_b)] {
            let slot = if row % 2 == 0 { &mut even } else { &mut odd };
            match slot {
                None => *slot = Some(color),
                Some(expected) if *expected == color => {},
                Some(_) => return None,
            }
        }
        seeded = true;
    }

    if !seeded {
        return None;
    }
    // Any adjacent pair covers both parities, so both slots are set here.
    Some((even?, odd?))
}

/// Count an occurrence, preserving first-encounter order.
fn bump(counts: &mut Vec<(Rgb, usize)>, color: Rgb) {
    if let Some(entry) = counts.iter_mut().find(|(c, _)| *c == color) {
        entry.1 += 1;
    } else {
        counts.push((color, 1));
    }
}

/// Highest count wins; ties keep the first-encountered color.
fn winner(votes: &[(Rgb, usize)]) -> Option<Rgb> {
    let mut best: Option<(Rgb, usize)> = None;
    for &(color, count) in votes {
        if best.is_none_or(|(_, n)| count > n) {
            best = Some((color, count));
        }
    }
    best.map(|(color, _)| color)
}

/// The color carried by a strict majority of fill-bearing cells, if any.
fn strict_majority(census: &[(Rgb, usize)], total: usize) -> Option<Rgb> {
    census
        .iter()
        .find(|(_, count)| count * 2 > total)
        .map(|(color, _)| *color)
}
