//! Per-cell formatting extraction.
//!
//! Merges alignment, font flags, and colors into one [`ResolvedCellStyle`]
//! per styled cell. The background color follows a strict fallback cascade:
//! the cell's own fill first, then the banded color for the cell's row
//! parity, then the sheet's table background, then nothing. Cells without a
//! style record produce no entry; absence means "use renderer defaults".

use std::collections::HashMap;

use crate::sheet::CellRef;

use super::{ResolvedCellStyle, StyleDescriptor, TableStyleProfile, color, fill_color};

/// Resolve every styled cell of one sheet against its style profile.
pub fn resolve_cell_styles(
    styles: &HashMap<CellRef, StyleDescriptor>,
    profile: &TableStyleProfile,
) -> HashMap<CellRef, ResolvedCellStyle> {
    styles
        .iter()
        .map(|(cell, style)| (*cell, resolve_cell(*cell, style, profile)))
        .collect()
}

fn resolve_cell(
    cell: CellRef,
    style: &StyleDescriptor,
    profile: &TableStyleProfile,
) -> ResolvedCellStyle {
    let bg_color = fill_color(style)
        .or_else(|| profile.banded_color(cell.row))
        .or(profile.table_background);

    ResolvedCellStyle {
        horizontal: style.horizontal.unwrap_or_default(),
        bold: style.bold,
        italic: style.italic,
        text_color: style.font_color.as_ref().and_then(color::resolve),
        bg_color,
    }
}
