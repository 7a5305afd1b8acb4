//! Style resolution engine.
//!
//! Turns the heterogeneous per-cell style records surfaced by the upstream
//! parser into one [`ResolvedCellStyle`] per styled cell, ready for the
//! document renderer. Resolution runs in three stages per sheet:
//!
//! 1. [`color::resolve`] normalizes any color-reference encoding to an RGB
//!    triple (or no color).
//! 2. [`profile::analyze`] derives sheet-wide shading facts: whether the
//!    sheet uses banded rows and what its default background, if any, is.
//! 3. [`extract::resolve_cell_styles`] merges alignment, font flags, and the
//!    background-color fallback cascade into the final per-cell records.
//!
//! Every stage is a pure, total function: malformed input degrades to "no
//! color" or "no styling", never to an error.

// Submodule declarations
pub mod color;
pub mod extract;
pub mod profile;

// Re-exports
pub use color::{ColorRef, resolve};
pub use extract::resolve_cell_styles;
pub use profile::{TableStyleProfile, analyze};

use crate::common::Rgb;

/// Horizontal text alignment within a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Left-aligned (the default when a style carries no alignment)
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

/// Raw per-cell style record as surfaced by the upstream parser.
///
/// Every field is optional; a cell with no record at all carries no explicit
/// styling. Solid fills surface their color through the background reference,
/// pattern fills through the foreground reference, so both are kept and
/// consulted in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDescriptor {
    /// Horizontal alignment, if explicitly set
    pub horizontal: Option<HorizontalAlign>,
    /// Bold font flag
    pub bold: bool,
    /// Italic font flag
    pub italic: bool,
    /// Font color reference
    pub font_color: Option<ColorRef>,
    /// Fill background-color reference
    pub fill_background: Option<ColorRef>,
    /// Fill foreground-color reference
    pub fill_foreground: Option<ColorRef>,
}

impl StyleDescriptor {
    /// Create an empty style record.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fully resolved style for one cell.
///
/// Built once per conversion and never mutated afterwards. Absent colors mean
/// "use renderer defaults".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedCellStyle {
    /// Horizontal alignment
    pub horizontal: HorizontalAlign,
    /// Bold font flag
    pub bold: bool,
    /// Italic font flag
    pub italic: bool,
    /// Resolved font color
    pub text_color: Option<Rgb>,
    /// Resolved background color after the fallback cascade
    pub bg_color: Option<Rgb>,
}

/// Resolved fill color of one style record: the background-color reference
/// takes precedence, the foreground-color reference is the fallback.
pub(crate) fn fill_color(style: &StyleDescriptor) -> Option<Rgb> {
    style
        .fill_background
        .as_ref()
        .and_then(color::resolve)
        .or_else(|| style.fill_foreground.as_ref().and_then(color::resolve))
}
