//! Quire - style-preserving conversion of spreadsheet worksheets into
//! paginated documents.
//!
//! This library implements the style-resolution and table-layout core of a
//! workbook-to-archive converter: it reads a sheet's raw cell values and
//! style records, normalizes heterogeneous color encodings to RGB, infers
//! structural properties the workbook does not encode explicitly (header
//! rows, banded-row shading), and produces one normalized table description
//! per sheet, ready to be rendered into a paginated document and bundled
//! into a single downloadable archive.
//!
//! The workbook parser, the paginated-document renderer, and the archive
//! writer are external collaborators, modeled by the traits in
//! [`convert`]: [`convert::WorkbookSource`], [`convert::DocumentRenderer`],
//! and [`convert::ArchiveSink`].
//!
//! # Features
//!
//! - **Color resolution**: RGB/ARGB hex, legacy indexed palette, and
//!   theme-plus-tint color references, normalized to one RGB triple
//! - **Banded-row detection**: sheet-wide alternating shading recovered
//!   from per-cell fills, with a strict no-partial-bands rule
//! - **Style cascade**: per-cell fill, banded color, and table background
//!   merged into one resolved style per styled cell
//! - **Header inference**: a cheap text-over-numbers heuristic for
//!   splitting a header row off the body
//! - **Width hints**: per-column width proxies from content length, floored
//!   and capped, for the renderer's column sizing
//! - **Sequential orchestration**: caller-ordered sheet conversion with
//!   per-sheet progress reporting and between-sheet cancellation
//!
//! # Example - Normalizing a sheet
//!
//! ```rust
//! use quire::{CellValue, SheetData, normalize};
//!
//! let mut sheet = SheetData::new();
//! sheet.rows = vec![
//!     vec![CellValue::String("Name".into()), CellValue::String("Age".into())],
//!     vec![CellValue::String("Alice".into()), CellValue::Int(30)],
//!     vec![CellValue::String("Bob".into()), CellValue::Int(28)],
//! ];
//!
//! let table = normalize(&sheet);
//! assert_eq!(table.head, ["Name", "Age"]);
//! assert_eq!(table.body, [["Alice", "30"], ["Bob", "28"]]);
//! assert_eq!(table.column_widths.len(), 2);
//! ```
//!
//! # Example - Resolving a color reference
//!
//! ```rust
//! use quire::style::color::{ColorRef, resolve};
//! use quire::Rgb;
//!
//! // Theme accent 1, lightened by 40%
//! let reference = ColorRef::Theme { index: 4, tint: Some(0.4) };
//! let color = resolve(&reference).unwrap();
//! assert_eq!(color, Rgb::new(149, 179, 215));
//!
//! // Malformed references yield no color, never an error
//! assert_eq!(resolve(&ColorRef::Indexed(9999)), None);
//! ```
//!
//! # Architecture
//!
//! The crate is organized as a pipeline of pure stages:
//!
//! - [`common`]: the unified error type and the resolved color primitive
//! - [`sheet`]: the input model handed over by the upstream parser
//! - [`style`]: color resolution, sheet-wide shading analysis, and
//!   per-cell style extraction
//! - [`layout`]: header detection and normalized-table assembly
//! - [`convert`]: the orchestrator, its collaborator traits, and naming
//!
//! Every stage in [`style`] and [`layout`] is a deterministic, total
//! function over its input; only the collaborators behind the [`convert`]
//! traits can fail.

/// Common types shared across the conversion core
pub mod common;

/// Conversion orchestration and collaborator traits
pub mod convert;

/// Table layout: header detection and normalized-table assembly
pub mod layout;

/// Input model for parsed worksheets
pub mod sheet;

/// Style resolution engine
pub mod style;

// Re-export commonly used types for convenience
pub use common::{Error, Result, Rgb};
pub use convert::{
    ArchiveEntry, ArchiveSink, ConversionSummary, ConvertOptions, Converter, DocumentRenderer,
    WorkbookSource, normalize,
};
pub use layout::NormalizedTable;
pub use sheet::{CellRef, CellValue, SheetData, SheetInfo};
pub use style::{
    ColorRef, HorizontalAlign, ResolvedCellStyle, StyleDescriptor, TableStyleProfile,
};
