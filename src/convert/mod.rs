//! Workbook-to-archive conversion pipeline.
//!
//! The orchestrator walks the selected sheets in caller order and, for each
//! one, runs the style engine and the layout engine, hands the resulting
//! [`NormalizedTable`] to the document renderer, and registers the rendered
//! document with the archive sink under a sanitized file name. Progress is
//! reported as an integer percentage once per completed sheet.
//!
//! The pipeline is strictly sequential: sheet *i + 1* does not begin until
//! sheet *i*'s document has been rendered and registered, because both the
//! progress percentage and the archive member order are defined in terms of
//! that sequence. A cancellation request is honored only at the
//! between-sheets checkpoint.
//!
//! # Quick Start
//!
//! ```rust
//! use quire::convert::{ArchiveSink, Converter, DocumentRenderer, WorkbookSource};
//! use quire::{CellValue, NormalizedTable, Result, SheetData};
//!
//! struct SingleSheet(SheetData);
//!
//! impl WorkbookSource for SingleSheet {
//!     fn sheet_names(&self) -> Vec<String> {
//!         vec!["Summary".into()]
//!     }
//!     fn sheet(&self, _name: &str) -> Result<SheetData> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! struct TextRenderer;
//!
//! impl DocumentRenderer for TextRenderer {
//!     fn extension(&self) -> &str {
//!         "pdf"
//!     }
//!     fn render(&mut self, _sheet_name: &str, table: &NormalizedTable) -> Result<Vec<u8>> {
//!         Ok(table.body.concat().join("|").into_bytes())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct MemoryArchive(Vec<(String, Vec<u8>)>);
//!
//! impl ArchiveSink for MemoryArchive {
//!     fn add_entry(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
//!         self.0.push((name.to_string(), data));
//!         Ok(())
//!     }
//! }
//!
//! let mut sheet = SheetData::new();
//! sheet.rows = vec![vec![CellValue::Int(1), CellValue::Int(2)]];
//!
//! let mut renderer = TextRenderer;
//! let mut archive = MemoryArchive::default();
//! let converter = Converter::new();
//! let summary = converter.convert(
//!     &SingleSheet(sheet),
//!     &["Summary"],
//!     &mut renderer,
//!     &mut archive,
//!     |_pct| {},
//! )?;
//!
//! assert_eq!(summary.entries[0].name, "Summary.pdf");
//! assert_eq!(archive.0.len(), 1);
//! # Ok::<(), quire::Error>(())
//! ```

// Submodule declarations
pub mod naming;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::{Error, Result};
use crate::layout::{self, NormalizedTable};
use crate::sheet::{SheetData, SheetInfo};
use crate::style;

/// Default upper bound on the declared workbook size, in bytes.
const DEFAULT_MAX_INPUT_SIZE: u64 = 50 * 1024 * 1024;

/// File extensions accepted by input validation.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Supplies parsed worksheets to the conversion pipeline.
///
/// Implemented by the upstream workbook parser. A parse failure surfaces
/// once as [`Error::Parse`] and is fatal to the conversion attempt; the
/// pipeline does not retry.
pub trait WorkbookSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Load one sheet by name.
    fn sheet(&self, name: &str) -> Result<SheetData>;
}

/// Renders one normalized table into a binary paginated document.
///
/// Page breaks, font metrics, and text placement are the renderer's
/// responsibility; the pipeline only hands over the table description.
pub trait DocumentRenderer {
    /// File extension (without the dot) for rendered documents.
    fn extension(&self) -> &str;

    /// Render one sheet. Failures are propagated unchanged to the caller.
    fn render(&mut self, sheet_name: &str, table: &NormalizedTable) -> Result<Vec<u8>>;
}

/// Collects named binary documents into a single downloadable artifact.
///
/// The order of `add_entry` calls defines the archive member order.
pub trait ArchiveSink {
    /// Append one named member.
    fn add_entry(&mut self, name: &str, data: Vec<u8>) -> Result<()>;
}

/// Conversion options.
///
/// # Examples
///
/// ```rust
/// use quire::convert::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .with_archive_extension("zip")
///     .with_max_input_size(10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    archive_extension: String,
    max_input_size: u64,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            archive_extension: "zip".to_string(),
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            cancel: None,
        }
    }
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension used for the final archive name.
    pub fn with_archive_extension(mut self, extension: impl Into<String>) -> Self {
        self.archive_extension = extension.into();
        self
    }

    /// Set the upper bound on the declared workbook size, in bytes.
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.max_input_size = bytes;
        self
    }

    /// Install a shared cancellation flag.
    ///
    /// The flag is checked only between sheets; a sheet already being
    /// rendered always runs to completion.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }
}

/// One archive member produced by a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    /// Member file name
    pub name: String,
    /// Rendered document size in bytes
    pub size: u64,
}

/// Outcome of a completed conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Archive members in registration order
    pub entries: Vec<ArchiveEntry>,
}

/// Drives the sheet-by-sheet conversion of one workbook.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Validate a workbook's declared name and size before conversion.
    ///
    /// Rejects unrecognized file extensions and oversized inputs with
    /// [`Error::InvalidInput`]; performs no IO.
    pub fn validate_input(&self, file_name: &str, size: u64) -> Result<()> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        if !matches!(extension.as_deref(), Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext)) {
            return Err(Error::InvalidInput(format!(
                "unsupported file type: {file_name}; expected .xlsx or .xls"
            )));
        }

        if size > self.options.max_input_size {
            return Err(Error::InvalidInput(format!(
                "file size {size} exceeds the {} byte limit",
                self.options.max_input_size
            )));
        }

        Ok(())
    }

    /// Enumerate the workbook's sheets for selection surfaces.
    pub fn analyze<S>(&self, source: &S) -> Result<Vec<SheetInfo>>
    where
        S: WorkbookSource + ?Sized,
    {
        let names = source.sheet_names();
        let mut infos = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            let sheet = source.sheet(&name)?;
            infos.push(SheetInfo {
                row_count: sheet.row_count(),
                column_count: sheet.column_count(),
                has_data: !sheet.is_empty(),
                name,
                index,
            });
        }
        Ok(infos)
    }

    /// Convert the selected sheets, in the given order, into one archive.
    ///
    /// For each sheet: normalize (style analysis, per-cell resolution,
    /// header detection, layout), render, register with the archive sink,
    /// then report progress as `round(done / total * 100)`. Renderer and
    /// archiver failures are propagated unchanged; there is no partial
    /// recovery.
    pub fn convert<S, R, A, F>(
        &self,
        source: &S,
        selected: &[&str],
        renderer: &mut R,
        archive: &mut A,
        mut progress: F,
    ) -> Result<ConversionSummary>
    where
        S: WorkbookSource + ?Sized,
        R: DocumentRenderer + ?Sized,
        A: ArchiveSink + ?Sized,
        F: FnMut(u8),
    {
        let total = selected.len();
        let mut entries = Vec::with_capacity(total);

        for (done, name) in selected.iter().enumerate() {
            self.check_cancelled()?;

            let sheet = source.sheet(name)?;
            let table = normalize(&sheet);
            if table.is_empty() {
                warn!(sheet = %name, "sheet has no data; rendering an empty document");
            }

            let document = renderer.render(name, &table)?;
            let file_name = naming::document_file_name(name, renderer.extension());
            debug!(
                sheet = %name,
                file = %file_name,
                bytes = document.len(),
                "sheet rendered"
            );

            let size = document.len() as u64;
            archive.add_entry(&file_name, document)?;
            entries.push(ArchiveEntry {
                name: file_name,
                size,
            });

            progress(percentage(done + 1, total));
        }

        Ok(ConversionSummary { entries })
    }

    /// Name of the final archive for the given original workbook file name.
    pub fn archive_file_name(&self, original_name: &str) -> String {
        naming::archive_file_name(original_name, &self.options.archive_extension)
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.options.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Run the full per-sheet pipeline: style profile, per-cell resolution,
/// header detection, and table layout.
///
/// This is the pure core of the conversion; it never fails. Degenerate
/// sheets produce an empty [`NormalizedTable`].
pub fn normalize(sheet: &SheetData) -> NormalizedTable {
    let profile = style::analyze(&sheet.styles);
    let styles = style::resolve_cell_styles(&sheet.styles, &profile);
    let has_header = layout::detect_header(&sheet.rows);
    layout::build_table(&sheet.rows, has_header, styles)
}

fn percentage(done: usize, total: usize) -> u8 {
    (done as f64 / total as f64 * 100.0).round() as u8
}
