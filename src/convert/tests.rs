//! Tests for the conversion orchestrator.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;
use crate::common::Rgb;
use crate::layout::table::MIN_COLUMN_WIDTH;
use crate::sheet::{CellRef, CellValue};
use crate::style::{ColorRef, StyleDescriptor};

struct MemorySource {
    sheets: Vec<(String, SheetData)>,
}

impl MemorySource {
    fn new(sheets: Vec<(&str, SheetData)>) -> Self {
        Self {
            sheets: sheets
                .into_iter()
                .map(|(name, sheet)| (name.to_string(), sheet))
                .collect(),
        }
    }
}

impl WorkbookSource for MemorySource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn sheet(&self, name: &str) -> Result<SheetData> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sheet)| sheet.clone())
            .ok_or_else(|| Error::Parse(format!("no such sheet: {name}")))
    }
}

struct StubRenderer {
    fail_on: Option<&'static str>,
}

impl StubRenderer {
    fn new() -> Self {
        Self { fail_on: None }
    }
}

impl DocumentRenderer for StubRenderer {
    fn extension(&self) -> &str {
        "pdf"
    }

    fn render(&mut self, sheet_name: &str, table: &NormalizedTable) -> Result<Vec<u8>> {
        if self.fail_on == Some(sheet_name) {
            return Err(Error::Render(format!("cannot render {sheet_name}")));
        }
        Ok(format!("{sheet_name}:{}r", table.body.len()).into_bytes())
    }
}

#[derive(Default)]
struct MemoryArchive {
    entries: Vec<(String, Vec<u8>)>,
}

impl ArchiveSink for MemoryArchive {
    fn add_entry(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        self.entries.push((name.to_string(), data));
        Ok(())
    }
}

fn sheet_of(rows: Vec<Vec<CellValue>>) -> SheetData {
    SheetData {
        rows,
        styles: HashMap::new(),
    }
}

fn int_row(values: &[i64]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::Int(*v)).collect()
}

fn three_sheet_source() -> MemorySource {
    MemorySource::new(vec![
        ("One", sheet_of(vec![int_row(&[1])])),
        ("Two", sheet_of(vec![int_row(&[2])])),
        ("Three", sheet_of(vec![int_row(&[3])])),
    ])
}

#[test]
fn test_progress_is_reported_once_per_completed_sheet() {
    let source = three_sheet_source();
    let mut renderer = StubRenderer::new();
    let mut archive = MemoryArchive::default();
    let mut reported = Vec::new();

    Converter::new()
        .convert(
            &source,
            &["One", "Two", "Three"],
            &mut renderer,
            &mut archive,
            |pct| reported.push(pct),
        )
        .unwrap();

    assert_eq!(reported, vec![33, 67, 100]);
}

#[test]
fn test_members_follow_selection_order_with_sanitized_names() {
    let source = MemorySource::new(vec![
        ("P&L: 2024", sheet_of(vec![int_row(&[1])])),
        ("Notes", sheet_of(vec![int_row(&[2])])),
    ]);
    let mut renderer = StubRenderer::new();
    let mut archive = MemoryArchive::default();

    let summary = Converter::new()
        .convert(
            &source,
            &["Notes", "P&L: 2024"],
            &mut renderer,
            &mut archive,
            |_| {},
        )
        .unwrap();

    let names: Vec<&str> = archive.entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["Notes.pdf", "P&L_ 2024.pdf"]);
    assert_eq!(summary.entries[0].name, "Notes.pdf");
    assert_eq!(summary.entries[1].size, "P&L: 2024:1r".len() as u64);
}

#[test]
fn test_empty_selection_converts_nothing() {
    let source = three_sheet_source();
    let mut renderer = StubRenderer::new();
    let mut archive = MemoryArchive::default();
    let mut reported = Vec::new();

    let summary = Converter::new()
        .convert(&source, &[], &mut renderer, &mut archive, |pct| {
            reported.push(pct)
        })
        .unwrap();

    assert!(summary.entries.is_empty());
    assert!(reported.is_empty());
    assert!(archive.entries.is_empty());
}

#[test]
fn test_parse_failure_is_fatal() {
    let source = three_sheet_source();
    let mut renderer = StubRenderer::new();
    let mut archive = MemoryArchive::default();

    let result = Converter::new().convert(
        &source,
        &["One", "Missing"],
        &mut renderer,
        &mut archive,
        |_| {},
    );

    assert!(matches!(result, Err(Error::Parse(_))));
    // The sheet completed before the failure was already registered.
    assert_eq!(archive.entries.len(), 1);
}

#[test]
fn test_renderer_failure_propagates_unchanged() {
    let source = three_sheet_source();
    let mut renderer = StubRenderer {
        fail_on: Some("Two"),
    };
    let mut archive = MemoryArchive::default();
    let mut reported = Vec::new();

    let result = Converter::new().convert(
        &source,
        &["One", "Two", "Three"],
        &mut renderer,
        &mut archive,
        |pct| reported.push(pct),
    );

    assert!(matches!(result, Err(Error::Render(_))));
    assert_eq!(archive.entries.len(), 1);
    assert_eq!(reported, vec![33]);
}

#[test]
fn test_cancellation_is_honored_between_sheets() {
    let source = three_sheet_source();
    let mut renderer = StubRenderer::new();
    let mut archive = MemoryArchive::default();

    let flag = Arc::new(AtomicBool::new(false));
    let trip = Arc::clone(&flag);
    let converter =
        Converter::with_options(ConvertOptions::new().with_cancel_flag(Arc::clone(&flag)));

    let result = converter.convert(
        &source,
        &["One", "Two", "Three"],
        &mut renderer,
        &mut archive,
        move |_| trip.store(true, Ordering::Relaxed),
    );

    // The first sheet ran to completion; the request stopped the second.
    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(archive.entries.len(), 1);
}

#[test]
fn test_unstyled_sheet_end_to_end() {
    let sheet = sheet_of(vec![int_row(&[1, 2]), int_row(&[3, 4]), int_row(&[5, 6])]);
    let table = normalize(&sheet);

    assert!(table.head.is_empty());
    assert_eq!(table.body, [["1", "2"], ["3", "4"], ["5", "6"]]);
    assert_eq!(table.column_widths.len(), 2);
    assert!(table.column_widths.values().all(|w| *w >= MIN_COLUMN_WIDTH));
    assert!(table.styles.is_empty());
}

#[test]
fn test_banded_sheet_end_to_end() {
    let mut sheet = sheet_of(vec![
        int_row(&[1, 10]),
        int_row(&[2, 20]),
        int_row(&[3, 30]),
        int_row(&[4, 40]),
    ]);
    for row in 0..4 {
        let hex = if row % 2 == 0 { "EEEEEE" } else { "DDDDDD" };
        sheet.styles.insert(
            CellRef::new(row, 0),
            StyleDescriptor {
                fill_background: Some(ColorRef::Rgb(hex.into())),
                ..StyleDescriptor::default()
            },
        );
    }
    // Bold cell with no fill of its own in an odd row.
    sheet.styles.insert(
        CellRef::new(3, 1),
        StyleDescriptor {
            bold: true,
            ..StyleDescriptor::default()
        },
    );

    let table = normalize(&sheet);
    let style = table.style(3, 1).unwrap();
    assert!(style.bold);
    assert_eq!(style.bg_color, Rgb::from_hex("DDDDDD"));
}

#[test]
fn test_validate_input_accepts_spreadsheets() {
    let converter = Converter::new();
    assert!(converter.validate_input("report.xlsx", 1024).is_ok());
    assert!(converter.validate_input("REPORT.XLS", 1024).is_ok());
}

#[test]
fn test_validate_input_rejects_unknown_extensions() {
    let converter = Converter::new();
    assert!(matches!(
        converter.validate_input("report.csv", 1024),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        converter.validate_input("report", 1024),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_validate_input_enforces_size_limit() {
    let converter = Converter::with_options(ConvertOptions::new().with_max_input_size(1024));
    assert!(converter.validate_input("report.xlsx", 1024).is_ok());
    assert!(matches!(
        converter.validate_input("report.xlsx", 1025),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_analyze_reports_sheet_metadata() {
    let ragged = sheet_of(vec![int_row(&[1]), int_row(&[2, 3, 4])]);
    let source = MemorySource::new(vec![("Data", ragged), ("Blank", SheetData::new())]);

    let infos = Converter::new().analyze(&source).unwrap();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].name, "Data");
    assert_eq!(infos[0].index, 0);
    assert_eq!(infos[0].row_count, 2);
    assert_eq!(infos[0].column_count, 3);
    assert!(infos[0].has_data);
    assert!(!infos[1].has_data);
}

#[test]
fn test_archive_file_name_uses_configured_extension() {
    let converter = Converter::new();
    assert_eq!(
        converter.archive_file_name("quarterly.xlsx"),
        "quarterly_converted.zip"
    );

    let custom = Converter::with_options(ConvertOptions::new().with_archive_extension("tar"));
    assert_eq!(custom.archive_file_name("data.xls"), "data_converted.tar");
}
