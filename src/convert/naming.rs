//! Deterministic naming for archive members and the archive itself.

/// Characters replaced in archive member names.
const FORBIDDEN: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replace filename-unsafe characters in a sheet name with `_`.
///
/// # Examples
///
/// ```rust
/// use quire::convert::naming::sanitize_sheet_name;
///
/// assert_eq!(sanitize_sheet_name("Q1/Q2 Results?"), "Q1_Q2 Results_");
/// assert_eq!(sanitize_sheet_name("Plain"), "Plain");
/// ```
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect()
}

/// Archive member name for one sheet's rendered document.
pub fn document_file_name(sheet_name: &str, extension: &str) -> String {
    format!("{}.{}", sanitize_sheet_name(sheet_name), extension)
}

/// Name of the final archive, derived from the original workbook file name
/// with its extension stripped.
pub fn archive_file_name(original_name: &str, extension: &str) -> String {
    let base = original_name
        .rsplit_once('.')
        .map_or(original_name, |(base, _)| base);
    format!("{base}_converted.{extension}")
}
