use super::{parse_table, Delimiter, Table};
use crate::errors::{CsvError, Result};
use std::collections::HashMap;

/// One data row keyed by the header row's field names
pub type HeaderMappedRow = HashMap<String, String>;

/// Key every row after the first by the first row's cells.
///
/// Pairs are zipped, so the shorter of header and row wins: missing trailing
/// cells have no entry and extra cells are dropped. When a field name repeats,
/// the rightmost cell wins. A header-only table yields no rows.
pub fn header_mapped(table: Table) -> Result<impl Iterator<Item = HeaderMappedRow>> {
    let mut rows = table.into_iter();
    let header = rows.next().ok_or(CsvError::EmptyInput)?;
    Ok(rows.map(move |row| header.iter().cloned().zip(row).collect()))
}

/// Parse the text, then key each data row by the header row.
pub fn parse_header_mapped(
    text: &str,
    delimiter: Delimiter,
) -> Result<impl Iterator<Item = HeaderMappedRow>> {
    header_mapped(parse_table(text, delimiter))
}
