//! Serialize a table back into text that parses to the same table

use super::{Delimiter, Row};
use enumset::{EnumSet, EnumSetType};
use itertools::Itertools;
use std::borrow::Cow;

/// Characters that force a cell to be quoted
#[derive(EnumSetType, Debug)]
pub enum Special {
    Delimiter,
    Quote,
    LineBreak,
}

/// Which special characters occur in the cell
pub fn special_chars(cell: &str, delimiter: Delimiter) -> EnumSet<Special> {
    let delimiter_char = delimiter.as_char();
    cell.chars()
        .filter_map(|ch| match ch {
            '"' => Some(Special::Quote),
            '\n' | '\r' => Some(Special::LineBreak),
            _ if ch == delimiter_char => Some(Special::Delimiter),
            _ => None,
        })
        .collect()
}

/// Quote the cell only if it needs it, doubling any quotes inside.
pub fn write_cell(cell: &str, delimiter: Delimiter) -> Cow<'_, str> {
    let specials = special_chars(cell, delimiter);
    if specials.is_empty() {
        return Cow::Borrowed(cell);
    }
    if specials.contains(Special::Quote) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Owned(format!("\"{}\"", cell))
    }
}

/// Write every row terminated by `\n`.
///
/// `\r` inside a cell is written as-is and comes back as `\n` when parsed,
/// since line endings are normalized before scanning.
pub fn write_table(table: &[Row], delimiter: Delimiter) -> String {
    let separator = delimiter.as_char().to_string();
    let mut text = String::new();
    for row in table {
        text.push_str(
            &row.iter()
                .map(|cell| write_cell(cell, delimiter))
                .join(&separator),
        );
        text.push('\n');
    }
    text
}
