use super::{Delimiter, Row, Table};
use crate::Position;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Rewrite `\r\n`, lone `\r` and `\n` to a single `\n`.
///
/// This runs over the whole text before scanning, so line breaks inside
/// quoted fields are normalized too.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
    /// Inside a quoted field, just past a quote that is either an escape or a close
    QuotedAfterQuote,
}

#[derive(Default)]
struct Sheet {
    table: Table,
    row: Row,
    cell: String,
}

impl Sheet {
    fn commit_cell(&mut self) {
        self.row.push(std::mem::take(&mut self.cell));
    }

    fn commit_row(&mut self) {
        self.table.push(std::mem::take(&mut self.row));
    }

    fn commit_line(&mut self) {
        self.commit_cell();
        self.commit_row();
    }
}

/// Parse delimited text into rows of owned cells.
///
/// Never fails. A quote followed by anything other than another quote, the
/// delimiter or a newline closes the quoted field, and the character is kept
/// as plain text in the same cell. An unterminated quote runs to the end of
/// the input. A final line with no content does not produce a row.
pub fn parse_table(text: &str, delimiter: Delimiter) -> Table {
    let text = normalize_line_endings(text);
    let delimiter_char = delimiter.as_char();
    let mut sheet = Sheet::default();
    let mut state = State::Unquoted;
    let mut position = Position { line: 0, column: 0 };

    for ch in text.chars() {
        state = match (state, ch) {
            (State::QuotedAfterQuote, '"') => {
                // Doubled quote: one literal quote
                sheet.cell.push('"');
                State::Quoted
            }
            (State::QuotedAfterQuote, '\n') | (State::Unquoted, '\n') => {
                sheet.commit_line();
                State::Unquoted
            }
            (State::QuotedAfterQuote, c) | (State::Unquoted, c) if c == delimiter_char => {
                sheet.commit_cell();
                State::Unquoted
            }
            (State::QuotedAfterQuote, c) => {
                trace!(?position, "quote closed mid-cell, keeping the rest as text");
                sheet.cell.push(c);
                State::Unquoted
            }
            (State::Quoted, '"') => State::QuotedAfterQuote,
            (State::Quoted, c) => {
                sheet.cell.push(c);
                State::Quoted
            }
            (State::Unquoted, '"') => State::Quoted,
            (State::Unquoted, c) => {
                sheet.cell.push(c);
                State::Unquoted
            }
        };

        if ch == '\n' {
            position.line += 1;
            position.column = 0;
        } else {
            position.column += 1;
        }
    }

    if state == State::Quoted {
        trace!(?position, "quoted field still open at end of input");
    }
    if !sheet.row.is_empty() || !sheet.cell.is_empty() {
        sheet.commit_line();
    }

    debug!(rows = sheet.table.len(), %delimiter, "parsed delimited text");
    sheet.table
}
