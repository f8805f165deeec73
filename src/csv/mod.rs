//! Parse comma- or tab-separated text with RFC4180-style quoting
//!
//! The parser is lenient: malformed quoting never fails, it degrades into
//! literal text in the same cell. The only hard error is asking for a
//! header-keyed view of text that contains no rows at all.
//!
//! Every call is a pure function of its input. Nothing is cached between
//! calls, so parsing from many threads at once needs no coordination.
mod header;
mod parse;
mod write;

use std::fmt;

pub use header::{header_mapped, parse_header_mapped, HeaderMappedRow};
pub use parse::{normalize_line_endings, parse_table};
pub use write::{special_chars, write_cell, write_table, Special};

/// One row of cells, in source column order
pub type Row = Vec<String>;

/// Every row of one parse, in source order
pub type Table = Vec<Row>;

/// The field separator. Only these two are supported; it is never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => f.write_str("comma"),
            Delimiter::Tab => f.write_str("tab"),
        }
    }
}
