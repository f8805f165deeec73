pub mod csv;
pub mod errors;

pub use csv::{
    header_mapped, parse_header_mapped, parse_table, write_table, Delimiter, HeaderMappedRow, Row,
    Table,
};
pub use errors::{CsvError, Result};

/// A location in line-ending-normalized text, both counted from zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}
