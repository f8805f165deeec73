use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CsvError {
    /// The text parsed to zero rows, so there is no header row to key on.
    #[error("Empty input: no header row to map fields from")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, CsvError>;
