//! Error types for parsing the line-oriented test-case format

use thiserror::Error;

/// Errors that can occur while reading and decoding test cases
#[derive(Debug, Error)]
pub enum ParseError {
    /// Size line is not a non-negative integer
    #[error("invalid matrix size {value:?} on line {line}")]
    InvalidSize { line: usize, value: String },

    /// Input ended in the middle of a test case
    #[error("unexpected end of input after line {line}: expected {expected}")]
    TruncatedCase { line: usize, expected: &'static str },

    /// Row string contains a character outside the hexadecimal alphabet
    #[error("invalid hex digit in row {row:?}")]
    InvalidHexDigit {
        row: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Row string decodes to more bits than the matrix dimension allows
    #[error("row {row:?} does not fit in {size} bits")]
    RowTooWide { row: String, size: usize },

    /// Matrix line does not contain exactly one row string per row
    #[error("expected {expected} rows, found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    /// I/O error occurred while reading input or writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with ParseError
pub type Result<T> = std::result::Result<T, ParseError>;
