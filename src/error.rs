//! Error types for loading and combining CSR matrices.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or operating on sparse matrices.
#[derive(Debug, Error)]
pub enum SparseError {
    /// The input resource could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Io {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading from an already open stream failed.
    #[error("failed to read matrix data: {0}")]
    Read(#[from] io::Error),

    /// The Matrix Market text is malformed.
    #[error("line {line}: {kind}")]
    Parse {
        /// 1-based line number where the problem was detected
        line: usize,
        /// What went wrong
        kind: ParseErrorKind,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("shape mismatch in {op}: {}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    ShapeMismatch {
        /// Operation name
        op: &'static str,
        /// Shape of the left operand
        lhs: (usize, usize),
        /// Shape of the right operand
        rhs: (usize, usize),
    },

    /// Raw CSR arrays violate the format invariants.
    #[error("invalid CSR structure: {0}")]
    InvalidStructure(String),
}

/// The specific way a Matrix Market input is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No dimensions line before end of input.
    MissingHeader,
    /// The dimensions line is not three unsigned integers with positive dimensions.
    InvalidHeader(String),
    /// An entry line has a missing or unparsable field.
    InvalidEntry(String),
    /// An entry refers to a row or column outside the declared dimensions.
    IndexOutOfRange {
        /// 1-based row as written in the file
        row: usize,
        /// 1-based column as written in the file
        col: usize,
    },
    /// Input ended before the declared number of entries was read.
    UnexpectedEof {
        /// Entries declared in the header
        expected: usize,
        /// Entries actually read
        found: usize,
    },
    /// Data follows the last declared entry.
    TrailingData,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingHeader => write!(f, "missing dimensions line"),
            ParseErrorKind::InvalidHeader(msg) => write!(f, "invalid dimensions line: {msg}"),
            ParseErrorKind::InvalidEntry(msg) => write!(f, "invalid entry: {msg}"),
            ParseErrorKind::IndexOutOfRange { row, col } => {
                write!(f, "entry ({row}, {col}) is outside the declared dimensions")
            }
            ParseErrorKind::UnexpectedEof { expected, found } => write!(
                f,
                "unexpected end of input: expected {expected} entries, found {found}"
            ),
            ParseErrorKind::TrailingData => write!(f, "data after the last declared entry"),
        }
    }
}

/// A specialized `Result` type for sparse matrix operations.
pub type Result<T> = std::result::Result<T, SparseError>;

impl SparseError {
    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Self {
        SparseError::Parse { line, kind }
    }

    /// Returns `true` if the input text was malformed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SparseError::Parse { .. })
    }

    /// Returns `true` if operand shapes were incompatible.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, SparseError::ShapeMismatch { .. })
    }
}
