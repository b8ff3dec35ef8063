//! Matrix Market reader
//!
//! Supports the coordinate/real subset: any number of leading `%` comment
//! lines, a `rows cols nnz` dimensions line, then exactly `nnz` lines of
//! `row col value` with 1-based indices. Blank lines are ignored, as are `%`
//! lines after the last entry.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ParseErrorKind, Result, SparseError};
use crate::matrix::{from_triplets, SparseMatrixCSR};

/// Upper bound on memory reserved up front from a header's entry count
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 20;

/// What to do with entries that repeat a `(row, col)` coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Store every entry, leaving repeats adjacent in their row
    #[default]
    Keep,
    /// Sum repeats into a single entry
    Sum,
}

/// Options for [`MatrixMarketReader`]
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Handling of repeated coordinates
    pub duplicates: DuplicatePolicy,
}

/// Reads Matrix Market text into CSR matrices
#[derive(Debug, Clone, Default)]
pub struct MatrixMarketReader {
    options: ReaderOptions,
}

impl MatrixMarketReader {
    /// Create a reader with the given options
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Read the file at `path`
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<SparseMatrixCSR<f64>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SparseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("reading {}", path.display());
        self.read(BufReader::new(file))
    }

    /// Read from any buffered source
    pub fn read<R: BufRead>(&self, reader: R) -> Result<SparseMatrixCSR<f64>> {
        let mut lines = reader.lines();
        let mut line_no = 0;

        // Skip comments and read header
        let header = loop {
            line_no += 1;
            match lines.next() {
                None => return Err(SparseError::parse(line_no, ParseErrorKind::MissingHeader)),
                Some(line) => {
                    let line = line?;
                    if !line.starts_with('%') && !line.trim().is_empty() {
                        break line;
                    }
                }
            }
        };
        let header_line = line_no;
        let (n_rows, n_cols, nnz) =
            parse_header(&header).map_err(|kind| SparseError::parse(header_line, kind))?;

        let capacity = nnz.min(MAX_PREALLOCATED_ENTRIES);
        let mut rows = Vec::with_capacity(capacity);
        let mut cols = Vec::with_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);

        while values.len() < nnz {
            line_no += 1;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(SparseError::parse(
                        line_no,
                        ParseErrorKind::UnexpectedEof {
                            expected: nnz,
                            found: values.len(),
                        },
                    ))
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let (row, col, val) = parse_entry(&line, n_rows, n_cols)
                .map_err(|kind| SparseError::parse(line_no, kind))?;
            rows.push(row);
            cols.push(col);
            values.push(val);
        }

        for line in lines {
            line_no += 1;
            let line = line?;
            if !line.starts_with('%') && !line.trim().is_empty() {
                return Err(SparseError::parse(line_no, ParseErrorKind::TrailingData));
            }
        }

        // Entries are already bounds-checked, so a failure here is the header's row count
        let matrix =
            from_triplets(n_rows, n_cols, &rows, &cols, &values).map_err(|err| match err {
                SparseError::InvalidStructure(msg) => {
                    SparseError::parse(header_line, ParseErrorKind::InvalidHeader(msg))
                }
                other => other,
            })?;
        log::debug!("loaded {}x{} matrix with {} entries", n_rows, n_cols, nnz);

        if !matrix.has_duplicate_entries() {
            return Ok(matrix);
        }

        match self.options.duplicates {
            DuplicatePolicy::Keep => {
                log::warn!(
                    "matrix repeats some (row, col) coordinates; the repeats are stored as \
                     separate entries and rows are not strictly ascending"
                );
                Ok(matrix)
            }
            DuplicatePolicy::Sum => {
                let merged = matrix.sum_duplicates();
                log::debug!(
                    "summed {} repeated entries",
                    matrix.nnz() - merged.nnz()
                );
                Ok(merged)
            }
        }
    }
}

/// Reads a Matrix Market file into CSR, keeping repeated coordinates
pub fn read_matrix_market<P: AsRef<Path>>(path: P) -> Result<SparseMatrixCSR<f64>> {
    MatrixMarketReader::default().read_path(path)
}

/// Parses Matrix Market text from a buffered reader, keeping repeated coordinates
pub fn parse_matrix_market<R: BufRead>(reader: R) -> Result<SparseMatrixCSR<f64>> {
    MatrixMarketReader::default().read(reader)
}

fn parse_header(line: &str) -> std::result::Result<(usize, usize, usize), ParseErrorKind> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseErrorKind::InvalidHeader(format!(
            "expected `rows cols nnz`, found {} fields",
            parts.len()
        )));
    }

    let field = |name: &str, text: &str| {
        text.parse::<usize>()
            .map_err(|_| ParseErrorKind::InvalidHeader(format!("invalid {}: {:?}", name, text)))
    };
    let n_rows = field("number of rows", parts[0])?;
    let n_cols = field("number of columns", parts[1])?;
    let nnz = field("number of entries", parts[2])?;

    if n_rows == 0 || n_cols == 0 {
        return Err(ParseErrorKind::InvalidHeader(format!(
            "dimensions must be positive, found {}x{}",
            n_rows, n_cols
        )));
    }
    if n_rows.checked_add(1).is_none() || n_cols.checked_add(1).is_none() {
        return Err(ParseErrorKind::InvalidHeader(format!(
            "dimensions {}x{} are too large",
            n_rows, n_cols
        )));
    }

    Ok((n_rows, n_cols, nnz))
}

/// Parses one `row col value` line into 0-based indices
fn parse_entry(
    line: &str,
    n_rows: usize,
    n_cols: usize,
) -> std::result::Result<(usize, usize, f64), ParseErrorKind> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseErrorKind::InvalidEntry(format!(
            "expected `row col value`, found {} fields",
            parts.len()
        )));
    }

    let row: usize = parts[0]
        .parse()
        .map_err(|_| ParseErrorKind::InvalidEntry(format!("invalid row index {:?}", parts[0])))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| ParseErrorKind::InvalidEntry(format!("invalid column index {:?}", parts[1])))?;
    let val: f64 = parts[2]
        .parse()
        .map_err(|_| ParseErrorKind::InvalidEntry(format!("invalid value {:?}", parts[2])))?;

    if row == 0 || col == 0 || row > n_rows || col > n_cols {
        return Err(ParseErrorKind::IndexOutOfRange { row, col });
    }

    Ok((row - 1, col - 1, val))
}
