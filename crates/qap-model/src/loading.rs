// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem instance loader for the Quadratic Assignment domain.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `QapInstance`. The expected format is the problem size followed by the
//! distance matrix and the flow matrix, both row-major:
//!
//! ```raw
//! n
//!
//! d_1_1 ... d_1_n     (distance between locations, n rows)
//! ...
//!
//! f_1_1 ... f_1_n     (flow between facilities, n rows)
//! ...
//! ```
//!
//! Tokenization is purely whitespace-driven, so blank separator lines between
//! the size and the matrices are accepted and ignored. Lines may contain
//! comments introduced by `#`. The parser accepts any `BufRead`, file path,
//! raw reader, or string slice, making it convenient to integrate with
//! benchmarks, tests, and tooling.
//!
//! Matrix entries must be non-negative; the solver core relies on this and
//! performs no re-validation of its own beyond shape assertions.

use crate::{instance::QapInstance, matrix::SquareMatrix};
use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing matrix entries).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The problem size could not be parsed into a usable dimension.
    InvalidDimensions,
    /// A matrix entry was negative.
    NegativeEntry(NegativeEntryError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about a negative matrix entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeEntryError {
    /// Which matrix the entry belongs to ("distance" or "flow").
    pub matrix: &'static str,
    /// The row of the offending entry.
    pub row: usize,
    /// The column of the offending entry.
    pub col: usize,
}

impl std::fmt::Display for NegativeEntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The {} matrix has a negative entry at ({}, {})",
            self.matrix, self.row, self.col
        )
    }
}

impl std::error::Error for NegativeEntryError {}

impl Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidDimensions => {
                write!(f, "Problem size must be a non-negative integer")
            }
            Self::NegativeEntry(e) => write!(f, "Invalid entry: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<NegativeEntryError> for InstanceLoadError {
    fn from(e: NegativeEntryError) -> Self {
        Self::NegativeEntry(e)
    }
}

/// A loader for QAP problem instances.
///
/// `n = 0` is accepted and yields an empty instance; the solver treats it as
/// a trivially solved problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceLoader;

impl InstanceLoader {
    /// Creates a new `InstanceLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<QapInstance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        R: BufRead,
    {
        let mut sc = Scanner::new(rdr);

        let n_val: i64 = sc.next()?;
        let n = usize::try_from(n_val).map_err(|_| InstanceLoadError::InvalidDimensions)?;

        let distance = self.read_matrix(&mut sc, n, "distance")?;
        let flow = self.read_matrix(&mut sc, n, "flow")?;

        Ok(QapInstance::new(distance, flow))
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<QapInstance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<QapInstance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<QapInstance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
    {
        self.from_reader(s.as_bytes())
    }

    /// Reads one n x n matrix in row-major order, rejecting negative entries.
    fn read_matrix<T, R>(
        &self,
        sc: &mut Scanner<R>,
        n: usize,
        name: &'static str,
    ) -> Result<SquareMatrix<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        R: BufRead,
    {
        let mut data = Vec::with_capacity(n * n);

        for row in 0..n {
            for col in 0..n {
                let value: T = sc.next()?;
                if value < T::zero() {
                    return Err(NegativeEntryError {
                        matrix: name,
                        row,
                        col,
                    }
                    .into());
                }
                data.push(value);
            }
        }

        Ok(SquareMatrix::from_flat(n, data))
    }
}

/// Pulls whitespace-separated tokens out of a buffered reader, one line at
/// a time.
///
/// Comments run from `#` to the end of the line and are cut away when a line
/// is buffered, so the token scan itself only ever sees token and whitespace
/// bytes.
struct Scanner<R> {
    rdr: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            pos: 0,
        }
    }

    /// Buffers the next input line with any comment removed.
    ///
    /// Returns `Ok(false)` at end of input.
    fn advance_line(&mut self) -> Result<bool, InstanceLoadError> {
        self.line.clear();
        self.pos = 0;
        let read = self
            .rdr
            .read_line(&mut self.line)
            .map_err(InstanceLoadError::Io)?;
        if let Some(hash) = self.line.find('#') {
            self.line.truncate(hash);
        }
        Ok(read > 0)
    }

    /// Returns the next token parsed as `T`, pulling in new lines as needed.
    fn next<T>(&mut self) -> Result<T, InstanceLoadError>
    where
        T: FromStr,
    {
        let (start, end) = loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                // Nothing left on this line; a line of pure whitespace or
                // comment simply repeats this step.
                if !self.advance_line()? {
                    return Err(InstanceLoadError::UnexpectedEof);
                }
                continue;
            }

            let start = self.pos + (rest.len() - trimmed.len());
            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            self.pos = start + len;
            break (start, start + len);
        };

        let token = &self.line[start..end];
        token.parse::<T>().map_err(|_| {
            InstanceLoadError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            })
        })
    }
}
