//! Delimited table reading.
//!
//! Mesh tables are plain text: one header line followed by one row per
//! entity, with fields separated by `;`. Rows are normalised by turning every
//! `;` into whitespace and splitting on whitespace, so `1;0;0.5;2` and
//! `1 0 0.5 2` read the same.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{MeshError, Result};

/// Field separator used by mesh tables.
pub const DELIMITER: char = ';';

/// One data row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line: usize,
    /// The row's tokens, in order.
    pub fields: Vec<String>,
}

/// The data rows of a table file, header removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Where the table was read from.
    pub path: PathBuf,
    /// Data rows in file order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Start parsing a row of this table.
    pub fn parser<'a>(&'a self, row: &'a Row) -> RowParser<'a> {
        RowParser {
            path: &self.path,
            row,
            pos: 0,
        }
    }

    /// The error reported when a loader needs at least one row.
    pub fn empty_error(&self) -> MeshError {
        MeshError::EmptyTable {
            path: self.path.clone(),
        }
    }
}

/// Read a table file.
///
/// The first line is discarded as a header, and lines holding nothing but
/// whitespace are skipped. A table with no data rows is returned as-is; the
/// loaders decide whether that is an error.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MeshError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MeshError::io(path, e)
        }
    })?;
    parse_table(BufReader::new(file), path)
}

/// Read a table from any buffered reader.
///
/// `path` is only used to label errors and the returned [`Table`].
pub fn parse_table<R: BufRead>(reader: R, path: &Path) -> Result<Table> {
    let mut rows = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| MeshError::io(path, e))?;
        if i == 0 {
            continue;
        }

        let fields: Vec<String> = line
            .replace(DELIMITER, " ")
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        if fields.is_empty() {
            continue;
        }

        rows.push(Row { line: i + 1, fields });
    }

    Ok(Table {
        path: path.to_path_buf(),
        rows,
    })
}

/// Positional, typed reader over the fields of one row.
///
/// Every failure is reported as [`MeshError::MalformedRow`] carrying the
/// table path and line number.
#[derive(Debug)]
pub struct RowParser<'a> {
    path: &'a Path,
    row: &'a Row,
    pos: usize,
}

impl<'a> RowParser<'a> {
    /// Number of fields not consumed yet.
    pub fn remaining(&self) -> usize {
        self.row.fields.len() - self.pos
    }

    /// Build a malformed-row error for this row.
    pub fn error(&self, message: impl Into<String>) -> MeshError {
        MeshError::malformed(self.path, self.row.line, message)
    }

    fn next_field(&mut self, name: &str) -> Result<&'a str> {
        let field = self.row.fields.get(self.pos).ok_or_else(|| {
            self.error(format!(
                "missing {} (expected at least {} fields, found {})",
                name,
                self.pos + 1,
                self.row.fields.len()
            ))
        })?;
        self.pos += 1;
        Ok(field.as_str())
    }

    fn next_parsed<T>(&mut self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let field = self.next_field(name)?;
        field
            .parse()
            .map_err(|e| self.error(format!("invalid {} `{}`: {}", name, field, e)))
    }

    /// Read an unsigned integer field.
    pub fn next_u32(&mut self, name: &str) -> Result<u32> {
        self.next_parsed(name)
    }

    /// Read an id field.
    pub fn next_id<T: From<u32>>(&mut self, name: &str) -> Result<T> {
        self.next_u32(name).map(T::from)
    }

    /// Read a count field.
    pub fn next_count(&mut self, name: &str) -> Result<usize> {
        self.next_u32(name).map(|n| n as usize)
    }

    /// Read `count` consecutive id fields.
    pub fn next_ids<T: From<u32>>(&mut self, count: usize, name: &str) -> Result<Vec<T>> {
        if count > self.remaining() {
            return Err(self.error(format!(
                "declared {} {} but only {} fields follow",
                count,
                name,
                self.remaining()
            )));
        }
        (0..count).map(|_| self.next_id(name)).collect()
    }

    /// Read a finite floating point field.
    pub fn next_f64(&mut self, name: &str) -> Result<f64> {
        let value: f64 = self.next_parsed(name)?;
        if !value.is_finite() {
            return Err(self.error(format!("{} is not finite: {}", name, value)));
        }
        Ok(value)
    }

    /// Check that every field was consumed.
    pub fn finish(self) -> Result<()> {
        if self.pos != self.row.fields.len() {
            return Err(self.error(format!(
                "expected {} fields, found {}",
                self.pos,
                self.row.fields.len()
            )));
        }
        Ok(())
    }
}
