//! Line-oriented reader for delimiter-separated files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::Split;

use crate::error::{ReconError, Result};

/// Reader splitting each line on a single delimiter character
///
/// Quoting is not supported: a delimiter inside a value always starts a new
/// field. Every line is a row, so an empty line yields one empty field.
pub struct DelimitedReader<R = BufReader<File>> {
    path: PathBuf,
    inner: R,
    delimiter: char,
    line: String,
    line_number: u64,
}

impl DelimitedReader {
    /// Open a file for reading
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|source| ReconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(path, BufReader::new(file), delimiter))
    }
}

impl<R: BufRead> DelimitedReader<R> {
    /// Wrap an existing reader; `path` is used in error messages and reports
    pub fn from_reader(path: impl Into<PathBuf>, reader: R, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            inner: reader,
            delimiter: char::from(delimiter),
            line: String::new(),
            line_number: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the first line as a list of column names
    pub fn read_header(&mut self) -> Result<Vec<String>> {
        match self.next_record()? {
            Some((_, fields)) => Ok(fields.map(str::to_string).collect()),
            None => Err(ReconError::EmptyFile(self.path.clone())),
        }
    }

    /// Advance to the next line, returning its 1-based line number and fields
    pub fn next_record(&mut self) -> Result<Option<(u64, Split<'_, char>)>> {
        self.line.clear();
        let read = self
            .inner
            .read_line(&mut self.line)
            .map_err(|source| ReconError::Read {
                path: self.path.clone(),
                source,
            })?;

        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let end = self
            .line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .map_or(self.line.len(), str::len);
        self.line.truncate(end);

        Ok(Some((self.line_number, self.line.split(self.delimiter))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(record: Option<(u64, Split<'_, char>)>) -> (u64, Vec<String>) {
        let (line, fields) = record.unwrap();
        (line, fields.map(str::to_string).collect())
    }

    #[test]
    fn test_split_without_quoting() {
        let data = "id,name\n1,\"a,b\"\r\n2,x,\n";
        let mut reader = DelimitedReader::from_reader("mem.csv", data.as_bytes(), b',');

        assert_eq!(reader.read_header().unwrap(), vec!["id", "name"]);
        assert_eq!(
            fields(reader.next_record().unwrap()),
            (2, vec!["1".into(), "\"a".into(), "b\"".into()])
        );
        assert_eq!(
            fields(reader.next_record().unwrap()),
            (3, vec!["2".into(), "x".into(), String::new()])
        );
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn test_blank_lines_are_rows() {
        let data = "\nid\n\r\n3";
        let mut reader = DelimitedReader::from_reader("mem.csv", data.as_bytes(), b',');

        assert_eq!(reader.read_header().unwrap(), vec![""]);
        assert_eq!(fields(reader.next_record().unwrap()), (2, vec!["id".into()]));
        assert_eq!(fields(reader.next_record().unwrap()), (3, vec![String::new()]));
        assert_eq!(fields(reader.next_record().unwrap()), (4, vec!["3".into()]));
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "a|b\n1|2\n";
        let mut reader = DelimitedReader::from_reader("mem.psv", data.as_bytes(), b'|');
        assert_eq!(reader.read_header().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_file() {
        let mut reader = DelimitedReader::from_reader("empty.csv", "".as_bytes(), b',');
        assert!(matches!(
            reader.read_header(),
            Err(ReconError::EmptyFile(path)) if path == Path::new("empty.csv")
        ));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let data: &[u8] = b"id\n\xff\xfe\n";
        let mut reader = DelimitedReader::from_reader("bin.csv", data, b',');
        reader.read_header().unwrap();
        assert!(matches!(reader.next_record(), Err(ReconError::Read { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = DelimitedReader::open(Path::new("/nonexistent/keydiff.csv"), b',');
        assert!(matches!(result, Err(ReconError::Io { .. })));
    }
}
