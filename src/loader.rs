//! Initial-state loader for delimiter-separated text grids.
//!
//! Each non-blank line is one row, with trailing whitespace ignored. Tokens are split on a delimiter and a
//! token is alive when it equals the alive marker exactly:
//!
//! ```text
//! - * - -
//! - - * -
//! * * * -
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// How to interpret tokens in an initial-state file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct LoaderOptions {
    /// Token that marks a live cell.
    alive: String,
    /// Field delimiter. Empty means one token per character.
    delimiter: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self::new("*".to_string(), " ".to_string())
    }
}

impl LoaderOptions {
    fn tokens<'a>(&'a self, line: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        if self.delimiter.is_empty() {
            Box::new(line.char_indices().map(move |(i, ch)| &line[i..i + ch.len_utf8()]))
        } else {
            Box::new(line.split(self.delimiter.as_str()))
        }
    }
}

/// A rectangular boolean matrix read from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialState {
    cells: Vec<Vec<bool>>,
}

impl InitialState {
    /// Reads an initial state from a file.
    #[instrument(skip(path, options), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            LoadError::new(LoadErrorKind::Io(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        let state = Self::from_reader(BufReader::new(file), options)?;
        info!(rows = state.rows(), cols = state.cols(), "Initial state loaded");
        Ok(state)
    }

    /// Reads an initial state from any buffered reader.
    #[instrument(skip(reader))]
    pub fn from_reader<B: BufRead>(reader: B, options: &LoaderOptions) -> Result<Self, LoadError> {
        let mut cells: Vec<Vec<bool>> = Vec::new();
        let mut expected = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LoadError::new(LoadErrorKind::Io(e.to_string())))?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let row: Vec<bool> = options
                .tokens(line)
                .map(|token| token == options.alive)
                .collect();

            if cells.is_empty() {
                expected = row.len();
            } else if row.len() != expected {
                warn!(line = index + 1, expected, found = row.len(), "Ragged row");
                return Err(LoadError::new(LoadErrorKind::RaggedRows {
                    line: index + 1,
                    expected,
                    found: row.len(),
                }));
            }
            cells.push(row);
        }

        if cells.is_empty() {
            return Err(LoadError::new(LoadErrorKind::Empty));
        }

        debug!(rows = cells.len(), cols = expected, "Parsed initial state");
        Ok(Self { cells })
    }

    /// Number of rows read.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns in every row.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The boolean matrix, ready for `LifeEngine::start`.
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }
}

/// What went wrong while loading an initial state.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadErrorKind {
    /// The input could not be opened or read.
    #[display("I/O error: {}", _0)]
    Io(String),

    /// The input contained no rows.
    #[display("Initial state is empty")]
    Empty,

    /// A row's column count differs from the first row.
    #[display("Line {line} has {found} columns, expected {expected}")]
    RaggedRows {
        /// 1-based line number of the offending row.
        line: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
}

/// Initial-state loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Load error: {} at {}:{}", kind, file, line)]
pub struct LoadError {
    /// The kind of failure.
    pub kind: LoadErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LoadError {
    /// Creates a new load error.
    #[track_caller]
    pub fn new(kind: LoadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_delimited() {
        let state = InitialState::from_reader("- * -\n* * *\n".as_bytes(), &LoaderOptions::default())
            .unwrap();
        assert_eq!(state.cells(), [vec![false, true, false], vec![true, true, true]]);
    }

    #[test]
    fn test_empty_delimiter_splits_characters() {
        let options = LoaderOptions::new("#".to_string(), String::new());
        let state = InitialState::from_reader(".#.\n##.\n".as_bytes(), &options).unwrap();
        assert_eq!((state.rows(), state.cols()), (2, 3));
        assert_eq!(state.cells()[1], [true, true, false]);
    }

    #[test]
    fn test_multi_character_marker() {
        let options = LoaderOptions::new("on".to_string(), ",".to_string());
        let state = InitialState::from_reader("on,off,one\n".as_bytes(), &options).unwrap();
        assert_eq!(state.cells()[0], [true, false, false]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let state =
            InitialState::from_reader("\n* -\n\n- *\n\n".as_bytes(), &LoaderOptions::default())
                .unwrap();
        assert_eq!(state.rows(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let state =
            InitialState::from_reader("* -\r\n- *\r\n".as_bytes(), &LoaderOptions::default())
                .unwrap();
        assert_eq!(state.cells(), [vec![true, false], vec![false, true]]);
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        let state = InitialState::from_reader(
            "* - * \n- * -\n* * *\t\n".as_bytes(),
            &LoaderOptions::default(),
        )
        .unwrap();
        assert_eq!((state.rows(), state.cols()), (3, 3));
        assert_eq!(state.cells()[0], [true, false, true]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = InitialState::from_reader("* -\n* - *\n".as_bytes(), &LoaderOptions::default())
            .unwrap_err();
        assert_eq!(
            err.kind,
            LoadErrorKind::RaggedRows {
                line: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = InitialState::from_reader(" \n\n".as_bytes(), &LoaderOptions::default())
            .unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Empty);
        assert!(err.to_string().starts_with("Load error: Initial state is empty"));
    }
}
