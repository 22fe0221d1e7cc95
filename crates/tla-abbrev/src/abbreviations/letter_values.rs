use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Failures raised while reading a letter-value file.
#[derive(Debug, thiserror::Error)]
pub enum LetterValuesError {
    #[error("Error: {} not found.", path.display())]
    NotFound { path: PathBuf },
    #[error("Error: {} does not have the expected format.", path.display())]
    Malformed { path: PathBuf, line: usize },
    #[error("failed to read letter values: {0}")]
    Io(#[from] io::Error),
}

/// Per-letter penalties added by the positional scoring fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValueTable {
    values: HashMap<String, i64>,
}

impl LetterValueTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LetterValuesError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LetterValuesError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LetterValuesError::Io(err),
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            LetterValuesError::Malformed { line, .. } => LetterValuesError::Malformed {
                path: path.to_path_buf(),
                line,
            },
            other => other,
        })
    }

    /// Loads the table, logging the failure and returning an empty table instead of an error.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(err) => {
                warn!("{err}");
                Self::default()
            }
        }
    }

    /// Parses `LETTER SCORE` lines. Any malformed line rejects the whole input.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LetterValuesError> {
        let mut values = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => LetterValuesError::Malformed {
                    path: PathBuf::new(),
                    line: index + 1,
                },
                _ => LetterValuesError::Io(err),
            })?;
            let (letter, score) =
                parse_line(&line).ok_or_else(|| LetterValuesError::Malformed {
                    path: PathBuf::new(),
                    line: index + 1,
                })?;
            values.insert(letter.to_string(), score);
        }

        debug!(letters = values.len(), "letter values loaded");
        Ok(Self { values })
    }

    pub fn lookup(&self, letter: char) -> i64 {
        let mut buf = [0u8; 4];
        self.values
            .get(&*letter.encode_utf8(&mut buf))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(char, i64)> for LetterValueTable {
    fn from_iter<I: IntoIterator<Item = (char, i64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(letter, score)| (letter.to_string(), score))
                .collect(),
        }
    }
}

fn parse_line(line: &str) -> Option<(&str, i64)> {
    let mut tokens = line.split_whitespace();
    let letter = tokens.next()?;
    let score = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((letter, score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn parses_whitespace_separated_pairs() {
        let table = LetterValueTable::from_reader(Cursor::new("A 1\nB\t2\n  E   0  \n"))
            .expect("valid table");
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup('A'), 1);
        assert_eq!(table.lookup('B'), 2);
        assert_eq!(table.lookup('E'), 0);
    }

    #[test]
    fn missing_letters_default_to_zero() {
        let table: LetterValueTable = [('A', 4)].into_iter().collect();
        assert_eq!(table.lookup('Q'), 0);
        assert_eq!(table.lookup('a'), 0);
    }

    #[test]
    fn one_malformed_line_rejects_the_whole_input() {
        for input in ["A 1\nB two\n", "A 1\n\nB 2\n", "A 1 2\n", "A\n", "A 1.5\n"] {
            let err = LetterValueTable::from_reader(Cursor::new(input))
                .expect_err("malformed input rejected");
            assert!(
                matches!(err, LetterValuesError::Malformed { .. }),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn negative_values_are_accepted() {
        let table = LetterValueTable::from_reader(Cursor::new("A 1\nB -2\nE 0\n"))
            .expect("negative values load");
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup('B'), -2);
    }

    #[test]
    fn invalid_utf8_counts_as_malformed() {
        let err = LetterValueTable::from_reader(Cursor::new(&b"A 1\n\xff 2\n"[..]))
            .expect_err("undecodable input rejected");
        match err {
            LetterValuesError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_error_reports_line_number() {
        let err = LetterValueTable::from_reader(Cursor::new("A 1\nB 2\nC x\n"))
            .expect_err("malformed input rejected");
        match err {
            LetterValuesError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("values.txt");
        let err = LetterValueTable::load(&path).expect_err("missing file");
        assert!(matches!(err, LetterValuesError::NotFound { .. }));
        assert_eq!(err.to_string(), format!("Error: {} not found.", path.display()));
        assert!(LetterValueTable::load_or_empty(&path).is_empty());
    }

    #[test]
    fn load_or_empty_swallows_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "A 1").expect("write");
        writeln!(file, "B 2 3").expect("write");

        let err = LetterValueTable::load(file.path()).expect_err("malformed file");
        assert_eq!(
            err.to_string(),
            format!(
                "Error: {} does not have the expected format.",
                file.path().display()
            )
        );
        assert!(LetterValueTable::load_or_empty(file.path()).is_empty());
    }
}
