//! Corpus line sources for training.
//!
//! A corpus is an ordered sequence of lines, one training example per
//! line; the class label is implicit in which corpus a line came from.
//! The trait keeps the training core independent of where lines actually
//! live: text files in production, in-memory fixtures in tests.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// An ordered source of training lines for one class.
pub trait CorpusSource {
  /// Reads every line of the corpus, in order.
  ///
  /// Fails with [`Error::ResourceUnavailable`] when the underlying source
  /// cannot be read. A failed read invalidates the whole training step,
  /// never a prefix of it.
  fn read_lines(&self) -> Result<Vec<String>>;
}

/// A corpus stored as a UTF-8 text file, one review per line.
#[derive(Debug, Clone)]
pub struct FileCorpus {
  path: PathBuf,
}

impl FileCorpus {
  /// Creates a corpus backed by the file at `path`.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The file this corpus reads from.
  pub fn path(&self) -> &Path {
    &self.path
  }

  fn unavailable(&self, source: std::io::Error) -> Error {
    Error::ResourceUnavailable {
      path: self.path.clone(),
      source,
    }
  }
}

impl CorpusSource for FileCorpus {
  fn read_lines(&self) -> Result<Vec<String>> {
    let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
      lines.push(line.map_err(|e| self.unavailable(e))?);
    }
    Ok(lines)
  }
}

/// An in-memory corpus, mainly for tests and small fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
  lines: Vec<String>,
}

impl MemoryCorpus {
  /// Creates a corpus from anything iterable as lines.
  pub fn new<I, S>(lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }
}

impl CorpusSource for MemoryCorpus {
  fn read_lines(&self) -> Result<Vec<String>> {
    Ok(self.lines.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_file_corpus_reads_lines_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "A great movie").unwrap();
    writeln!(file, "Loved it!").unwrap();

    let corpus = FileCorpus::new(file.path());
    let lines = corpus.read_lines().unwrap();
    assert_eq!(lines, vec!["A great movie", "Loved it!"]);
  }

  #[test]
  fn test_missing_file_is_resource_unavailable() {
    let corpus = FileCorpus::new("definitely/not/here.txt");
    let err = corpus.read_lines().unwrap_err();
    assert!(matches!(err, Error::ResourceUnavailable { .. }));
  }

  #[test]
  fn test_invalid_utf8_is_resource_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"good line\n\xff\xfe broken\n").unwrap();

    let corpus = FileCorpus::new(file.path());
    let err = corpus.read_lines().unwrap_err();
    assert!(matches!(err, Error::ResourceUnavailable { .. }));
  }

  #[test]
  fn test_memory_corpus_preserves_order() {
    let corpus = MemoryCorpus::new(["same line", "same line", "other"]);
    let lines = corpus.read_lines().unwrap();
    assert_eq!(lines, vec!["same line", "same line", "other"]);
  }
}
