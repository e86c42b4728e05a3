//! Frequency-model training.
//!
//! Training scans every line of a labeled corpus and counts token
//! occurrences into one [`FrequencyTable`] per class. The two classes are
//! trained independently; nothing about one table depends on the other.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::CorpusSource;
use crate::error::Result;
use crate::tokenizer::tokenize;
use crate::types::FrequencyTable;

/// Counts token occurrences across a sequence of lines.
///
/// The result depends only on which lines appear and how often, not on
/// their order: per-token counts are commutative sums, so chunked or
/// reordered processing builds the same table. With the `parallel`
/// feature the lines are folded per rayon worker and the partial tables
/// merged at the end.
pub fn build_table<S>(lines: &[S]) -> FrequencyTable
where
  S: AsRef<str> + Sync,
{
  #[cfg(feature = "parallel")]
  {
    lines
      .par_iter()
      .fold(FrequencyTable::new, |mut table, line| {
        for token in tokenize(line.as_ref()) {
          table.record(token);
        }
        table
      })
      .reduce(FrequencyTable::new, |mut left, right| {
        left.merge(right);
        left
      })
  }

  #[cfg(not(feature = "parallel"))]
  {
    let mut table = FrequencyTable::new();
    for line in lines {
      for token in tokenize(line.as_ref()) {
        table.record(token);
      }
    }
    table
  }
}

/// Trains the positive and negative tables from two labeled corpora.
///
/// Either corpus failing to read fails the whole step; a partially
/// populated pair is never returned.
pub fn train_from_corpora<P, N>(
  positive: &P,
  negative: &N,
) -> Result<(FrequencyTable, FrequencyTable)>
where
  P: CorpusSource + ?Sized,
  N: CorpusSource + ?Sized,
{
  let positive_lines = positive.read_lines()?;
  let negative_lines = negative.read_lines()?;

  let pos = build_table(&positive_lines);
  let neg = build_table(&negative_lines);

  tracing::info!(
    "trained tables: positive {} distinct / {} total, negative {} distinct / {} total",
    pos.distinct(),
    pos.total(),
    neg.distinct(),
    neg.total()
  );

  Ok((pos, neg))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::corpus::{FileCorpus, MemoryCorpus};
  use crate::error::Error;

  #[test]
  fn test_table_mass_equals_token_occurrences() {
    // 5 tokens in the first line, 3 in the second.
    let lines = ["Great movie, great!", "not great."];
    let table = build_table(&lines);

    assert_eq!(table.total(), 8);
    assert_eq!(table.count("great"), 3);
    assert_eq!(table.count("!"), 1);
    assert_eq!(table.count("."), 1);
  }

  #[test]
  fn test_line_order_independence() {
    let forward = ["one fine day", "a fine, fine cast", "day one"];
    let backward = ["day one", "a fine, fine cast", "one fine day"];

    assert_eq!(build_table(&forward), build_table(&backward));
  }

  #[test]
  fn test_building_twice_yields_identical_tables() {
    let lines = ["So good. So, so good!", "The best I've seen"];
    assert_eq!(build_table(&lines), build_table(&lines));
  }

  #[test]
  fn test_merged_halves_agree_with_one_pass() {
    let lines = [
      "What a great, fun movie!",
      "Terrible. Just terrible.",
      "I loved the cast",
      "The plot was bad",
    ];

    let mut merged = build_table(&lines[..2]);
    merged.merge(build_table(&lines[2..]));

    assert_eq!(merged, build_table(&lines));
  }

  #[test]
  fn test_tables_are_per_corpus() {
    let positive = MemoryCorpus::new(["great fun"]);
    let negative = MemoryCorpus::new(["bad, bad plot"]);

    let (pos, neg) = train_from_corpora(&positive, &negative).unwrap();

    assert_eq!(pos.count("great"), 1);
    assert_eq!(pos.count("bad"), 0);
    assert_eq!(neg.count("bad"), 2);
    assert_eq!(neg.count("great"), 0);
  }

  #[test]
  fn test_unreadable_corpus_fails_training() {
    let positive = MemoryCorpus::new(["fine"]);
    let negative = FileCorpus::new("no/such/corpus.txt");

    let err = train_from_corpora(&positive, &negative).unwrap_err();
    assert!(matches!(err, Error::ResourceUnavailable { .. }));
  }

  #[test]
  fn test_empty_corpus_trains_empty_table() {
    let (pos, neg) =
      train_from_corpora(&MemoryCorpus::default(), &MemoryCorpus::new(["bad"])).unwrap();

    assert!(pos.is_empty());
    assert_eq!(pos.total(), 0);
    assert_eq!(neg.total(), 1);
  }
}
