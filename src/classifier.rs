//! Log-likelihood classification over a pair of frequency tables.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::CorpusSource;
use crate::error::Result;
use crate::store::{load_table_pair, save_table_pair, TableStore};
use crate::tokenizer::tokenize;
use crate::training::train_from_corpora;
use crate::types::{ClassScores, FrequencyTable, Label};

/// A trained binary sentiment classifier.
///
/// Owns one immutable frequency table per class. The per-class occurrence
/// totals are computed once at construction; the tables never change
/// afterwards, so the cached totals stay valid for the life of the value.
///
/// # Examples
///
/// ```
/// use polarus::prelude::*;
///
/// let positive = FrequencyTable::from_iter([("great", 10)]);
/// let negative = FrequencyTable::from_iter([("bad", 10)]);
/// let classifier = Classifier::from_tables(positive, negative);
///
/// assert_eq!(classifier.classify("a great movie"), Label::Positive);
/// assert_eq!(classifier.classify("bad, just bad"), Label::Negative);
/// ```
#[derive(Debug)]
pub struct Classifier {
  positive: FrequencyTable,
  negative: FrequencyTable,
  positive_total: f64,
  negative_total: f64,
}

impl Classifier {
  /// Builds a classifier from two already-trained tables.
  ///
  /// Pure: no I/O and no validation beyond what the tables uphold by
  /// construction themselves.
  pub fn from_tables(positive: FrequencyTable, negative: FrequencyTable) -> Self {
    let positive_total = positive.total() as f64;
    let negative_total = negative.total() as f64;
    Self {
      positive,
      negative,
      positive_total,
      negative_total,
    }
  }

  /// Trains from two labeled corpora without touching any cache.
  pub fn from_corpora<P, N>(positive: &P, negative: &N) -> Result<Self>
  where
    P: CorpusSource + ?Sized,
    N: CorpusSource + ?Sized,
  {
    let (pos, neg) = train_from_corpora(positive, negative)?;
    Ok(Self::from_tables(pos, neg))
  }

  /// Loads both cached tables when present, otherwise trains from the
  /// corpora and writes the result through `store` before building.
  ///
  /// The cache is all-or-nothing: a lone cached table is ignored and
  /// retraining covers both classes. A cache that exists but fails to
  /// decode is an error, not a cache miss.
  pub fn load_or_train<T, P, N>(store: &T, positive: &P, negative: &N) -> Result<Self>
  where
    T: TableStore + ?Sized,
    P: CorpusSource + ?Sized,
    N: CorpusSource + ?Sized,
  {
    if let Some((pos, neg)) = load_table_pair(store)? {
      tracing::info!("cached tables found, skipping training");
      return Ok(Self::from_tables(pos, neg));
    }

    tracing::info!("no cached tables, training from corpora");
    let (pos, neg) = train_from_corpora(positive, negative)?;
    save_table_pair(store, &pos, &neg)?;
    Ok(Self::from_tables(pos, neg))
  }

  /// Sums smoothed log-likelihoods for `text` under both classes.
  ///
  /// Each token `w` contributes `ln((1 + count(w)) / total)` to the class
  /// it is scored against. The add-one keeps tokens unseen in a class
  /// from zeroing the whole product out, which is exactly why the scores
  /// stay finite for arbitrary input.
  pub fn score(&self, text: &str) -> ClassScores {
    let mut scores = ClassScores::default();
    for token in tokenize(text) {
      let smoothed_pos = (1 + self.positive.count(&token)) as f64;
      let smoothed_neg = (1 + self.negative.count(&token)) as f64;
      scores.positive += (smoothed_pos / self.positive_total).ln();
      scores.negative += (smoothed_neg / self.negative_total).ln();
    }
    scores
  }

  /// Classifies `text` into one of the two classes.
  ///
  /// Total over any input: a text with no tokens ties at 0.0 and resolves
  /// to [`Label::Negative`].
  pub fn classify(&self, text: &str) -> Label {
    self.score(text).label()
  }

  /// Classifies a batch of texts.
  ///
  /// With the `parallel` feature the batch fans out over rayon; the
  /// tables are read-only, so the results are identical either way.
  pub fn classify_batch<S>(&self, texts: &[S]) -> Vec<Label>
  where
    S: AsRef<str> + Sync,
  {
    #[cfg(feature = "parallel")]
    {
      texts.par_iter().map(|text| self.classify(text.as_ref())).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
      texts.iter().map(|text| self.classify(text.as_ref())).collect()
    }
  }

  /// Fraction of held-out lines that get their own class back, over both
  /// labels at once. Returns 0.0 when there are no lines at all.
  pub fn accuracy<S>(&self, positive: &[S], negative: &[S]) -> f64
  where
    S: AsRef<str> + Sync,
  {
    let total = positive.len() + negative.len();
    if total == 0 {
      return 0.0;
    }

    let hits = self
      .classify_batch(positive)
      .into_iter()
      .filter(|label| *label == Label::Positive)
      .count()
      + self
        .classify_batch(negative)
        .into_iter()
        .filter(|label| *label == Label::Negative)
        .count();

    hits as f64 / total as f64
  }

  /// The positive-class table.
  pub fn positive_table(&self) -> &FrequencyTable {
    &self.positive
  }

  /// The negative-class table.
  pub fn negative_table(&self) -> &FrequencyTable {
    &self.negative
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn toy_classifier() -> Classifier {
    Classifier::from_tables(
      FrequencyTable::from_iter([("great", 10)]),
      FrequencyTable::from_iter([("bad", 10)]),
    )
  }

  #[test]
  fn test_smoothed_token_scores() {
    let classifier = toy_classifier();
    let scores = classifier.score("great");

    assert!((scores.positive - (11.0f64 / 10.0).ln()).abs() < 1e-12);
    assert!((scores.negative - (1.0f64 / 10.0).ln()).abs() < 1e-12);
    assert_eq!(scores.label(), Label::Positive);
  }

  #[test]
  fn test_empty_input_resolves_to_negative() {
    let classifier = toy_classifier();

    assert_eq!(classifier.score(""), ClassScores::default());
    assert_eq!(classifier.classify(""), Label::Negative);
    assert_eq!(classifier.classify("   \t "), Label::Negative);
  }

  #[test]
  fn test_unseen_tokens_tie_to_negative() {
    let classifier = toy_classifier();
    // "mediocre" gets the same smoothed ratio from both tables.
    assert_eq!(classifier.classify("mediocre"), Label::Negative);
  }

  #[test]
  fn test_scores_accumulate_per_token() {
    let classifier = toy_classifier();
    let single = classifier.score("great");
    let double = classifier.score("great great");

    assert!((double.positive - 2.0 * single.positive).abs() < 1e-12);
    assert!((double.negative - 2.0 * single.negative).abs() < 1e-12);
  }

  #[test]
  fn test_boosted_token_never_flips_positive() {
    let negative = FrequencyTable::from_iter([("bad", 10)]);
    let mut last_margin = f64::NEG_INFINITY;

    for boost in [10, 20, 100, 1000] {
      let positive = FrequencyTable::from_iter([("great", boost), ("fun", 5)]);
      let classifier = Classifier::from_tables(positive, negative.clone());

      let scores = classifier.score("great");
      assert_eq!(scores.label(), Label::Positive);
      assert!(scores.margin() >= last_margin);
      last_margin = scores.margin();
    }
  }

  #[test]
  fn test_batch_matches_single_classification() {
    let classifier = toy_classifier();
    let texts = ["great", "bad", "great bad great", ""];

    let batch = classifier.classify_batch(&texts);
    let singles: Vec<_> = texts.iter().map(|t| classifier.classify(t)).collect();
    assert_eq!(batch, singles);
  }

  #[test]
  fn test_accuracy_counts_both_classes() {
    let classifier = toy_classifier();

    let accuracy = classifier.accuracy(&["great", "great great"], &["bad"]);
    assert_eq!(accuracy, 1.0);

    // One positive line misclassified out of three lines total.
    let accuracy = classifier.accuracy(&["great", "bad"], &["bad"]);
    assert!((accuracy - 2.0 / 3.0).abs() < 1e-12);
  }

  #[test]
  fn test_accuracy_on_empty_input() {
    let classifier = toy_classifier();
    let nothing: [&str; 0] = [];
    assert_eq!(classifier.accuracy(&nothing, &nothing), 0.0);
  }

  #[test]
  fn test_classifier_implements_debug() {
    let rendered = format!("{:?}", toy_classifier());
    assert!(rendered.contains("Classifier"));
  }
}
