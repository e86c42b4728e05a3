//! Core data types for the polarus classifier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::tokenizer::tokenize;

/// The two classes a piece of text can be assigned to.
///
/// The lowercase string form doubles as the cache key for the class's
/// frequency table, so `positive.json` and `negative.json` on disk line up
/// with the variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
  /// The positive sentiment class.
  Positive,
  /// The negative sentiment class.
  Negative,
}

impl Label {
  /// The lowercase string form of the label.
  pub fn as_str(self) -> &'static str {
    match self {
      Label::Positive => "positive",
      Label::Negative => "negative",
    }
  }
}

impl fmt::Display for Label {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Label {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "positive" => Ok(Label::Positive),
      "negative" => Ok(Label::Negative),
      _ => Err(format!("unknown label: {}", s)),
    }
  }
}

/// Summed log-likelihoods for a piece of text under each class.
///
/// Produced by [`Classifier::score`](crate::classifier::Classifier::score).
/// The raw sums are exposed so callers can see how close a decision was
/// instead of only getting the winning label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassScores {
  /// Sum of per-token log-probabilities under the positive table.
  pub positive: f64,
  /// Sum of per-token log-probabilities under the negative table.
  pub negative: f64,
}

impl ClassScores {
  /// The winning label.
  ///
  /// The decision is a strict `positive > negative`; equal scores resolve
  /// to [`Label::Negative`]. A text with no tokens scores 0.0 under both
  /// classes and therefore lands on negative.
  pub fn label(self) -> Label {
    if self.positive > self.negative {
      Label::Positive
    } else {
      Label::Negative
    }
  }

  /// How far the text leans positive: `positive - negative`.
  pub fn margin(self) -> f64 {
    self.positive - self.negative
  }
}

/// Per-class mapping from token to occurrence count.
///
/// A table is built once, by training or by loading a cache, and never
/// mutated afterwards. Every stored count is at least 1; tokens that were
/// never recorded read as 0 through [`count`](FrequencyTable::count).
///
/// Serializes transparently as the underlying map, so the cached form is a
/// plain `{"token": count}` JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
  counts: HashMap<String, u64>,
}

impl FrequencyTable {
  /// Creates an empty table.
  pub fn new() -> Self {
    Self::default()
  }

  /// Records one occurrence of `token`.
  pub fn record(&mut self, token: impl Into<String>) {
    *self.counts.entry(token.into()).or_insert(0) += 1;
  }

  /// Occurrence count for `token`, 0 when the token was never recorded.
  pub fn count(&self, token: &str) -> u64 {
    self.counts.get(token).copied().unwrap_or(0)
  }

  /// Total number of recorded occurrences across all tokens.
  pub fn total(&self) -> u64 {
    self.counts.values().sum()
  }

  /// Number of distinct tokens.
  pub fn distinct(&self) -> usize {
    self.counts.len()
  }

  /// True when no token has been recorded.
  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// Adds every count from `other` into this table.
  ///
  /// Merging is commutative and associative, which is what allows table
  /// construction to process line chunks in any order.
  pub fn merge(&mut self, other: FrequencyTable) {
    for (token, count) in other.counts {
      *self.counts.entry(token).or_insert(0) += count;
    }
  }

  /// Checks the invariants a trained table upholds by construction.
  ///
  /// A table deserialized from a cache is unvalidated data. This rejects
  /// zero counts and keys that are not in normalized token form: a valid
  /// key must tokenize back to exactly itself.
  pub fn validate(&self) -> std::result::Result<(), String> {
    for (token, &count) in &self.counts {
      if count == 0 {
        return Err(format!("zero count for token {:?}", token));
      }
      let round_trip = tokenize(token);
      if round_trip.len() != 1 || round_trip[0] != *token {
        return Err(format!("key {:?} is not a normalized token", token));
      }
    }
    Ok(())
  }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
  /// Builds a table from explicit `(token, count)` pairs.
  ///
  /// Zero-count entries are skipped so the count invariant holds by
  /// construction.
  fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
    let mut table = FrequencyTable::new();
    for (token, count) in iter {
      if count > 0 {
        table.counts.insert(token.into(), count);
      }
    }
    table
  }
}
