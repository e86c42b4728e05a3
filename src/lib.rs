//! Polarus - a naive Bayes sentiment classifier for free text.
//!
//! Polarus learns word-frequency statistics from two labeled corpora (one
//! of positive reviews, one of negative) and classifies new text by
//! comparing summed log-probabilities under each class. Training and
//! classification are pure computations over in-memory tables; corpora
//! and table caches sit behind small traits so the core never performs
//! hidden I/O.
//!
//! # Examples
//!
//! ```
//! use polarus::prelude::*;
//!
//! let positive = MemoryCorpus::new(["What a great, fun movie!", "Great cast."]);
//! let negative = MemoryCorpus::new(["Bad plot, bad acting.", "Dreadful."]);
//!
//! let classifier = Classifier::from_corpora(&positive, &negative).unwrap();
//! assert_eq!(classifier.classify("great fun"), Label::Positive);
//! assert_eq!(classifier.classify("a bad one"), Label::Negative);
//! ```

pub mod classifier;
pub mod corpus;
pub mod error;
pub mod store;
pub mod tokenizer;
pub mod training;
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::classifier::*;
  pub use crate::corpus::*;
  pub use crate::error::*;
  pub use crate::store::*;
  pub use crate::tokenizer::*;
  pub use crate::training::*;
  pub use crate::types::*;
}
