//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while training, caching, or loading.
///
/// Classification itself is infallible; errors only arise at the edges
/// where corpora and cached tables cross the I/O boundary.
#[derive(Error, Debug)]
pub enum Error {
  /// A corpus or cache file could not be read or written.
  ///
  /// Fatal for the operation that hit it: callers surface it instead of
  /// retrying or continuing with partial data.
  #[error("resource unavailable: {path} ({source})")]
  ResourceUnavailable {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A cached table exists but does not decode to a valid frequency table.
  ///
  /// Deliberately distinct from an absent cache: a damaged file is
  /// reported, never silently retrained over.
  #[error("corrupt table cache at {path}: {reason}")]
  CorruptCache { path: PathBuf, reason: String },
}
