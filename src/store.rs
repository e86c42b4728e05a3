//! Persisted frequency-table caches.
//!
//! A table cache lets a process skip retraining when trained tables from a
//! previous run are still around. The trait keeps the storage format
//! pluggable; the shipped implementation writes one JSON file per table.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::{FrequencyTable, Label};

/// A persistence backend for trained frequency tables.
pub trait TableStore {
  /// Loads the table stored under `key`, or `None` when nothing is
  /// stored there.
  ///
  /// Present-but-unreadable is an error, never `None`: a damaged cache
  /// must surface as [`Error::CorruptCache`] instead of silently
  /// triggering retraining over it.
  fn load(&self, key: &str) -> Result<Option<FrequencyTable>>;

  /// Persists `table` under `key`, replacing any previous value.
  fn save(&self, key: &str, table: &FrequencyTable) -> Result<()>;
}

/// Stores each table as `<key>.json` under a base directory.
#[derive(Debug)]
pub struct JsonFileStore {
  dir: PathBuf,
}

impl JsonFileStore {
  /// Creates a store rooted at `dir`. The directory itself is created on
  /// the first `save`.
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// The file a key maps to.
  pub fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{}.json", key))
  }
}

impl TableStore for JsonFileStore {
  fn load(&self, key: &str) -> Result<Option<FrequencyTable>> {
    let path = self.path_for(key);
    let bytes = match fs::read(&path) {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(Error::ResourceUnavailable { path, source: e }),
    };

    let table: FrequencyTable =
      serde_json::from_slice(&bytes).map_err(|e| Error::CorruptCache {
        path: path.clone(),
        reason: e.to_string(),
      })?;
    table.validate().map_err(|reason| Error::CorruptCache {
      path: path.clone(),
      reason,
    })?;

    tracing::info!("loaded table {:?} from {}", key, path.display());
    Ok(Some(table))
  }

  fn save(&self, key: &str, table: &FrequencyTable) -> Result<()> {
    fs::create_dir_all(&self.dir).map_err(|e| Error::ResourceUnavailable {
      path: self.dir.clone(),
      source: e,
    })?;

    let path = self.path_for(key);
    let bytes = serde_json::to_vec(table).map_err(|e| Error::ResourceUnavailable {
      path: path.clone(),
      source: e.into(),
    })?;
    fs::write(&path, bytes).map_err(|e| Error::ResourceUnavailable {
      path: path.clone(),
      source: e,
    })?;

    tracing::info!("saved table {:?} to {}", key, path.display());
    Ok(())
  }
}

/// Loads the positive/negative table pair, or `None` unless both tables
/// are cached. One table on its own is not enough to skip training.
pub fn load_table_pair<T>(store: &T) -> Result<Option<(FrequencyTable, FrequencyTable)>>
where
  T: TableStore + ?Sized,
{
  let pos = store.load(Label::Positive.as_str())?;
  let neg = store.load(Label::Negative.as_str())?;
  match (pos, neg) {
    (Some(pos), Some(neg)) => Ok(Some((pos, neg))),
    _ => Ok(None),
  }
}

/// Saves both tables under their class keys.
pub fn save_table_pair<T>(
  store: &T,
  positive: &FrequencyTable,
  negative: &FrequencyTable,
) -> Result<()>
where
  T: TableStore + ?Sized,
{
  store.save(Label::Positive.as_str(), positive)?;
  store.save(Label::Negative.as_str(), negative)
}
