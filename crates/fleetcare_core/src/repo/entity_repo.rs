//! Generic entity repository.
//!
//! # Responsibility
//! - Map typed records to JSON array blobs stored under fixed keys.
//! - Implement add/update/delete as read-modify-write of the whole array.
//!
//! # Invariants
//! - `add` never checks for an existing id.
//! - `update` on a missing id performs no write.
//! - `delete` always persists the filtered array, matched or not.

use crate::model::Record;
use crate::store::{KvStore, StoreError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage key of one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Ships,
    Components,
    Jobs,
    Notifications,
}

impl CollectionKey {
    /// All collection keys in seeding order.
    pub const ALL: [CollectionKey; 4] = [
        CollectionKey::Ships,
        CollectionKey::Components,
        CollectionKey::Jobs,
        CollectionKey::Notifications,
    ];

    /// Raw key used in the underlying store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ships => "ships",
            Self::Components => "components",
            Self::Jobs => "jobs",
            Self::Notifications => "notifications",
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// Stored blob is not a JSON array of the expected record shape.
    Corrupted {
        key: CollectionKey,
        message: String,
    },
    Serialize {
        key: CollectionKey,
        message: String,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Corrupted { key, message } => {
                write!(f, "stored collection `{key}` is malformed: {message}")
            }
            Self::Serialize { key, message } => {
                write!(f, "failed to serialize collection `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Corrupted { .. } | Self::Serialize { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Whole-collection CRUD over a [`KvStore`].
pub struct EntityRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> EntityRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store, for raw inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns whether `key` has ever been written, empty arrays included.
    pub fn is_initialized(&self, key: CollectionKey) -> RepoResult<bool> {
        Ok(self.store.read(key.as_str())?.is_some())
    }

    /// Loads the full collection in stored order; `[]` when never written.
    pub fn get_all<T: Record>(&self, key: CollectionKey) -> RepoResult<Vec<T>> {
        let Some(raw) = self.store.read(key.as_str())? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| {
            error!(
                "event=repo_read_corrupted module=repo status=error key={} error={}",
                key, err
            );
            RepoError::Corrupted {
                key,
                message: err.to_string(),
            }
        })
    }

    /// Overwrites the full collection.
    pub fn set_all<T: Record>(&self, key: CollectionKey, records: &[T]) -> RepoResult<()> {
        let raw = serde_json::to_string(records).map_err(|err| RepoError::Serialize {
            key,
            message: err.to_string(),
        })?;
        self.store.write(key.as_str(), &raw)?;
        debug!(
            "event=repo_write module=repo status=ok key={} count={}",
            key,
            records.len()
        );
        Ok(())
    }

    /// Appends `record` and returns it unchanged.
    pub fn add<T: Record>(&self, key: CollectionKey, record: T) -> RepoResult<T> {
        let mut records = self.get_all::<T>(key)?;
        records.push(record.clone());
        self.set_all(key, &records)?;
        Ok(record)
    }

    /// Replaces the first record sharing `record.id()` in place.
    ///
    /// Returns `None` without writing when no record matches.
    pub fn update<T: Record>(&self, key: CollectionKey, record: T) -> RepoResult<Option<T>> {
        let mut records = self.get_all::<T>(key)?;
        let Some(slot) = records.iter_mut().find(|item| item.id() == record.id()) else {
            debug!(
                "event=repo_update module=repo status=miss key={} id={}",
                key,
                record.id()
            );
            return Ok(None);
        };

        *slot = record.clone();
        self.set_all(key, &records)?;
        Ok(Some(record))
    }

    /// Removes every record whose id equals `id`.
    pub fn delete<T: Record>(&self, key: CollectionKey, id: &str) -> RepoResult<()> {
        let mut records = self.get_all::<T>(key)?;
        records.retain(|item| item.id() != id);
        self.set_all(key, &records)
    }
}
