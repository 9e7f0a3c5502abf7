//! In-memory record store.
//!
//! Holds every record in insertion order behind a single lock scoped to the
//! whole collection. Nothing is persisted; the store lives as long as the
//! process that owns it.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::id::CodeId;
use crate::record::{kind_or_default, Record};
use crate::seed::seed_records;

/// Thread-safe, insertion-ordered collection of code records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<IndexMap<CodeId, Record>>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two startup sample records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_records(seed_records())
    }

    /// Create a store from arbitrary initial records, in order.
    ///
    /// If two records share an id, the first one wins.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut map = IndexMap::new();
        for record in records {
            map.entry(record.id.clone()).or_insert(record);
        }
        Self { records: RwLock::new(map) }
    }

    /// Every record currently held, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Record> {
        self.read().values().cloned().collect()
    }

    /// Look up a record by exact id match.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Record> {
        self.read().get(id).cloned()
    }

    /// Store a new record and return it.
    ///
    /// `kind` falls back to `"qr"` when absent or empty. The id is drawn
    /// under the write lock and re-drawn until it differs from every stored
    /// id.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingData`] if `data` is empty; the store is
    /// left untouched.
    pub fn create(&self, data: String, kind: Option<String>) -> Result<Record, CoreError> {
        if data.is_empty() {
            return Err(CoreError::MissingData);
        }
        let kind = kind_or_default(kind);

        let mut records = self.write();
        let id = loop {
            let candidate = CodeId::generate();
            if !records.contains_key(&candidate) {
                break candidate;
            }
        };
        let record = Record::new(id.clone(), data, kind);
        records.insert(id, record.clone());
        Ok(record)
    }

    /// Remove a record by exact id match. Returns `true` if it existed.
    ///
    /// Remaining records keep their relative order.
    pub fn delete(&self, id: &str) -> bool {
        self.write().shift_remove(id).is_some()
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<CodeId, Record>> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records.read().expect("record store read lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<CodeId, Record>> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records.write().expect("record store write lock poisoned")
    }
}
