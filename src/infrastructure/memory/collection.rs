//! Generic in-memory record collection.

use crate::domain::entities::RecordId;
use crate::error::AppError;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Records keyed by identifier, with a monotonically increasing id counter.
///
/// Identifiers are never reused, even after deletion.
pub struct Collection<T> {
    name: &'static str,
    inner: RwLock<Records<T>>,
}

struct Records<T> {
    next_id: RecordId,
    rows: BTreeMap<RecordId, T>,
}

impl<T: Clone> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Records {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records<T>>, AppError> {
        self.inner.read().map_err(|_| self.poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records<T>>, AppError> {
        self.inner.write().map_err(|_| self.poisoned())
    }

    /// Assigns the next identifier and stores the record built from it.
    pub fn insert_with(&self, build: impl FnOnce(RecordId) -> T) -> Result<T, AppError> {
        let mut records = self.write()?;
        let id = records.next_id;
        records.next_id += 1;

        let record = build(id);
        records.rows.insert(id, record.clone());
        Ok(record)
    }

    pub fn get(&self, id: RecordId) -> Result<Option<T>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    /// Returns every record matching `predicate`, in identifier order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>, AppError> {
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    /// Replaces an existing record. Returns `None` if `id` is unknown.
    pub fn replace(&self, id: RecordId, record: T) -> Result<Option<T>, AppError> {
        let mut records = self.write()?;
        match records.rows.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    pub fn remove(&self, id: RecordId) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    pub fn len(&self) -> Result<i64, AppError> {
        Ok(self.read()?.rows.len() as i64)
    }

    fn poisoned(&self) -> AppError {
        tracing::error!(collection = self.name, "In-memory collection lock poisoned");
        AppError::internal("Store unavailable", json!({"collection": self.name}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_not_reused() {
        let collection: Collection<(RecordId, &str)> = Collection::new("things");

        let first = collection.insert_with(|id| (id, "a")).unwrap();
        assert!(collection.remove(first.0).unwrap());
        let second = collection.insert_with(|id| (id, "b")).unwrap();

        assert_eq!(first.0, 1);
        assert_eq!(second.0, 2);
        assert_eq!(collection.len().unwrap(), 1);
    }

    #[test]
    fn test_replace_unknown_id() {
        let collection: Collection<(RecordId, &str)> = Collection::new("things");
        assert!(collection.replace(9, (9, "x")).unwrap().is_none());
    }
}
