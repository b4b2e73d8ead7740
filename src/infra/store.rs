use crate::{domain::entity::Entity, error::persistence::PersistenceError};

/// Append-only collection of entities kept in insertion order.
///
/// There is no index: a lookup scans the records in the order they were
/// inserted and returns the first one with a matching id. Records are never
/// removed, and duplicate ids are accepted, the first inserted one shadowing
/// the later ones.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> RecordStore<T> {
    pub fn insert(&mut self, record: T) {
        tracing::debug!(
            resource = T::resource_id(),
            id = record.ident(),
            position = self.records.len(),
            "insert record"
        );
        self.records.push(record);
    }

    pub fn lookup(&self, id: &str) -> Result<&T, PersistenceError> {
        self.records
            .iter()
            .find(|record| record.ident() == id)
            .ok_or_else(|| PersistenceError::not_found::<T>(id))
    }
}
