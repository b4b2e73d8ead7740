use parking_lot::RwLock;

use super::store::RecordStore;
use crate::{
    domain::{entity::Entity, repository::Repository},
    error::persistence::PersistenceError,
};

/// [`Repository`] backed by a [`RecordStore`] owned behind a read/write lock.
pub struct InMemoryRepository<T> {
    store: RwLock<RecordStore<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(store: RecordStore<T>) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync,
{
    fn get_by_id(&self, id: &str) -> Result<T, PersistenceError> {
        self.store.read().lookup(id).cloned()
    }

    fn add(&self, entity: T) {
        self.store.write().insert(entity);
    }
}
