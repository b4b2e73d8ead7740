use super::entity::Entity;
use crate::error::persistence::PersistenceError;

/// Storage of entities addressed by their identifier.
///
/// Callers depend on this trait only, so the storage mechanism can be
/// swapped without touching them.
pub trait Repository<T: Entity>: Send + Sync {
    /// Fetch a copy of the entity with the given id.
    ///
    /// Fails with [`PersistenceError::NotFound`] when no entity has that id.
    fn get_by_id(&self, id: &str) -> Result<T, PersistenceError>;

    /// Add an entity. Never fails and performs no uniqueness check.
    fn add(&self, entity: T);
}
