use super::{entity::iam::User, repository::Repository};
use crate::error::persistence::PersistenceError;

pub struct UserService<R> {
    repository: R,
}

impl<R: Repository<User>> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn find_user(&self, id: &str) -> Result<User, PersistenceError> {
        tracing::trace!(id, "find user");
        self.repository.get_by_id(id)
    }

    pub fn register_user(&self, user: User) {
        tracing::trace!(id = user.id.as_str(), "register user");
        self.repository.add(user);
    }
}
