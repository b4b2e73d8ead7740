use std::sync::Arc;

use user_store::{
    domain::{entity::iam::User, service::UserService},
    infra::{controller::UserController, repository::InMemoryRepository, store::RecordStore},
};

pub type UserRepository = InMemoryRepository<User>;

#[allow(dead_code)]
pub fn user(id: &str, name: &str, password: &str) -> User {
    User::new(id.into(), name.into(), password.into())
}

pub fn empty_repository() -> UserRepository {
    InMemoryRepository::new(RecordStore::new())
}

#[allow(dead_code)]
pub fn create_service() -> UserService<UserRepository> {
    UserService::new(empty_repository())
}

#[allow(dead_code)]
pub fn create_controller() -> UserController<UserRepository> {
    UserController::new(Arc::new(create_service()))
}
