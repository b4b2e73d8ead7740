use std::sync::Arc;

use crate::{
    app::{
        resource::iam::{CreateUser, UserQuery, UserResponse},
        use_case,
    },
    domain::{entity::iam::User, repository::Repository, service::UserService},
    error::{app::ApplicationError, response::ErrorResponse},
};

/// Outcome of a controller call: the resource, or the error rendered for the caller.
pub type Reply<T, R> = Result<T, ErrorResponse<ApplicationError<R>>>;

fn render<T, R: std::fmt::Debug>(
    operation: &'static str,
    result: Result<T, ApplicationError<R>>,
) -> Reply<T, R> {
    result.map_err(|err| {
        tracing::warn!(operation, title = err.title(), "{err}");
        err.into_response()
    })
}

pub struct UserController<R> {
    service: Arc<UserService<R>>,
}

impl<R> Clone for UserController<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R: Repository<User>> UserController<R> {
    pub fn new(service: Arc<UserService<R>>) -> Self {
        Self { service }
    }

    /// `POST /api/user`
    pub fn create<'dto>(&self, dto: CreateUser<'dto>) -> Reply<UserResponse, CreateUser<'dto>> {
        let result = use_case::iam::create_user(self.service.as_ref(), dto);
        render("create_user", result)
    }

    /// `GET /api/user/<id>`
    pub fn get_by_id<'q>(&self, id: &'q str) -> Reply<UserResponse, UserQuery<'q>> {
        let result = use_case::iam::get_user(self.service.as_ref(), UserQuery { id });
        render("get_user", result)
    }
}
