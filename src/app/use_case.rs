pub mod iam {
    use crate::{
        app::resource::iam::{CreateUser, UserQuery, UserResponse},
        domain::{entity::iam::User, repository::Repository, service::UserService},
        error::{
            app::ApplicationError,
            resource::{ValidationError, ValidationErrorKind, ValidationFieldError},
        },
    };

    mod validation {
        use super::*;
        use crate::base::ResourceID;

        pub const MAX_FIELD_LENGTH: usize = 256;

        const REDACTED: &str = "<redacted>";

        fn field_error(path: &str, value: &str, secret: bool) -> Option<ValidationFieldError> {
            let mut kinds = Vec::new();
            if value.is_empty() {
                kinds.push(ValidationErrorKind::Required);
            }
            if value.chars().count() > MAX_FIELD_LENGTH {
                kinds.push(ValidationErrorKind::MaxLength(MAX_FIELD_LENGTH as u64));
            }

            if kinds.is_empty() {
                return None;
            }

            let displayed = if secret && !value.is_empty() {
                REDACTED.into()
            } else {
                value.into()
            };
            Some(ValidationFieldError::new(
                String::resource_id(),
                displayed,
                path.into(),
                kinds,
            ))
        }

        pub fn create_user<'dto>(
            dto: &CreateUser<'dto>,
        ) -> Result<(), ValidationError<CreateUser<'dto>>> {
            let errors: Vec<_> = [
                field_error("/id", dto.id, false),
                field_error("/name", dto.name, false),
                field_error("/password", dto.password, true),
            ]
            .into_iter()
            .flatten()
            .collect();

            if !errors.is_empty() {
                return Err(ValidationError::from_resource(dto.clone(), errors));
            }

            Ok(())
        }
    }

    pub use validation::MAX_FIELD_LENGTH;

    /// Register a new user.
    ///
    /// Identifiers are not checked for uniqueness: a user added with an id
    /// that already exists stays hidden behind the first one.
    pub fn create_user<'dto, R: Repository<User>>(
        service: &UserService<R>,
        dto: CreateUser<'dto>,
    ) -> Result<UserResponse, ApplicationError<CreateUser<'dto>>> {
        validation::create_user(&dto)?;

        let user = User::from(dto);
        service.register_user(user.clone());

        Ok(user.into())
    }

    pub fn get_user<'q, R: Repository<User>>(
        service: &UserService<R>,
        query: UserQuery<'q>,
    ) -> Result<UserResponse, ApplicationError<UserQuery<'q>>> {
        let user = service.find_user(query.id)?;
        Ok(user.into())
    }
}
