pub mod resource;
pub mod use_case;

pub mod transform {
    pub mod user {
        use crate::{
            app::resource::iam::{CreateUser, UserResponse},
            domain::entity::{iam::User, Entity},
        };

        impl<'a> From<CreateUser<'a>> for User {
            fn from(dto: CreateUser<'a>) -> Self {
                Self::new(dto.id.into(), dto.name.into(), dto.password.into())
            }
        }

        impl From<User> for UserResponse {
            fn from(user: User) -> Self {
                Self {
                    id: user.ident().into(),
                    name: user.name().clone(),
                }
            }
        }
    }
}
