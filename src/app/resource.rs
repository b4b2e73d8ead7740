pub mod iam {
    use serde::{Deserialize, Serialize};

    use crate::base::resource_id;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CreateUser<'a> {
        pub id: &'a str,
        pub name: &'a str,
        #[serde(skip_serializing)]
        pub password: &'a str,
    }

    resource_id!(CreateUser<'_>, "iam::CreateUser");

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserQuery<'a> {
        pub id: &'a str,
    }

    resource_id!(UserQuery<'_>, "iam::UserQuery");

    /// Public view of a user. The password never leaves the domain layer.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserResponse {
        pub id: String,
        pub name: String,
    }

    resource_id!(UserResponse, "iam::User");
}
