use crate::base::resource_id;

use super::{state_ref, Entity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserState {
    pub(in crate::domain) name: String,
    pub(in crate::domain) password: String,
}

/// A user as supplied by the caller.
///
/// Every field is kept verbatim: the password is neither hashed nor normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub(in crate::domain) id: String,
    pub(in crate::domain) state: UserState,
}

resource_id!(User, "iam::User");

impl Entity for User {
    fn ident(&self) -> &str {
        &self.id
    }
}

impl User {
    state_ref!(name, String);
    state_ref!(password, String);

    pub fn new(id: String, name: String, password: String) -> Self {
        Self {
            id,
            state: UserState { name, password },
        }
    }
}
