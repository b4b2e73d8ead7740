pub mod app {
    use derive_more::Display;
    use serde::Serialize;

    use super::{
        persistence::PersistenceError,
        resource::ValidationError,
        response::ErrorResponse,
    };

    #[derive(Debug, Display, Serialize)]
    pub enum ApplicationError<R> {
        Validation(ValidationError<R>),
        Persistence(PersistenceError),
    }

    impl<R: std::fmt::Debug> std::error::Error for ApplicationError<R> {}

    impl<R> From<ValidationError<R>> for ApplicationError<R> {
        fn from(err: ValidationError<R>) -> Self {
            Self::Validation(err)
        }
    }

    impl<R> From<PersistenceError> for ApplicationError<R> {
        fn from(err: PersistenceError) -> Self {
            Self::Persistence(err)
        }
    }

    impl<R> ApplicationError<R> {
        pub fn title(&self) -> &'static str {
            match self {
                ApplicationError::Validation(_) => "bad_request",
                ApplicationError::Persistence(PersistenceError::NotFound { .. }) => "not_found",
            }
        }

        pub fn into_response(self) -> ErrorResponse<Self> {
            let title = self.title();
            ErrorResponse {
                title: title.into(),
                message: self.to_string(),
                error: self,
            }
        }
    }
}

pub mod persistence {
    use derive_more::Display;
    use serde::Serialize;

    use crate::base::ResourceID;

    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
    pub enum PersistenceError {
        #[display(fmt = "{resource_type} of id {id:?} not found")]
        NotFound {
            resource_type: &'static str,
            id: String,
        },
    }

    impl std::error::Error for PersistenceError {}

    impl PersistenceError {
        pub fn not_found<R: ResourceID>(id: &str) -> Self {
            Self::NotFound {
                resource_type: R::resource_id(),
                id: id.into(),
            }
        }
    }
}

pub mod resource {
    use derive_more::{Display, Error};
    use serde::Serialize;

    use crate::base::ResourceID;

    #[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize)]
    pub enum ValidationErrorKind {
        /// When a required property is missing or empty.
        Required,
        /// Maximum inclusive string length.
        MaxLength(u64),
    }

    impl std::error::Error for ValidationErrorKind {}

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct ValidationError<R> {
        /// Resource value
        pub resource: R,
        /// Name of the resource
        pub resource_type: &'static str,
        /// Invalid resource fields
        pub fields: Vec<ValidationFieldError>,
    }

    impl<R> ValidationError<R> {
        pub fn from_resource(resource: R, fields: Vec<ValidationFieldError>) -> Self
        where
            R: ResourceID,
        {
            Self {
                resource,
                resource_type: R::resource_id(),
                fields,
            }
        }
    }

    impl<R: std::fmt::Debug> std::error::Error for ValidationError<R> {}

    impl<R> std::fmt::Display for ValidationError<R> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_fmt(format_args!(
                "Invalid resource {}, fields {:?}",
                self.resource_type, self.fields
            ))
        }
    }

    #[derive(Debug, Display, Error, Clone, PartialEq, Eq, Hash, Serialize)]
    #[display(fmt = "{path}: {value:?}, {kinds:?}")]
    pub struct ValidationFieldError {
        /// Resource field path with invalid value
        pub path: String,
        /// Displayed invalid value
        pub value: String,
        /// Value type id
        pub type_id: &'static str,
        /// Kinds of validation errors
        pub kinds: Vec<ValidationErrorKind>,
    }

    impl ValidationFieldError {
        pub fn new(
            type_id: &'static str,
            value: String,
            path: String,
            kinds: Vec<ValidationErrorKind>,
        ) -> Self {
            Self {
                path,
                type_id,
                value,
                kinds,
            }
        }
    }
}

pub mod response {
    use derive_more::Display;
    use serde::Serialize;

    #[derive(Debug, Display, Clone, Serialize)]
    #[display(fmt = "Response error: {title}, {message}")]
    pub struct ErrorResponse<T> {
        pub title: String,
        pub message: String,
        pub error: T,
    }
}
