use crate::services::{EventServiceError, UserServiceError};
use async_graphql::{Context, Error, ErrorExtensions};

pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_USER_EXISTS: &str = "USER_EXISTS";
pub const CODE_BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const CODE_INTERNAL: &str = "INTERNAL_SERVER_ERROR";

pub fn coded_error(message: impl Into<String>, code: &'static str) -> Error {
    let message: String = message.into();
    Error::new(message).extend_with(|_, ext| ext.set("code", code))
}

/// Records `error` against the current field and resolves that field to
/// null, so sibling fields stay in `data`.
pub fn null_with_error<T>(ctx: &Context<'_>, error: Error) -> Option<T> {
    let server_error = ctx.set_error_path(error.into_server_error(ctx.item.pos));
    ctx.add_error(server_error);
    None
}

fn internal_error(source: &dyn std::fmt::Display) -> Error {
    tracing::error!(error = %source, "resolver failed");
    coded_error("Internal server error", CODE_INTERNAL)
}

impl ErrorExtensions for EventServiceError {
    fn extend(&self) -> Error {
        match self {
            EventServiceError::CreatorNotFound => coded_error(self.to_string(), CODE_USER_NOT_FOUND),
            EventServiceError::InvalidDate(_) => coded_error(self.to_string(), CODE_BAD_USER_INPUT),
            EventServiceError::RepositoryError(e) => internal_error(e),
        }
    }
}

impl ErrorExtensions for UserServiceError {
    fn extend(&self) -> Error {
        match self {
            UserServiceError::EmailTaken => coded_error(self.to_string(), CODE_USER_EXISTS),
            UserServiceError::HashingError(_) | UserServiceError::RepositoryError(_) => {
                internal_error(self)
            }
        }
    }
}
