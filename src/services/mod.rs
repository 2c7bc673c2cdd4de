pub mod event_service;
pub mod user_service;

pub use event_service::{CreateEventRequest, EventService, EventServiceError};
pub use user_service::{CreateUserRequest, UserService, UserServiceError};
