pub mod event;
pub mod user;

pub use event::{Event, NewEvent, EVENT_DATE_FORMAT};
pub use user::User;

/// Generates a storage identifier: a v4 UUID in its 32-character hex form.
pub fn new_object_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
