//! GraphQL surface of the service.
//!
//! The schema mirrors the public contract:
//!
//! ```graphql
//! type RootQuery    { events: [Event!]! }
//! type RootMutation {
//!   createEvent(eventInput: EventInput): Event
//!   createUser(userInput: UserInput): User
//! }
//! ```
//!
//! Services are injected as schema data, so resolvers never reach for
//! globals. `Event.creator` and `User.createdEvents` are resolved lazily.

pub mod errors;
pub mod resolvers;
pub mod types;

pub use resolvers::{RootMutation, RootQuery};
pub use types::{EventInput, EventType, UserInput, UserType};

use crate::services::{EventService, UserService};
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

pub type AppSchema = Schema<RootQuery, RootMutation, EmptySubscription>;

pub fn build_schema(event_service: Arc<EventService>, user_service: Arc<UserService>) -> AppSchema {
    Schema::build(RootQuery, RootMutation, EmptySubscription)
        .data(event_service)
        .data(user_service)
        .finish()
}
