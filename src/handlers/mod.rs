pub mod graphql_handlers;

pub use graphql_handlers::{graphiql_handler, graphql_handler, GRAPHQL_PATH};
