pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use config::AppConfig;
use graphql::AppSchema;
use repositories::{SqliteEventRepository, SqliteUserRepository};
use services::{EventService, UserService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub graphiql: bool,
    pub production: bool,
}

impl AppState {
    /// Wires repositories and services over one shared pool.
    pub fn new(pool: sqlx::SqlitePool, config: &AppConfig) -> Self {
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let event_repository = Arc::new(SqliteEventRepository::new(pool));

        let user_service = Arc::new(UserService::new(user_repository));
        let event_service = Arc::new(EventService::new(
            event_repository,
            config.event_creator_id.clone(),
        ));

        AppState {
            schema: graphql::build_schema(event_service, user_service),
            graphiql: config.graphiql,
            production: config.is_production(),
        }
    }
}
