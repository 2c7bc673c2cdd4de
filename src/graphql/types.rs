use crate::graphql::errors::null_with_error;
use crate::models::{Event, User};
use crate::services::{EventService, UserService};
use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, ID};
use std::sync::Arc;

pub struct EventType(pub Event);

#[Object(name = "Event")]
impl EventType {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn price(&self) -> f64 {
        self.0.price
    }

    async fn date(&self) -> String {
        self.0.formatted_date()
    }

    async fn creator(&self, ctx: &Context<'_>) -> Result<Option<UserType>> {
        let users = ctx.data::<Arc<UserService>>()?;
        match users.find_user_by_id(&self.0.creator).await {
            Ok(user) => Ok(user.map(UserType)),
            Err(e) => Ok(null_with_error(ctx, e.extend())),
        }
    }
}

pub struct UserType(pub User);

#[Object(name = "User")]
impl UserType {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    /// Always null; the stored hash is never exposed.
    async fn password(&self) -> Option<String> {
        None
    }

    async fn created_events(&self, ctx: &Context<'_>) -> Result<Vec<EventType>> {
        let events = ctx.data::<Arc<EventService>>()?;
        let created = events
            .list_events_by_creator(&self.0.id)
            .await
            .map_err(|e| e.extend())?;
        Ok(created.into_iter().map(EventType).collect())
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct UserInput {
    pub email: String,
    pub password: String,
}
