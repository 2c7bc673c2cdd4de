use crate::graphql::errors::{coded_error, null_with_error, CODE_BAD_USER_INPUT};
use crate::graphql::types::{EventInput, EventType, UserInput, UserType};
use crate::services::{CreateEventRequest, CreateUserRequest, EventService, UserService};
use async_graphql::{Context, ErrorExtensions, Object, Result};
use std::sync::Arc;

pub struct RootQuery;

#[Object]
impl RootQuery {
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<EventType>> {
        let service = ctx.data::<Arc<EventService>>()?;
        let events = service.list_events().await.map_err(|e| e.extend())?;
        Ok(events.into_iter().map(EventType).collect())
    }
}

pub struct RootMutation;

#[Object]
impl RootMutation {
    async fn create_event(
        &self,
        ctx: &Context<'_>,
        event_input: Option<EventInput>,
    ) -> Result<Option<EventType>> {
        let Some(input) = event_input else {
            return Ok(null_with_error(
                ctx,
                coded_error("eventInput is required", CODE_BAD_USER_INPUT),
            ));
        };
        let service = ctx.data::<Arc<EventService>>()?;

        let result = service
            .create_event(CreateEventRequest {
                title: input.title,
                description: input.description,
                price: input.price,
                date: input.date,
            })
            .await;

        match result {
            Ok(event) => Ok(Some(EventType(event))),
            Err(e) => Ok(null_with_error(ctx, e.extend())),
        }
    }

    async fn create_user(
        &self,
        ctx: &Context<'_>,
        user_input: Option<UserInput>,
    ) -> Result<Option<UserType>> {
        let Some(input) = user_input else {
            return Ok(null_with_error(
                ctx,
                coded_error("userInput is required", CODE_BAD_USER_INPUT),
            ));
        };
        let service = ctx.data::<Arc<UserService>>()?;

        let result = service
            .create_user(CreateUserRequest {
                id: None,
                email: input.email,
                password: input.password,
            })
            .await;

        match result {
            Ok(user) => Ok(Some(UserType(user))),
            Err(e) => Ok(null_with_error(ctx, e.extend())),
        }
    }
}
