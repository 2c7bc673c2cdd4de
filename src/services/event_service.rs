use crate::models::event::{Event, NewEvent};
use crate::repositories::event_repository::EventRepository;
use crate::repositories::user_repository::RepositoryError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum EventServiceError {
    #[error("User not found.")]
    CreatorNotFound,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: String,
}

pub struct EventService {
    repository: Arc<dyn EventRepository>,
    creator_id: String,
}

impl EventService {
    /// `creator_id` is the user every new event is attributed to.
    pub fn new(repository: Arc<dyn EventRepository>, creator_id: impl Into<String>) -> Self {
        Self {
            repository,
            creator_id: creator_id.into(),
        }
    }

    pub fn creator_id(&self) -> &str {
        &self.creator_id
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, EventServiceError> {
        Ok(self.repository.list_events().await?)
    }

    pub async fn find_event_by_id(&self, id: &str) -> Result<Option<Event>, EventServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn list_events_by_creator(
        &self,
        user_id: &str,
    ) -> Result<Vec<Event>, EventServiceError> {
        Ok(self.repository.list_by_creator(user_id).await?)
    }

    pub async fn create_event(
        &self,
        request: CreateEventRequest,
    ) -> Result<Event, EventServiceError> {
        let date = parse_event_date(&request.date)
            .ok_or_else(|| EventServiceError::InvalidDate(request.date.clone()))?;

        let new_event = NewEvent {
            title: request.title,
            description: request.description,
            price: request.price,
            date,
            creator: self.creator_id.clone(),
        };

        match self.repository.create_event(&new_event).await {
            Ok(event) => {
                tracing::debug!(event_id = %event.id, creator = %event.creator, "created event");
                Ok(event)
            }
            Err(RepositoryError::NotFound) => {
                tracing::warn!(creator = %self.creator_id, "event creator does not exist");
                Err(EventServiceError::CreatorNotFound)
            }
            Err(e) => Err(EventServiceError::RepositoryError(e)),
        }
    }
}

/// Reads an event date. Offsets are honoured; inputs without one are UTC.
pub fn parse_event_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
