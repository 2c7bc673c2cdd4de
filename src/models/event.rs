use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Output layout for event dates, millisecond precision in UTC.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub creator: String,
}

impl Event {
    pub fn formatted_date(&self) -> String {
        self.date.format(EVENT_DATE_FORMAT).to_string()
    }
}

/// Fields of an event that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub creator: String,
}

impl NewEvent {
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            date: self.date,
            creator: self.creator,
        }
    }
}
