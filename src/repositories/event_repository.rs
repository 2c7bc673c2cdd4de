use crate::models::event::{Event, NewEvent};
use crate::models::new_object_id;
use crate::repositories::user_repository::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait EventRepository: Send + Sync {
    /// Inserts the event and records it on its creator in one transaction.
    ///
    /// Returns `RepositoryError::NotFound` when the creator does not exist,
    /// in which case nothing is written.
    async fn create_event(&self, event: &NewEvent) -> RepositoryResult<Event>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Event>>;
    async fn list_events(&self) -> RepositoryResult<Vec<Event>>;
    async fn list_by_creator(&self, user_id: &str) -> RepositoryResult<Vec<Event>>;
}

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create_event(&self, event: &NewEvent) -> RepositoryResult<Event> {
        let id = new_object_id();

        // The insert comes first so the write lock is taken before any read.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, price, date, creator)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.price)
        .bind(event.date)
        .bind(&event.creator)
        .execute(&mut *tx)
        .await?;

        let creator: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
            .bind(&event.creator)
            .fetch_optional(&mut *tx)
            .await?;

        if creator.is_none() {
            tx.rollback().await?;
            return Err(RepositoryError::NotFound);
        }

        sqlx::query("INSERT INTO user_created_events (user_id, event_id) VALUES (?, ?)")
            .bind(&event.creator)
            .bind(&id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(event.clone().into_event(id))
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, price, date, creator
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, price, date, creator
            FROM events
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn list_by_creator(&self, user_id: &str) -> RepositoryResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.title, e.description, e.price, e.date, e.creator
            FROM user_created_events uce
            JOIN events e ON e.id = uce.event_id
            WHERE uce.user_id = ?
            ORDER BY e.rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
