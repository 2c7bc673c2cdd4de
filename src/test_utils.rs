pub mod test_helpers {
    use crate::graphql::{build_schema, AppSchema};
    use crate::repositories::{SqliteEventRepository, SqliteUserRepository};
    use crate::services::{EventService, UserService};
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    pub const TEST_CREATOR_ID: &str = "5c4a26803d2f3c49a8108e1e";

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Create a temporary file-based SQLite database for testing
    /// Needed when several connections must see the same data
    pub async fn create_test_db_file() -> Result<(SqlitePool, NamedTempFile), sqlx::Error> {
        let temp_file = NamedTempFile::new().map_err(sqlx::Error::Io)?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| sqlx::Error::Configuration("Invalid database path".into()))?;
        let database_url = format!("sqlite://{}", db_path);

        let pool = crate::db::create_pool(&database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok((pool, temp_file))
    }

    /// Insert a test user with hashed password
    pub async fn insert_test_user(
        pool: &SqlitePool,
        id: &str,
        email: &str,
        password: &str,
    ) -> Result<(), sqlx::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                sqlx::Error::Configuration(format!("Password hashing failed: {}", e).into())
            })?
            .to_string();

        sqlx::query("INSERT INTO users (id, email, password_hash) VALUES (?, ?, ?)")
            .bind(id)
            .bind(email)
            .bind(password_hash)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count the rows of `events`, bypassing the repositories
    pub async fn count_events(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub fn create_test_services(
        pool: &SqlitePool,
        creator_id: &str,
    ) -> (Arc<EventService>, Arc<UserService>) {
        let event_repository = Arc::new(SqliteEventRepository::new(pool.clone()));
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        (
            Arc::new(EventService::new(event_repository, creator_id)),
            Arc::new(UserService::new(user_repository)),
        )
    }

    pub fn create_test_schema(pool: &SqlitePool, creator_id: &str) -> AppSchema {
        let (event_service, user_service) = create_test_services(pool, creator_id);
        build_schema(event_service, user_service)
    }
}

// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}
