use eventhub::{
    repositories::user_repository::SqliteUserRepository,
    services::user_service::{CreateUserRequest, UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn request(email: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        id: None,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_create_user_success() {
    // Create isolated test database
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let user = service
        .create_user(request("test@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.id.len(), 32);
    assert_ne!(user.password_hash, "password123");
    assert!(service.verify_password("password123", &user.password_hash));

    let found = service.find_user_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "test@example.com");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    service
        .create_user(request("a@x.com", "password123"))
        .await
        .unwrap();

    let result = service.create_user(request("a@x.com", "password456")).await;
    assert!(matches!(result, Err(UserServiceError::EmailTaken)));
    assert_eq!(result.unwrap_err().to_string(), "User exists already.");
}

#[tokio::test]
async fn test_concurrent_duplicate_emails_store_one_user() {
    let (pool, _file) = test_helpers::create_test_db_file().await.unwrap();
    let service = Arc::new(UserService::new(Arc::new(SqliteUserRepository::new(
        pool.clone(),
    ))));

    let first = {
        let service = service.clone();
        tokio::spawn(async move { service.create_user(request("race@x.com", "one")).await })
    };
    let second = {
        let service = service.clone();
        tokio::spawn(async move { service.create_user(request("race@x.com", "two")).await })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(UserServiceError::EmailTaken)))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 1);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind("race@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_find_user_by_email_missing() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool)));

    let result = service.find_user_by_email("nobody@x.com").await.unwrap();
    assert!(result.is_none());
}
