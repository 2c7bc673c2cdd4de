use crate::models::new_object_id;
use crate::models::user::User;
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString},
    Argon2, PasswordVerifier,
};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("User exists already.")]
    EmailTaken,
    #[error("Password hashing failed: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct CreateUserRequest {
    /// Explicit identifier, generated when absent.
    pub id: Option<String>,
    pub email: String,
    pub password: String,
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Hashes the password and stores the user. Email uniqueness is
    /// enforced by the store, so concurrent duplicates yield `EmailTaken`.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError> {
        let password_hash = hash_password(request.password).await?;
        let id = request.id.unwrap_or_else(new_object_id);

        match self
            .repository
            .create_user(&id, &request.email, &password_hash)
            .await
        {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "created user");
                Ok(user)
            }
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::EmailTaken),
            Err(e) => Err(UserServiceError::RepositoryError(e)),
        }
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_email(email).await?)
    }

    pub async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}

/// Hashes on tokio's blocking pool, off the request's worker thread.
async fn hash_password(password: String) -> Result<String, UserServiceError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserServiceError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| UserServiceError::HashingError(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;
    use mockall::predicate::*;

    fn stored_user(id: &str, email: &str, password_hash: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create_user()
            .with(always(), eq("a@x.com"), always())
            .times(1)
            .returning(|id, email, hash| {
                let user = stored_user(id, email, hash);
                Box::pin(async move { Ok(user) })
            });

        let service = UserService::new(Arc::new(mock_repo));

        let request = CreateUserRequest {
            id: None,
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
        };

        let user = service
            .create_user(request)
            .await
            .expect("Expected Ok result");
        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password_hash, "secret");
        assert!(user.password_hash.starts_with("$argon2"));
        assert!(service.verify_password("secret", &user.password_hash));
        assert!(!service.verify_password("wrong", &user.password_hash));
    }

    #[tokio::test]
    async fn test_create_user_keeps_explicit_id() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create_user()
            .with(eq("5c4a26803d2f3c49a8108e1e"), always(), always())
            .times(1)
            .returning(|id, email, hash| {
                let user = stored_user(id, email, hash);
                Box::pin(async move { Ok(user) })
            });

        let service = UserService::new(Arc::new(mock_repo));

        let request = CreateUserRequest {
            id: Some("5c4a26803d2f3c49a8108e1e".to_string()),
            email: "creator@x.com".to_string(),
            password: "pw".to_string(),
        };

        let user = service.create_user(request).await.unwrap();
        assert_eq!(user.id, "5c4a26803d2f3c49a8108e1e");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_maps_to_email_taken() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create_user()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Err(RepositoryError::AlreadyExists) }));

        let service = UserService::new(Arc::new(mock_repo));

        let request = CreateUserRequest {
            id: None,
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
        };

        let result = service.create_user(request).await;
        assert!(matches!(result, Err(UserServiceError::EmailTaken)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_hash_password_yields_to_other_tasks() {
        let hashing = hash_password("secret".to_string());
        tokio::pin!(hashing);

        let sibling = async {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
        };

        tokio::select! {
            biased;
            _ = &mut hashing => panic!("hashing finished inside a single poll"),
            _ = sibling => {}
        }

        let hash = hashing.await.expect("hash");
        let service = UserService::new(Arc::new(MockUserRepository::new()));
        assert!(service.verify_password("secret", &hash));
    }

    #[test]
    fn test_verify_password_rejects_malformed_hash() {
        let service = UserService::new(Arc::new(MockUserRepository::new()));
        assert!(!service.verify_password("secret", "not-a-phc-string"));
    }
}
