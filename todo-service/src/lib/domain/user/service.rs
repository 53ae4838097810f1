use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Account and session orchestrator.
///
/// Composes the credential store, password hashing, and token issuance into
/// the register and authenticate flows. Password work is CPU-bound and runs
/// on the blocking pool, so hashing one request never stalls the others.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // The probe catches the common duplicate early with a cheap lookup;
        // the store's unique constraint covers concurrent registrations.
        if let Some(existing) = self.repository.find_by_email(&command.email).await? {
            return Err(UserError::EmailAlreadyExists(
                existing.email.as_str().to_string(),
            ));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.as_str()))
                .await
                .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            email: command.email,
            name: command.name,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.insert(user).await?;

        tracing::info!(user_id = %created.id, "Account registered");

        Ok(created)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<String, UserError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            // Same outcome as a wrong password below
            .ok_or(UserError::InvalidCredentials)?;

        let authenticator = Arc::clone(&self.authenticator);
        let subject = user.id.to_string();
        let stored_hash = user.password_hash;
        let password = credentials.password;
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Password verification task failed: {}", e)))?;

        match outcome {
            Ok(result) => {
                tracing::debug!(user_id = %user.id, "Session opened");
                Ok(result.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => Err(UserError::InvalidCredentials),
            Err(AuthenticationError::PasswordError(e)) => Err(UserError::Password(e)),
            Err(AuthenticationError::JwtError(e)) => {
                Err(UserError::Unknown(format!("Token issuance failed: {}", e)))
            }
        }
    }
}
