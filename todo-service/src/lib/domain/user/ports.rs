use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;

/// Port for account and session operations.
///
/// Implemented by the domain service, consumed by the HTTP layer.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Validated registration data
    ///
    /// # Returns
    /// The created account
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - An account with this email is already registered
    /// * `StoreUnavailable` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// Unknown email and wrong password produce the same `InvalidCredentials`
    /// outcome; the caller cannot tell which one happened.
    ///
    /// # Arguments
    /// * `credentials` - Submitted email and password
    ///
    /// # Returns
    /// A signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password wrong
    /// * `StoreUnavailable` - Store operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<String, UserError>;
}

/// Persistence port for accounts.
///
/// Deliberately narrow: the flows above only ever look an account up by
/// email or insert a new one, so that is all the store has to offer.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Find an account by its (normalized) email address.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Persist a new account in a single atomic operation.
    ///
    /// The store itself enforces email uniqueness and reports a duplicate as
    /// `EmailAlreadyExists`, closing the race the service-level probe leaves
    /// open.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Another account with this email was inserted first
    /// * `StoreUnavailable` - Store operation failed
    async fn insert(&self, user: User) -> Result<User, UserError>;
}
