use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Every token carries exactly these three fields: who it was issued to and
/// the issue and expiry instants as Unix timestamps. Nothing here is
/// optional; a token missing any of them fails verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `lifetime` from now.
    ///
    /// # Arguments
    /// * `subject` - Account identifier the token is issued to
    /// * `lifetime` - How long the token stays valid
    pub fn for_subject(subject: impl ToString, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + lifetime;

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check expiry against the given timestamp.
    ///
    /// A token is valid through its expiry second: `exp == now` is not
    /// expired yet.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
