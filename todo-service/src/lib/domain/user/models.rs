use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::DisplayNameError;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::LoginPasswordError;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::UserIdError;

/// A registered account.
///
/// Carries the password hash, never the plaintext. The hash is a PHC string
/// that embeds its own salt and cost parameters.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub name: DisplayName,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Unique identifier for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - Input is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value object.
///
/// Validated against RFC 5322 syntax and lowercased on construction, so
/// lookups and the storage uniqueness constraint are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalize a raw email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Input is not a syntactically valid address
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| Self(email.to_lowercase()))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value object, 3 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 100;

    /// Validate a raw display name.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 3 characters
    /// * `TooLong` - More than 100 characters
    pub fn new(name: String) -> Result<Self, DisplayNameError> {
        let length = name.chars().count();

        if length < Self::MIN_LENGTH {
            Err(DisplayNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(DisplayNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext registration password that satisfied the strength policy.
///
/// Construction checks every rule and reports the full set of violations, so
/// a caller can surface them all at once instead of one per attempt. The
/// value exists only while a registration request is processed and redacts
/// itself from `Debug` output.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 24;

    /// Validate a raw password against the strength policy.
    ///
    /// # Errors
    /// One `PasswordPolicyError` per broken rule, all collected.
    pub fn new(password: String) -> Result<Self, Vec<PasswordPolicyError>> {
        let violations = Self::violations(&password);

        if violations.is_empty() {
            Ok(Self(password))
        } else {
            Err(violations)
        }
    }

    /// Check the strength policy, returning one entry per broken rule.
    pub fn violations(password: &str) -> Vec<PasswordPolicyError> {
        let mut violations = Vec::new();

        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            violations.push(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        } else if length > Self::MAX_LENGTH {
            violations.push(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            violations.push(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            violations.push(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push(PasswordPolicyError::MissingDigit);
        }
        // Special means anything outside [A-Za-z0-9]; underscore counts
        if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            violations.push(PasswordPolicyError::MissingSpecial);
        }

        violations
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new account. Fields are already validated; assembly
/// cannot fail.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub email: EmailAddress,
    pub name: DisplayName,
    pub password: Password,
}

impl RegisterUserCommand {
    pub fn new(email: EmailAddress, name: DisplayName, password: Password) -> Self {
        Self {
            email,
            name,
            password,
        }
    }
}

/// Email and plaintext password submitted at login.
///
/// Transient: lives only while a signin request is processed, is never
/// persisted, and redacts the password from `Debug` output. Only shape is
/// checked at login; the strength policy applies at registration.
#[derive(Clone)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: String,
}

impl Credentials {
    const PASSWORD_MIN_LENGTH: usize = 6;
    const PASSWORD_MAX_LENGTH: usize = 24;

    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }

    /// Length-only check applied to the login password.
    ///
    /// Bounds are 6 to 24 characters. The registration strength policy is
    /// not applied here; a submitted password only has to be plausible
    /// enough to hand to the verifier.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 6 characters
    /// * `TooLong` - More than 24 characters
    pub fn password_shape(password: &str) -> Result<(), LoginPasswordError> {
        let length = password.chars().count();

        if length < Self::PASSWORD_MIN_LENGTH {
            Err(LoginPasswordError::TooShort {
                min: Self::PASSWORD_MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::PASSWORD_MAX_LENGTH {
            Err(LoginPasswordError::TooLong {
                max: Self::PASSWORD_MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized_to_lowercase() {
        let email = EmailAddress::new("Ada.Lovelace@Example.COM".to_string()).unwrap();
        assert_eq!(email.as_str(), "ada.lovelace@example.com");
    }

    #[test]
    fn test_email_rejects_invalid_format() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("missing@domain@twice".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_display_name_bounds() {
        assert!(DisplayName::new("Al".to_string()).is_err());
        assert!(DisplayName::new("Ada".to_string()).is_ok());
        assert!(DisplayName::new("a".repeat(100)).is_ok());
        assert!(DisplayName::new("a".repeat(101)).is_err());
    }

    #[test]
    fn test_password_accepts_strong() {
        assert!(Password::new("Str0ng!Pass".to_string()).is_ok());
        // Underscore counts as the special character
        assert!(Password::new("Str0ng_Pass".to_string()).is_ok());
    }

    #[test]
    fn test_password_reports_each_missing_class() {
        let cases = [
            ("STR0NG!PASS", PasswordPolicyError::MissingLowercase),
            ("str0ng!pass", PasswordPolicyError::MissingUppercase),
            ("Strong!Pass", PasswordPolicyError::MissingDigit),
            ("Str0ngPass", PasswordPolicyError::MissingSpecial),
        ];

        for (password, expected) in cases {
            let violations = Password::violations(password);
            assert_eq!(violations, vec![expected], "password: {}", password);
        }
    }

    #[test]
    fn test_password_length_bounds() {
        let violations = Password::violations("S0r!t");
        assert!(violations.contains(&PasswordPolicyError::TooShort { min: 8, actual: 5 }));

        let long = format!("Aa1!{}", "x".repeat(21));
        let violations = Password::violations(&long);
        assert!(violations.contains(&PasswordPolicyError::TooLong {
            max: 24,
            actual: 25
        }));

        assert!(Password::new("Aa1!aaaa".to_string()).is_ok()); // exactly 8
        assert!(Password::new(format!("Aa1!{}", "x".repeat(20))).is_ok()); // exactly 24
    }

    #[test]
    fn test_password_collects_multiple_violations() {
        // Too short, no uppercase, no digit, no special
        let violations = Password::violations("abc");

        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&PasswordPolicyError::TooShort { min: 8, actual: 3 }));
        assert!(violations.contains(&PasswordPolicyError::MissingUppercase));
        assert!(violations.contains(&PasswordPolicyError::MissingDigit));
        assert!(violations.contains(&PasswordPolicyError::MissingSpecial));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("Str0ng!Pass".to_string()).unwrap();
        let output = format!("{:?}", password);

        assert!(!output.contains("Str0ng!Pass"));
        assert!(output.contains("redacted"));
    }

    #[test]
    fn test_login_password_shape() {
        assert!(Credentials::password_shape("abc").is_err());
        assert!(Credentials::password_shape("abcdef").is_ok()); // exactly 6
        assert!(Credentials::password_shape(&"x".repeat(24)).is_ok());
        assert!(Credentials::password_shape(&"x".repeat(25)).is_err());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::new(
            EmailAddress::new("ada@example.com".to_string()).unwrap(),
            "Str0ng!Pass".to_string(),
        );
        let output = format!("{:?}", credentials);

        assert!(!output.contains("Str0ng!Pass"));
        assert!(output.contains("ada@example.com"));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
