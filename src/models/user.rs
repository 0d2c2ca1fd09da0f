use chrono::{DateTime, Utc};

use crate::constants::MAX_USERNAME_LEN;

/// User account row
///
/// The password hash is a PHC-format Argon2id string with an embedded salt.
/// It never leaves the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Validate a username: non-empty, length-bounded, no surrounding whitespace
    pub fn validate_username(username: &str) -> bool {
        !username.is_empty()
            && username.len() <= MAX_USERNAME_LEN
            && username.trim() == username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(User::validate_username("alice"));
        assert!(User::validate_username("a"));

        // Empty
        assert!(!User::validate_username(""));

        // Too long
        let long = "a".repeat(MAX_USERNAME_LEN + 1);
        assert!(!User::validate_username(&long));

        // Surrounding whitespace
        assert!(!User::validate_username(" alice"));
        assert!(!User::validate_username("alice "));
    }
}
