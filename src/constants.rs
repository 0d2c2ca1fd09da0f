/// Minimum allowed star rating for media logs
pub const MIN_RATING: i64 = 1;

/// Maximum allowed star rating for media logs
pub const MAX_RATING: i64 = 5;

/// Maximum username length in characters
pub const MAX_USERNAME_LEN: usize = 64;

/// Maximum habit label length in characters
pub const MAX_LABEL_LEN: usize = 100;

/// Maximum media title length in characters
pub const MAX_TITLE_LEN: usize = 200;

/// Number of random bytes in a session token id (128 bits)
pub const SESSION_TOKEN_BYTES: usize = 16;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for an empty or overlong username
pub const ERR_INVALID_USERNAME: &str = "Username must be 1-64 characters";

/// Error message for an empty password
pub const ERR_EMPTY_PASSWORD: &str = "Password must not be empty";

/// Error message for an empty or overlong habit label
pub const ERR_INVALID_LABEL: &str = "Habit label must be 1-100 characters";

/// Error message for a negative hours value
pub const ERR_NEGATIVE_HOURS: &str = "Hours must not be negative";

/// Error message for a rating outside the allowed range
pub const ERR_INVALID_RATING: &str = "Rating must be between 1 and 5 stars";

/// Error message for an unrecognized mood value
pub const ERR_INVALID_MOOD: &str = "Unrecognized mood value";
