use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RATING, MAX_TITLE_LEN, MIN_RATING};

/// Kind of logged media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Book,
    Movie,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Book => "book",
            MediaKind::Movie => "movie",
        }
    }

    pub fn parse(s: &str) -> Option<MediaKind> {
        match s {
            "book" => Some(MediaKind::Book),
            "movie" => Some(MediaKind::Movie),
            _ => None,
        }
    }
}

/// A logged book or movie with a star rating and optional review
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MediaLog {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub kind: String,
    pub rating: i64,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MediaLog {
    /// Validate a title: non-empty after trimming, length-bounded
    pub fn validate_title(title: &str) -> bool {
        !title.trim().is_empty() && title.len() <= MAX_TITLE_LEN
    }

    /// Validate a star rating against the 1-5 range
    pub fn validate_rating(rating: i64) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    /// Star display string, e.g. 3 -> "★★★☆☆"
    pub fn stars(rating: i64) -> String {
        let filled = rating.clamp(0, MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rating() {
        assert!(MediaLog::validate_rating(1));
        assert!(MediaLog::validate_rating(5));

        assert!(!MediaLog::validate_rating(0));
        assert!(!MediaLog::validate_rating(6));
        assert!(!MediaLog::validate_rating(-3));
    }

    #[test]
    fn test_validate_title() {
        assert!(MediaLog::validate_title("Dune"));
        assert!(!MediaLog::validate_title(""));
        assert!(!MediaLog::validate_title("  "));
        assert!(!MediaLog::validate_title(&"t".repeat(MAX_TITLE_LEN + 1)));
    }

    #[test]
    fn test_stars() {
        assert_eq!(MediaLog::stars(3), "★★★☆☆");
        assert_eq!(MediaLog::stars(5), "★★★★★");
        assert_eq!(MediaLog::stars(0), "☆☆☆☆☆");
        // Out-of-range values are clamped for display
        assert_eq!(MediaLog::stars(9), "★★★★★");
        assert_eq!(MediaLog::stars(-2), "☆☆☆☆☆");
    }

    #[test]
    fn test_media_kind_parse() {
        assert_eq!(MediaKind::parse("book"), Some(MediaKind::Book));
        assert_eq!(MediaKind::parse("movie"), Some(MediaKind::Movie));
        assert_eq!(MediaKind::parse("podcast"), None);
    }
}
