use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mood recorded with a daily reflection
///
/// Stored as its lowercase string form; unknown strings are rejected at the
/// API boundary rather than round-tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Rough,
    Low,
    Neutral,
    Good,
    Great,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Rough => "rough",
            Mood::Low => "low",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    /// Parse a mood from its stored string form
    pub fn parse(s: &str) -> Option<Mood> {
        match s {
            "rough" => Some(Mood::Rough),
            "low" => Some(Mood::Low),
            "neutral" => Some(Mood::Neutral),
            "good" => Some(Mood::Good),
            "great" => Some(Mood::Great),
            _ => None,
        }
    }
}

/// Daily reflection row; at most one per (user, date)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reflection {
    pub id: i64,
    pub user_id: i64,
    pub entry_date: NaiveDate,
    pub reflection_text: String,
    pub win: String,
    pub improvement: String,
    pub mood: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_round_trip() {
        for mood in [Mood::Rough, Mood::Low, Mood::Neutral, Mood::Good, Mood::Great] {
            assert_eq!(Mood::parse(mood.as_str()), Some(mood));
        }
    }

    #[test]
    fn test_mood_rejects_unknown() {
        assert_eq!(Mood::parse("ecstatic"), None);
        assert_eq!(Mood::parse(""), None);
        assert_eq!(Mood::parse("Good"), None);
    }
}
