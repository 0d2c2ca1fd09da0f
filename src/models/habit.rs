use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_LABEL_LEN;

/// A single logged block of time spent on a habit
///
/// Habits are plain label strings rather than a normalized table; two entries
/// with the same label belong to the same habit as far as display goes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HabitEntry {
    pub id: i64,
    pub user_id: i64,
    pub label: String,
    pub entry_date: NaiveDate,
    pub hours: f64,
    pub note: Option<String>,
    /// Optional short decoration shown next to the entry
    pub sticker: Option<String>,
}

impl HabitEntry {
    /// Validate a habit label: non-empty after trimming, length-bounded
    pub fn validate_label(label: &str) -> bool {
        !label.trim().is_empty() && label.len() <= MAX_LABEL_LEN
    }

    /// Validate an hours value: finite and non-negative (zero is allowed)
    pub fn validate_hours(hours: f64) -> bool {
        hours.is_finite() && hours >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert!(HabitEntry::validate_label("reading"));

        // Empty or whitespace-only
        assert!(!HabitEntry::validate_label(""));
        assert!(!HabitEntry::validate_label("   "));

        // Too long
        let long = "x".repeat(MAX_LABEL_LEN + 1);
        assert!(!HabitEntry::validate_label(&long));
    }

    #[test]
    fn test_validate_hours() {
        assert!(HabitEntry::validate_hours(1.5));
        assert!(HabitEntry::validate_hours(0.0));

        assert!(!HabitEntry::validate_hours(-1.0));
        assert!(!HabitEntry::validate_hours(f64::NAN));
        assert!(!HabitEntry::validate_hours(f64::INFINITY));
    }
}
