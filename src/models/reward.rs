use serde::{Deserialize, Serialize};

/// What a reward's requirement counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementType {
    /// Total habit hours logged
    Hours,
    /// Consecutive days with at least one entry
    Streak,
}

impl RequirementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementType::Hours => "hours",
            RequirementType::Streak => "streak",
        }
    }

    pub fn parse(s: &str) -> Option<RequirementType> {
        match s {
            "hours" => Some(RequirementType::Hours),
            "streak" => Some(RequirementType::Streak),
            _ => None,
        }
    }
}

/// A self-assigned reward the user unlocks manually once earned
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reward {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub requirement_type: String,
    pub requirement_value: i64,
    pub unlocked: bool,
}

impl Reward {
    pub fn validate_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    pub fn validate_requirement_value(value: i64) -> bool {
        value > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_type_parse() {
        assert_eq!(RequirementType::parse("hours"), Some(RequirementType::Hours));
        assert_eq!(RequirementType::parse("streak"), Some(RequirementType::Streak));
        assert_eq!(RequirementType::parse("days"), None);
    }

    #[test]
    fn test_validate_requirement_value() {
        assert!(Reward::validate_requirement_value(1));
        assert!(!Reward::validate_requirement_value(0));
        assert!(!Reward::validate_requirement_value(-5));
    }
}
