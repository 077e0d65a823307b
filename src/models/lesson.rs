use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Collection, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "beginner"),
            Level::Intermediate => write!(f, "intermediate"),
            Level::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!(
                "Invalid level '{}'. Valid options: beginner, intermediate, advanced",
                s
            )),
        }
    }
}

/// A lesson with a markdown body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub level: Level,
    /// Markdown content
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Record for Lesson {
    const COLLECTION: Collection = Collection::Lesson;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Beginner), "beginner");
        assert_eq!(format!("{}", Level::Intermediate), "intermediate");
        assert_eq!(format!("{}", Level::Advanced), "advanced");
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!(Level::from_str("beginner").unwrap(), Level::Beginner);
        assert_eq!(Level::from_str("ADVANCED").unwrap(), Level::Advanced);
        assert!(Level::from_str("expert").is_err());
    }

    #[test]
    fn test_lesson_rejects_unknown_level() {
        let json = r#"{"title":"Shells","level":"expert","content":"..."}"#;
        assert!(serde_json::from_str::<Lesson>(json).is_err());
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
    }
}
