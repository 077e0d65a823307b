use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named groups of documents, one per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Chord,
    Progression,
    Lesson,
    Favorite,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Chord,
        Collection::Progression,
        Collection::Lesson,
        Collection::Favorite,
    ];

    /// Returns the stored collection name.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Chord => "chord",
            Collection::Progression => "progression",
            Collection::Lesson => "lesson",
            Collection::Favorite => "favorite",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| {
                format!(
                    "Invalid collection '{}'. Valid options: chord, progression, lesson, favorite",
                    s
                )
            })
    }
}

/// A record type that lives in exactly one collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;
}

/// A stored record together with its store-generated id.
///
/// Serializes as the record's own fields plus a string `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Progression;

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Chord.name(), "chord");
        assert_eq!(Collection::Progression.name(), "progression");
        assert_eq!(Collection::Lesson.name(), "lesson");
        assert_eq!(Collection::Favorite.name(), "favorite");
    }

    #[test]
    fn test_collection_from_str() {
        assert_eq!(Collection::from_str("chord").unwrap(), Collection::Chord);
        assert_eq!(Collection::from_str("LESSON").unwrap(), Collection::Lesson);
        assert!(Collection::from_str("chords").is_err());
        assert!(Collection::from_str("").is_err());
    }

    #[test]
    fn test_document_serializes_flat_with_string_id() {
        let doc = Document {
            id: "abc123".to_string(),
            record: Progression {
                name: "Blues in F".to_string(),
                key: "F".to_string(),
                roman_numerals: vec!["I".into(), "IV".into(), "V".into()],
                chords: vec!["F7".into(), "Bb7".into(), "C7".into()],
                style: None,
            },
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["name"], "Blues in F");
        assert_eq!(json["chords"][1], "Bb7");
        assert!(json.get("style").is_none());
    }
}
