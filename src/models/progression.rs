use serde::{Deserialize, Serialize};

use super::{Collection, Record};

/// An ordered chord progression in a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub name: String,
    /// Key center, e.g. "C", "Bb"
    pub key: String,
    pub roman_numerals: Vec<String>,
    /// Chord symbols in playing order. Not checked against stored chords.
    pub chords: Vec<String>,
    /// Style or context, e.g. "bebop", "modal", "blues"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Record for Progression {
    const COLLECTION: Collection = Collection::Progression;
}
