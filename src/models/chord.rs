use serde::{Deserialize, Serialize};

use super::{Collection, Record};

/// A chord with its spelling and common piano voicings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Human-readable name, e.g. "C Major 7"
    pub name: String,
    /// Chord symbol, e.g. "Cmaj7", "G7b9"
    pub symbol: String,
    /// Root note, e.g. "C", "F#", "Bb"
    pub root: String,
    /// Quality, e.g. "major7", "minor7", "dominant7", "altered"
    pub quality: String,
    /// Pitch classes in ascending order
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    /// Voicings, each a list of notes from low to high
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voicings: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Record for Chord {
    const COLLECTION: Collection = Collection::Chord;
}

impl Chord {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        root: impl Into<String>,
        quality: impl Into<String>,
        notes: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            root: root.into(),
            quality: quality.into(),
            notes: to_strings(notes),
            extensions: None,
            voicings: None,
            tags: None,
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = Some(to_strings(extensions));
        self
    }

    pub fn with_voicings(mut self, voicings: &[&[&str]]) -> Self {
        self.voicings = Some(voicings.iter().map(|v| to_strings(v)).collect());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(to_strings(tags));
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
