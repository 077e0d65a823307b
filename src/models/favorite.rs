use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Collection, Record};

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Chord,
    Progression,
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoriteKind::Chord => write!(f, "chord"),
            FavoriteKind::Progression => write!(f, "progression"),
        }
    }
}

/// A client's bookmark of a chord or progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Anonymous client identifier supplied by the frontend
    pub client_id: String,
    pub kind: FavoriteKind,
    /// Symbol or name of the referenced chord/progression
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record for Favorite {
    const COLLECTION: Collection = Collection::Favorite;
}
