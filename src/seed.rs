//! Starter content inserted into empty collections.

use crate::db::{DocumentStore, StoreError};
use crate::models::{Chord, Collection, Lesson, Level, Progression, Record};

/// How many records a seed run inserted per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub chords: usize,
    pub progressions: usize,
    pub lessons: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.chords + self.progressions + self.lessons
    }
}

const LESSON_CONTENT: &str = "
### Goal
Play smooth rootless voicings for a ii–V–I in C.

### Steps
- Left hand: keep time with 2 and 4
- Right hand: play Dm9 (C–E–F–A), G13 (F–A–B–E), Cmaj9 (E–A–B–D)
- Practice in all 12 keys using the circle of fifths
";

pub fn starter_chords() -> Vec<Chord> {
    vec![
        Chord::new("C Major 7", "Cmaj7", "C", "major7", &["C", "E", "G", "B"])
            .with_extensions(&["9", "13"])
            .with_voicings(&[&["C", "E", "B", "D"], &["E", "B", "D", "G"]])
            .with_tags(&["rootless", "shell"]),
        Chord::new("G7", "G7", "G", "dominant7", &["G", "B", "D", "F"])
            .with_extensions(&["9", "13"])
            .with_voicings(&[&["F", "B", "E", "A"], &["B", "E", "A", "D"]])
            .with_tags(&["altered", "rootless"]),
        Chord::new("D Minor 7", "Dm7", "D", "minor7", &["D", "F", "A", "C"])
            .with_extensions(&["9", "11"])
            .with_voicings(&[&["C", "F", "A", "E"], &["F", "A", "C", "E"]])
            .with_tags(&["shell"]),
    ]
}

pub fn starter_progressions() -> Vec<Progression> {
    vec![Progression {
        name: "ii-V-I in C".to_string(),
        key: "C".to_string(),
        roman_numerals: vec!["ii".into(), "V".into(), "I".into()],
        chords: vec!["Dm7".into(), "G7".into(), "Cmaj7".into()],
        style: Some("bebop".to_string()),
    }]
}

pub fn starter_lessons() -> Vec<Lesson> {
    vec![Lesson {
        title: "Rootless ii–V–I Voicings".to_string(),
        level: Level::Intermediate,
        content: LESSON_CONTENT.to_string(),
        tags: Some(vec![
            "voicings".into(),
            "ii-v-i".into(),
            "practice".into(),
        ]),
    }]
}

/// Fills each content collection with its starter set if it is empty.
///
/// Favorites are never seeded. Running this twice inserts nothing the
/// second time.
pub async fn seed(store: &DocumentStore) -> Result<SeedReport, StoreError> {
    let report = SeedReport {
        chords: seed_collection(store, starter_chords()).await?,
        progressions: seed_collection(store, starter_progressions()).await?,
        lessons: seed_collection(store, starter_lessons()).await?,
    };

    tracing::info!(
        chords = report.chords,
        progressions = report.progressions,
        lessons = report.lessons,
        "Seed complete"
    );

    Ok(report)
}

async fn seed_collection<T: Record>(
    store: &DocumentStore,
    records: Vec<T>,
) -> Result<usize, StoreError> {
    let collection: Collection = T::COLLECTION;
    if !store.is_empty(collection).await? {
        tracing::debug!("Collection '{}' already has content, skipping", collection);
        return Ok(0);
    }

    for record in &records {
        store.create_document(record).await?;
    }
    Ok(records.len())
}
