//! Content API for a jazz-piano learning app.
//!
//! Stores chords, progressions, lessons and per-client favorites as JSON
//! documents and serves them over HTTP.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod seed;
