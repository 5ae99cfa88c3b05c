use super::MusicalKey;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a single music track with the metadata used for grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Path to the audio file, unique within a run
    pub path: PathBuf,

    /// Artist name (may be empty)
    pub artist: String,

    /// Track title (may be empty)
    pub title: String,

    /// Genre (may be empty)
    pub genre: String,

    /// Measured tempo in beats per minute, always positive
    pub bpm: f64,

    /// Musical key, absent when unavailable or unrecognized
    pub key: Option<MusicalKey>,
}

impl TrackRecord {
    /// Create a record with empty descriptive metadata
    pub fn new(path: PathBuf, bpm: f64) -> Self {
        Self {
            path,
            artist: String::new(),
            title: String::new(),
            genre: String::new(),
            bpm,
            key: None,
        }
    }
}
