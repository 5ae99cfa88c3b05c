use crate::model::{MusicalKey, TrackRecord};
use std::path::PathBuf;

/// Raw tag data for one file, before validation
#[derive(Debug, Clone, Default)]
pub struct TagEntry {
    pub path: PathBuf,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub bpm: Option<f64>,

    /// Unparsed key tag text (e.g. "F#m")
    pub key: Option<String>,
}

impl TagEntry {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Convert to a grouping record
    ///
    /// Returns None unless the entry carries a positive BPM. Key text
    /// that does not name a recognized key is reported and dropped; the
    /// record still groups by BPM alone.
    pub fn into_record(self) -> Option<TrackRecord> {
        let bpm = match self.bpm {
            Some(bpm) if bpm > 0.0 => bpm,
            _ => {
                log::debug!("Skipping {:?}: no usable BPM tag", self.path);
                return None;
            }
        };

        let key = self.key.as_deref().and_then(|text| {
            let parsed = MusicalKey::parse(text);
            if parsed.is_none() {
                log::warn!(
                    "Unrecognized key {:?} on {:?}, grouping by BPM only",
                    text,
                    self.path
                );
            }
            parsed
        });

        Some(TrackRecord {
            path: self.path,
            artist: self.artist.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            bpm,
            key,
        })
    }
}
