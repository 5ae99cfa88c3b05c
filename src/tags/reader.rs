//! Directory scan and tag reading

use super::TagEntry;
use crate::model::TrackRecord;
use anyhow::{Context, Result};
use lofty::prelude::*;
use lofty::probe::Probe;
use std::path::Path;
use walkdir::WalkDir;

/// File extensions the tag reader will attempt
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "m4a", "wav", "aiff", "aif"];

/// Check whether a path looks like an audio file
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read the tags of a single audio file
pub fn read_entry(path: &Path) -> Result<TagEntry> {
    let tagged_file = Probe::open(path)
        .with_context(|| format!("Failed to open file for tag reading: {:?}", path))?
        .read()
        .with_context(|| format!("Failed to read tags: {:?}", path))?;

    let mut entry = TagEntry::new(path.to_path_buf());

    // Untagged files stay as an empty entry; into_record filters them out
    let tag = match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        Some(tag) => tag,
        None => return Ok(entry),
    };

    entry.artist = tag.artist().map(|s| s.to_string());
    entry.title = tag.title().map(|s| s.to_string());
    entry.genre = tag.genre().map(|s| s.to_string());
    entry.bpm = tag
        .get_string(&ItemKey::Bpm)
        .and_then(|text| text.trim().parse::<f64>().ok());
    entry.key = tag.get_string(&ItemKey::InitialKey).map(|s| s.to_string());

    Ok(entry)
}

/// Walk a music directory and collect every track with a usable BPM tag
///
/// Files are visited in name order so group contents come out the same
/// on every run. Per-file failures are logged and skipped; only a
/// missing root directory is an error.
pub fn scan_library(dir: &Path) -> Result<Vec<TrackRecord>> {
    if !dir.is_dir() {
        anyhow::bail!("Music directory not found: {:?}", dir);
    }

    log::info!("Scanning {:?}", dir);

    let mut records = Vec::new();
    let mut scanned = 0usize;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_audio_file(entry.path()) {
            continue;
        }
        scanned += 1;

        match read_entry(entry.path()) {
            Ok(tags) => {
                if let Some(record) = tags.into_record() {
                    records.push(record);
                }
            }
            Err(e) => log::warn!("Skipping {:?}: {:#}", entry.path(), e),
        }
    }

    log::info!(
        "Scanned {} audio files, {} with usable BPM tags",
        scanned,
        records.len()
    );
    Ok(records)
}
