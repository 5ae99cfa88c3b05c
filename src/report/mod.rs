//! Group reporting
//!
//! The engine produces structured `GroupEntry` values; how they are
//! rendered is a presentation concern behind the `GroupReporter` trait,
//! so callers can swap output formats without touching the core.

use crate::grouping::GroupEntry;
use anyhow::Result;
use std::io::Write;

/// Consumes structured group data from a grouping run
pub trait GroupReporter {
    /// Render one group entry
    fn write_group(&mut self, entry: &GroupEntry<'_>) -> Result<()>;
}

/// Plain-text reporter: one block per group, one stanza per track
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> GroupReporter for TextReporter<W> {
    fn write_group(&mut self, entry: &GroupEntry<'_>) -> Result<()> {
        match entry.key {
            Some(key) => writeln!(self.out, "BPM: {} Key: {}\n", entry.bpm, key.notation())?,
            None => writeln!(self.out, "BPM: {}\n", entry.bpm)?,
        }

        for track in &entry.tracks {
            writeln!(self.out, "File: {}", track.path.display())?;
            writeln!(self.out, "Artist: {}", track.artist)?;
            writeln!(self.out, "Title: {}", track.title)?;
            writeln!(self.out, "Genre: {}", track.genre)?;
        }

        Ok(())
    }
}
