//! Mashup Grouper - tempo-compatibility grouping for music libraries
//!
//! Groups tagged music tracks into sets of mutually tempo-compatible
//! mashup candidates: each track's measured BPM is expanded into the
//! full set of tempos it can reasonably be played at (octave ambiguity
//! plus pitch tolerance), and an inverted index over those tempos
//! yields the candidate groups.

pub mod grouping;
pub mod model;
pub mod report;
pub mod tags;
pub mod tempo;

pub use grouping::config::GroupingConfig;
pub use grouping::engine::GroupingEngine;
