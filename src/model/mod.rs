//! Value types for tracks and musical keys
//!
//! These are independent of where the metadata came from (file tags)
//! and of how groups are presented.

mod key;
mod track;

pub use key::{Mode, MusicalKey, PitchClass};
pub use track::TrackRecord;
