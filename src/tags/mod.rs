//! Track metadata from file tags
//!
//! This is the metadata source for grouping: it walks a music directory
//! and reads the BPM/key/artist/title/genre tags left by an external
//! analyzer. Per-file problems are logged and skipped; only records with
//! a positive BPM reach the grouping core.

mod entry;
mod reader;

pub use entry::TagEntry;
pub use reader::{is_audio_file, read_entry, scan_library};
