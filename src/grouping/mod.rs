//! Grouping core: inverted BPM index and its orchestration

pub mod config;
pub mod engine;
pub mod index;

pub use config::GroupingConfig;
pub use engine::{GroupEntry, GroupingEngine};
pub use index::CompatibilityIndex;
