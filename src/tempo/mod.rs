//! Tempo expansion
//!
//! Computes the set of BPMs a track can reasonably be matched at,
//! covering octave ambiguity in tempo detection and the pitch tolerance
//! a DJ has while mixing.

mod expander;

pub use expander::{expand, ExpanderConfig};
