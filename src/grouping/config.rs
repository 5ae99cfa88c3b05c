//! Grouping configuration

use crate::tempo::ExpanderConfig;

/// Configuration for a grouping run
#[derive(Debug, Clone, Default)]
pub struct GroupingConfig {
    /// Tempo expansion parameters
    pub expander: ExpanderConfig,

    /// Partition each BPM group by exact key equality
    pub key_aware: bool,
}

impl GroupingConfig {
    /// Create a configuration with the default expansion parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the usable BPM range (both bounds exclusive)
    pub fn with_bpm_range(mut self, min: u32, max: u32) -> Self {
        self.expander = self.expander.with_bpm_range(min, max);
        self
    }

    /// Set the tolerance band half-width
    pub fn with_max_diff(mut self, max_diff: u32) -> Self {
        self.expander = self.expander.with_max_diff(max_diff);
        self
    }

    /// Set the octave multipliers/divisors
    pub fn with_octave_factors(mut self, factors: Vec<u32>) -> Self {
        self.expander = self.expander.with_octave_factors(factors);
        self
    }

    /// Enable key-aware grouping
    pub fn with_key_aware(mut self, enable: bool) -> Self {
        self.key_aware = enable;
        self
    }
}
