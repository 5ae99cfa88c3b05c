use std::collections::BTreeSet;

/// Configuration for tempo expansion
#[derive(Debug, Clone)]
pub struct ExpanderConfig {
    /// Tolerance band half-width in BPM around each octave value
    pub max_diff: u32,

    /// Lower bound of the usable BPM range, exclusive
    pub min_bpm: u32,

    /// Upper bound of the usable BPM range, exclusive
    pub max_bpm: u32,

    /// Multipliers/divisors modeling octave ambiguity
    pub octave_factors: Vec<u32>,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            max_diff: 5,
            min_bpm: 60,
            max_bpm: 190,
            octave_factors: vec![2, 4, 6],
        }
    }
}

impl ExpanderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the usable BPM range (both bounds exclusive)
    pub fn with_bpm_range(mut self, min: u32, max: u32) -> Self {
        self.min_bpm = min;
        self.max_bpm = max;
        self
    }

    /// Set the tolerance band half-width
    pub fn with_max_diff(mut self, max_diff: u32) -> Self {
        self.max_diff = max_diff;
        self
    }

    /// Set the octave multipliers/divisors
    pub fn with_octave_factors(mut self, factors: Vec<u32>) -> Self {
        self.octave_factors = factors;
        self
    }
}

/// Compute every integer BPM the given tempo can be matched at.
///
/// The measured tempo plus its octave multiples and divisors are each
/// widened to `floor(value) - max_diff ..= floor(value) + max_diff`,
/// and the union is filtered to integers strictly between `min_bpm`
/// and `max_bpm`. A tempo whose whole family falls outside that range
/// yields an empty set, which is a valid result.
pub fn expand(bpm: f64, config: &ExpanderConfig) -> BTreeSet<u32> {
    let mut family = vec![bpm];
    for &factor in &config.octave_factors {
        // A zero factor has no octave meaning
        if factor == 0 {
            continue;
        }
        family.push(bpm / factor as f64);
        family.push(bpm * factor as f64);
    }

    let mut bpms = BTreeSet::new();
    for value in family {
        let center = value.floor() as i64;
        let lo = center.saturating_sub(config.max_diff as i64);
        let hi = center.saturating_add(config.max_diff as i64);
        for candidate in lo..=hi {
            if candidate > config.min_bpm as i64 && candidate < config.max_bpm as i64 {
                bpms.insert(candidate as u32);
            }
        }
    }

    bpms
}
