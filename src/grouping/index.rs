use crate::model::TrackRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Inverted index from integer BPM to the tracks playable at that tempo
///
/// A track fans out to every BPM in its expanded set, and several tracks
/// sharing one BPM key are the grouping signal. Within a key, tracks keep
/// the order they were added in.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityIndex {
    groups: BTreeMap<u32, Vec<TrackRecord>>,
}

impl CompatibilityIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Append a record under every BPM in its expanded set
    pub fn add(&mut self, record: &TrackRecord, bpms: &BTreeSet<u32>) {
        debug_assert!(record.bpm > 0.0, "records must carry a positive BPM");

        for &bpm in bpms {
            self.groups.entry(bpm).or_default().push(record.clone());
        }
    }

    /// Tracks playable at the given BPM, in insertion order
    pub fn lookup(&self, bpm: u32) -> &[TrackRecord] {
        self.groups.get(&bpm).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All populated groups in ascending BPM order
    pub fn all_groups(&self) -> impl Iterator<Item = (u32, &[TrackRecord])> {
        self.groups
            .iter()
            .map(|(&bpm, tracks)| (bpm, tracks.as_slice()))
    }

    /// Fold another index into this one, key-wise
    ///
    /// Per-key order is this index's tracks followed by the other's, so
    /// merging shards in their original order reproduces the sequential
    /// build exactly.
    pub fn merge(&mut self, other: CompatibilityIndex) {
        for (bpm, mut tracks) in other.groups {
            self.groups.entry(bpm).or_default().append(&mut tracks);
        }
    }

    /// Number of populated BPM keys
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(name: &str, bpm: f64) -> TrackRecord {
        TrackRecord::new(PathBuf::from(format!("/music/{}.mp3", name)), bpm)
    }

    #[test]
    fn test_add_lookup_round_trip() {
        let mut index = CompatibilityIndex::new();
        let track = record("one", 120.0);
        let bpms: BTreeSet<u32> = [118, 119, 120, 121].into_iter().collect();

        index.add(&track, &bpms);

        for bpm in &bpms {
            assert_eq!(index.lookup(*bpm), &[track.clone()]);
        }
        // Not listed anywhere outside the expanded set
        assert!(index.lookup(117).is_empty());
        assert!(index.lookup(122).is_empty());
    }

    #[test]
    fn test_lookup_absent_key_is_empty() {
        let index = CompatibilityIndex::new();
        assert!(index.lookup(128).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_all_groups_ascending_without_duplicates() {
        let mut index = CompatibilityIndex::new();
        index.add(&record("a", 100.0), &[130, 65, 128].into_iter().collect());
        index.add(&record("b", 100.0), &[128, 70].into_iter().collect());

        let keys: Vec<u32> = index.all_groups().map(|(bpm, _)| bpm).collect();
        assert_eq!(keys, vec![65, 70, 128, 130]);
    }

    #[test]
    fn test_insertion_order_within_group() {
        let mut index = CompatibilityIndex::new();
        let first = record("first", 128.0);
        let second = record("second", 127.0);
        let bpms: BTreeSet<u32> = [128].into_iter().collect();

        index.add(&first, &bpms);
        index.add(&second, &bpms);

        let group = index.lookup(128);
        assert_eq!(group[0].path, first.path);
        assert_eq!(group[1].path, second.path);
    }

    #[test]
    fn test_read_stability() {
        let mut index = CompatibilityIndex::new();
        index.add(&record("a", 90.0), &[88, 89, 90].into_iter().collect());
        index.add(&record("b", 89.0), &[89, 90].into_iter().collect());

        let first: Vec<(u32, Vec<TrackRecord>)> = index
            .all_groups()
            .map(|(bpm, tracks)| (bpm, tracks.to_vec()))
            .collect();
        let second: Vec<(u32, Vec<TrackRecord>)> = index
            .all_groups()
            .map(|(bpm, tracks)| (bpm, tracks.to_vec()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_merge_concatenates_per_key() {
        let a = record("a", 100.0);
        let b = record("b", 100.0);
        let bpms: BTreeSet<u32> = [100].into_iter().collect();

        let mut left = CompatibilityIndex::new();
        left.add(&a, &bpms);
        let mut right = CompatibilityIndex::new();
        right.add(&b, &bpms);

        left.merge(right);

        let group = left.lookup(100);
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].path, a.path);
        assert_eq!(group[1].path, b.path);
    }
}
