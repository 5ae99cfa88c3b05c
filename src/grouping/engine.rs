//! Grouping orchestration
//!
//! The engine has two phases: building (records are expanded and added
//! to the index) and querying (the index is frozen and only borrowed).
//! `build` returning the index by value is what enforces the freeze.

use super::config::GroupingConfig;
use super::index::CompatibilityIndex;
use crate::model::{MusicalKey, TrackRecord};
use crate::tempo;
use rayon::prelude::*;

/// Records per worker chunk in the parallel build
const SHARD_SIZE: usize = 256;

/// One dump entry: a BPM key and its (optionally key-refined) tracks
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry<'a> {
    pub bpm: u32,

    /// Set when the entry comes from key-aware refinement
    pub key: Option<MusicalKey>,

    pub tracks: Vec<&'a TrackRecord>,
}

/// Drives tempo expansion and index construction, and exposes the two
/// consumption modes (full dump, point query)
pub struct GroupingEngine {
    config: GroupingConfig,
}

impl GroupingEngine {
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }

    /// Expand every record and populate the index
    ///
    /// Records whose expansion is empty end up in no group; that is not
    /// an error. The order records arrive in is the order they appear in
    /// within each group.
    pub fn build(&self, records: Vec<TrackRecord>) -> CompatibilityIndex {
        log::info!("Grouping {} tracks", records.len());

        let mut index = CompatibilityIndex::new();
        for record in &records {
            let bpms = tempo::expand(record.bpm, &self.config.expander);
            if bpms.is_empty() {
                log::debug!(
                    "No usable tempo range for {:?} ({} BPM)",
                    record.path,
                    record.bpm
                );
            }
            index.add(record, &bpms);
        }

        log::info!("Built {} BPM groups", index.group_count());
        index
    }

    /// Sharded parallel build
    ///
    /// Workers expand disjoint chunks into local indexes; shards are then
    /// merged in chunk order, so per-key track order matches `build`.
    /// Workers never touch a shared map.
    pub fn build_parallel(&self, records: Vec<TrackRecord>) -> CompatibilityIndex {
        log::info!("Grouping {} tracks in parallel", records.len());

        let shards: Vec<CompatibilityIndex> = records
            .par_chunks(SHARD_SIZE)
            .map(|chunk| {
                let mut shard = CompatibilityIndex::new();
                for record in chunk {
                    let bpms = tempo::expand(record.bpm, &self.config.expander);
                    shard.add(record, &bpms);
                }
                shard
            })
            .collect();

        let mut index = CompatibilityIndex::new();
        for shard in shards {
            index.merge(shard);
        }

        log::info!("Built {} BPM groups", index.group_count());
        index
    }

    /// All groups in ascending BPM order, lazily
    ///
    /// Restartable: each call recomputes from the frozen index. With
    /// key-aware grouping enabled, every BPM group is partitioned by
    /// exact key equality; tracks without a key never match each other
    /// and come out as singleton entries.
    pub fn full_dump<'a>(
        &'a self,
        index: &'a CompatibilityIndex,
    ) -> impl Iterator<Item = GroupEntry<'a>> + 'a {
        let key_aware = self.config.key_aware;
        index.all_groups().flat_map(move |(bpm, tracks)| {
            if key_aware {
                partition_by_key(bpm, tracks)
            } else {
                vec![GroupEntry {
                    bpm,
                    key: None,
                    tracks: tracks.iter().collect(),
                }]
            }
        })
    }

    /// Tracks playable at the given BPM, in insertion order
    pub fn query_by_bpm<'a>(&self, index: &'a CompatibilityIndex, bpm: u32) -> &'a [TrackRecord] {
        index.lookup(bpm)
    }
}

/// Stable partition of one BPM group by exact key equality
fn partition_by_key(bpm: u32, tracks: &[TrackRecord]) -> Vec<GroupEntry<'_>> {
    let mut entries: Vec<GroupEntry<'_>> = Vec::new();

    for track in tracks {
        match track.key {
            Some(key) => {
                if let Some(entry) = entries.iter_mut().find(|e| e.key == Some(key)) {
                    entry.tracks.push(track);
                } else {
                    entries.push(GroupEntry {
                        bpm,
                        key: Some(key),
                        tracks: vec![track],
                    });
                }
            }
            // A keyless track is never key-compatible with anything
            None => entries.push(GroupEntry {
                bpm,
                key: None,
                tracks: vec![track],
            }),
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mode, MusicalKey, PitchClass};
    use std::path::PathBuf;

    fn record(name: &str, bpm: f64) -> TrackRecord {
        TrackRecord::new(PathBuf::from(format!("/music/{}.mp3", name)), bpm)
    }

    fn keyed(name: &str, bpm: f64, key: Option<MusicalKey>) -> TrackRecord {
        TrackRecord {
            key,
            ..record(name, bpm)
        }
    }

    #[test]
    fn test_halved_tempo_co_occurs_with_doubled() {
        // 64 doubled lands in 128's base band, so the two tracks must
        // share at least one group
        let engine = GroupingEngine::new(GroupingConfig::new().with_octave_factors(vec![2]));
        let fast = record("fast", 128.0);
        let slow = record("slow", 64.0);
        let index = engine.build(vec![fast.clone(), slow.clone()]);

        let shared = index
            .all_groups()
            .any(|(_, tracks)| tracks.contains(&fast) && tracks.contains(&slow));
        assert!(shared);
    }

    #[test]
    fn test_empty_expansion_contributes_nothing() {
        let engine = GroupingEngine::new(GroupingConfig::new().with_octave_factors(vec![]));
        let index = engine.build(vec![record("too-fast", 300.0)]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let engine = GroupingEngine::new(GroupingConfig::new());
        let records: Vec<TrackRecord> = (0..600)
            .map(|i| record(&format!("t{}", i), 62.0 + (i % 120) as f64))
            .collect();

        let sequential = engine.build(records.clone());
        let parallel = engine.build_parallel(records);

        let seq: Vec<(u32, Vec<TrackRecord>)> = sequential
            .all_groups()
            .map(|(bpm, tracks)| (bpm, tracks.to_vec()))
            .collect();
        let par: Vec<(u32, Vec<TrackRecord>)> = parallel
            .all_groups()
            .map(|(bpm, tracks)| (bpm, tracks.to_vec()))
            .collect();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_full_dump_is_restartable() {
        let engine = GroupingEngine::new(GroupingConfig::new());
        let index = engine.build(vec![record("a", 120.0), record("b", 121.0)]);

        let first: Vec<u32> = engine.full_dump(&index).map(|e| e.bpm).collect();
        let second: Vec<u32> = engine.full_dump(&index).map(|e| e.bpm).collect();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_key_aware_partitions_by_exact_key() {
        let fsm = Some(MusicalKey::new(PitchClass::Fs, Mode::Minor));
        let amaj = Some(MusicalKey::new(PitchClass::A, Mode::Major));

        let engine = GroupingEngine::new(
            GroupingConfig::new()
                .with_octave_factors(vec![])
                .with_max_diff(0)
                .with_key_aware(true),
        );
        let index = engine.build(vec![
            keyed("one", 128.0, fsm),
            keyed("two", 128.0, amaj),
            keyed("three", 128.0, fsm),
        ]);

        let entries: Vec<GroupEntry> = engine.full_dump(&index).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, fsm);
        assert_eq!(entries[0].tracks.len(), 2);
        assert_eq!(entries[1].key, amaj);
        assert_eq!(entries[1].tracks.len(), 1);
    }

    #[test]
    fn test_key_aware_keyless_tracks_stay_apart() {
        let engine = GroupingEngine::new(
            GroupingConfig::new()
                .with_octave_factors(vec![])
                .with_max_diff(0)
                .with_key_aware(true),
        );
        let index = engine.build(vec![
            keyed("one", 128.0, None),
            keyed("two", 128.0, None),
        ]);

        let entries: Vec<GroupEntry> = engine.full_dump(&index).collect();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.key.is_none() && e.tracks.len() == 1));
    }

    #[test]
    fn test_query_by_bpm_passes_through() {
        let engine = GroupingEngine::new(GroupingConfig::new());
        let track = record("only", 120.0);
        let index = engine.build(vec![track.clone()]);

        assert_eq!(engine.query_by_bpm(&index, 120), &[track]);
        assert!(engine.query_by_bpm(&index, 40).is_empty());
    }
}
