//! Tests for song identity and weak hashes
//!
//! Verifies the hashes are stable across decodes and re-encodes, and that
//! they depend on content rather than archive layout.

mod common;

use audica_core::identity::{canonical_descriptor, chart_hash, md5_hex, tempo_descriptor};
use audica_core::{Package, PackageMetadata, TempoEvent, Tier, weak_hash};
use common::*;

mod determinism {
    use super::*;

    #[test]
    fn test_repeated_decodes_agree() {
        let bytes = full_package_bytes();
        let first = Package::decode(&bytes).unwrap().identity_hash();
        let second = Package::decode(&bytes).unwrap().identity_hash();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reencode_keeps_identity() {
        let package = Package::decode(&full_package_bytes()).unwrap();
        let reencoded = Package::decode(&package.encode().unwrap()).unwrap();

        assert_eq!(reencoded.identity_hash(), package.identity_hash());
        assert_eq!(reencoded, package);
        assert_eq!(package, reencoded);
    }

    #[test]
    fn test_identity_format() {
        let hash = Package::decode(&full_package_bytes()).unwrap().identity_hash();
        let (song_id, digest) = hash.split_once('_').unwrap();

        assert_eq!(song_id, SONG_ID);
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

mod layout {
    use super::*;

    #[test]
    fn test_entry_order_does_not_matter() {
        let forward = build_archive(&full_entries());
        let mut reversed_entries = full_entries();
        reversed_entries.reverse();
        let reversed = build_archive(&reversed_entries);

        // same entries in another order give an archive of the same size
        assert_eq!(forward.len(), reversed.len());

        let a = Package::decode(&forward).unwrap();
        let b = Package::decode(&reversed).unwrap();
        assert_eq!(a.identity_hash(), b.identity_hash());

        let weak_a = PackageMetadata::read(&forward).unwrap().weak_hash;
        let weak_b = PackageMetadata::read(&reversed).unwrap().weak_hash;
        assert_eq!(weak_a, weak_b);
    }

    #[test]
    fn test_weak_hash_follows_file_size() {
        let base = full_package_bytes();
        let mut padded_entries = full_entries();
        padded_entries.push(("notes.txt".to_string(), b"unrelated entry".to_vec()));
        let padded = build_archive(&padded_entries);
        assert_ne!(base.len(), padded.len());

        let a = Package::decode(&base).unwrap();
        let b = Package::decode(&padded).unwrap();
        assert_eq!(a.identity_hash(), b.identity_hash());

        let weak_base = PackageMetadata::read(&base).unwrap().weak_hash;
        let weak_padded = PackageMetadata::read(&padded).unwrap().weak_hash;
        assert_ne!(weak_base, weak_padded);
    }

    #[test]
    fn test_audio_and_art_do_not_affect_identity() {
        let full = Package::decode(&full_package_bytes()).unwrap();
        let stripped = Package::decode(&build_archive(&entries_without(&[
            "song.png",
            "song.mogg",
            "song_sustain_l.moggsong",
        ])))
        .unwrap();
        assert_eq!(full.identity_hash(), stripped.identity_hash());
    }

    #[test]
    fn test_chart_content_changes_identity() {
        let full = Package::decode(&full_package_bytes()).unwrap();
        let mut cues = spread_cues(64, 96_000);
        cues[10].pitch += 1;
        let changed = Package::decode(&build_archive(&entries_with(
            "expert.cues",
            chart_json(&cues),
        )))
        .unwrap();

        assert_ne!(full.identity_hash(), changed.identity_hash());
        assert_ne!(full, changed);
    }

    #[test]
    fn test_missing_chart_contributes_empty_string() {
        let package = Package::decode(&build_archive(&entries_without(&[
            "beginner.cues",
            "advanced.cues",
        ])))
        .unwrap();
        let tempo = package.tempo.events();

        let combined = format!(
            "{}{}",
            chart_hash(package.charts.get(Tier::Moderate), tempo),
            chart_hash(package.charts.get(Tier::Expert), tempo)
        );
        assert_eq!(
            package.identity_hash(),
            format!("{}_{}", SONG_ID, md5_hex(&combined))
        );
    }
}

mod tempo {
    use super::*;

    #[test]
    fn test_duplicate_tempo_collapsing() {
        let duplicate = [
            TempoEvent::from_bpm(0, 120.0),
            TempoEvent::from_bpm(480, 120.0),
            TempoEvent::from_bpm(960, 140.0),
        ];
        let collapsed = [TempoEvent::from_bpm(0, 120.0), TempoEvent::from_bpm(960, 140.0)];

        assert_eq!(tempo_descriptor(&duplicate), "120;0;140;960;;");
        assert_eq!(
            canonical_descriptor(None, &duplicate),
            canonical_descriptor(None, &collapsed)
        );
    }

    #[test]
    fn test_redundant_tempo_marker_keeps_identity() {
        let package = Package::decode(&full_package_bytes()).unwrap();

        // fixture has a redundant 120 BPM marker at tick 7680
        let mut without_marker = tempo_events();
        without_marker.remove(1);
        let entries = entries_with(
            "song.mid",
            audica_core::tempo::midi::write_tempo_events(&without_marker).unwrap(),
        );
        let other = Package::decode(&build_archive(&entries)).unwrap();

        assert_ne!(package.tempo, other.tempo);
        assert_eq!(package.identity_hash(), other.identity_hash());
    }
}

mod weak {
    use super::*;

    #[test]
    fn test_weak_hash_matches_metadata() {
        let bytes = full_package_bytes();
        let package = Package::decode(&bytes).unwrap();
        let metadata = PackageMetadata::read(&bytes).unwrap();

        assert_eq!(metadata.weak_hash, package.weak_hash(bytes.len() as u64));
        assert_eq!(
            metadata.weak_hash,
            weak_hash(&package.description, bytes.len() as u64)
        );
        assert_eq!(
            metadata.weak_hash,
            md5_hex(&format!("{}{}", SONG_ID, bytes.len()))
        );
    }
}
