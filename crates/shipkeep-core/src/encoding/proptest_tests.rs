//! Property-based tests for index path keys.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use crate::encoding::index_path::{decode_index_path, encode_index_path, IndexPath, MAX_DEPTH};
use crate::error::IndexPathError;

/// Strategy for level values that survive a round trip.
fn arb_segments() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=63, 1..=MAX_DEPTH)
}

fn join(segments: &[u8]) -> String {
    segments.iter().map(u8::to_string).collect::<Vec<_>>().join(".")
}

proptest! {
    #[test]
    fn roundtrip(segments in arb_segments()) {
        let path = join(&segments);
        let key = encode_index_path(&path).expect("encoding should succeed");
        prop_assert_eq!(decode_index_path(key), path);
    }

    #[test]
    fn keys_are_non_negative(segments in arb_segments()) {
        let key = encode_index_path(&join(&segments)).expect("encoding should succeed");
        prop_assert!(key > 0);
    }

    /// `Vec<u8>` comparison is exactly depth-first outline order: element-wise,
    /// with a strict prefix sorting first.
    #[test]
    fn order_matches_outline_order(a in arb_segments(), b in arb_segments()) {
        let key_a = encode_index_path(&join(&a)).expect("encoding should succeed");
        let key_b = encode_index_path(&join(&b)).expect("encoding should succeed");
        prop_assert_eq!(key_a.cmp(&key_b), a.cmp(&b));
    }

    #[test]
    fn prefix_precedes_descendant(
        segments in prop::collection::vec(1u8..=63, 1..MAX_DEPTH),
        extra in 1u8..=63,
    ) {
        let parent = join(&segments);
        let child = format!("{parent}.{extra}");
        let parent_key = encode_index_path(&parent).expect("encoding should succeed");
        let child_key = encode_index_path(&child).expect("encoding should succeed");
        prop_assert!(parent_key < child_key);
    }

    #[test]
    fn subtree_range_matches_ancestry(a in arb_segments(), b in arb_segments()) {
        let pa = IndexPath::parse(&join(&a)).expect("valid path");
        let pb = IndexPath::parse(&join(&b)).expect("valid path");
        let below = b.len() >= a.len() && b[..a.len()] == a[..];
        prop_assert_eq!(pa.subtree_range().contains(&pb.key()), below);
    }

    #[test]
    fn index_path_key_roundtrip(segments in arb_segments()) {
        let path = IndexPath::parse(&join(&segments)).expect("valid path");
        prop_assert_eq!(IndexPath::from_key(path.key()), Ok(path));
        prop_assert_eq!(path.segments().collect::<Vec<_>>(), segments);
    }

    #[test]
    fn zero_segment_is_lossy(
        head in prop::collection::vec(1u8..=63, 1..5),
        tail in prop::collection::vec(1u8..=63, 1..5),
    ) {
        let path = format!("{}.0.{}", join(&head), join(&tail));
        let key = encode_index_path(&path).expect("raw encoding accepts zero");
        prop_assert_eq!(decode_index_path(key), join(&head));
        prop_assert_eq!(
            IndexPath::parse(&path),
            Err(IndexPathError::ZeroSegment { position: head.len() })
        );
    }

    #[test]
    fn out_of_range_rejected(value in 64i64..10_000) {
        let result = encode_index_path(&format!("1.{value}"));
        prop_assert_eq!(result, Err(IndexPathError::OutOfRange { value }));
    }

    /// Decoding is total: any key produces a string, and re-encoding that
    /// string never fails.
    #[test]
    fn decode_is_total(key in any::<i64>()) {
        let path = decode_index_path(key);
        if !path.is_empty() {
            prop_assert!(encode_index_path(&path).is_ok());
        }
    }

    /// Arbitrary input must never panic.
    #[test]
    fn arbitrary_strings_dont_crash(s in ".*") {
        let _ = encode_index_path(&s);
        let _ = IndexPath::parse(&s);
    }
}
