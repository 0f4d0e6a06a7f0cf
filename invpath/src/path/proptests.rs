//! Property-based tests for path encoding and navigation.

use super::decoder::decode;
use super::encoder::{encode, escape_id};
use super::{CanonicalPath, Extender, RelativePath, Segment, SegmentType};
use proptest::prelude::*;

// Ids drawn from a pool that includes every reserved character.
fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9;/\\\\._ -]{1,12}"
}

fn tail_type_strategy() -> impl Strategy<Value = SegmentType> {
    prop_oneof![Just(SegmentType::Resource), Just(SegmentType::Metric)]
}

// Canonical paths of the shape t/e[/f](/r)*[/m].
fn canonical_strategy() -> impl Strategy<Value = CanonicalPath> {
    (
        id_strategy(),
        id_strategy(),
        proptest::option::of(id_strategy()),
        prop::collection::vec(id_strategy(), 0..5),
        proptest::option::of(id_strategy()),
    )
        .prop_map(|(tenant, env, feed, resources, metric)| {
            let mut ext = CanonicalPath::empty();
            ext.extend_with(SegmentType::Tenant, tenant).unwrap();
            ext.extend_with(SegmentType::Environment, env).unwrap();
            if let Some(feed) = feed {
                ext.extend_with(SegmentType::Feed, feed).unwrap();
            }
            for resource in resources {
                ext.extend_with(SegmentType::Resource, resource).unwrap();
            }
            if let Some(metric) = metric {
                // metrics may not follow resources
                let _ = ext.extend_with(SegmentType::Metric, metric);
            }
            ext.get().unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // decode(encode(p)) reproduces the segments
    #[test]
    fn encode_decode_identity(path in canonical_strategy()) {
        let encoded = encode(path.path());
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(decoded.as_slice(), path.path());
    }

    // Display and FromStr are inverse
    #[test]
    fn canonical_display_parse_identity(path in canonical_strategy()) {
        let parsed: CanonicalPath = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }

    // Escaped ids never contain a bare reserved character
    #[test]
    fn escaped_ids_have_no_bare_reserved(id in id_strategy()) {
        let escaped = escape_id(&id);
        let mut chars = escaped.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                prop_assert!(matches!(chars.next(), Some(';' | '/' | '\\')));
            } else {
                prop_assert!(ch != ';' && ch != '/');
            }
        }
    }

    // One segment survives any id
    #[test]
    fn single_segment_identity(id in id_strategy(), ty in tail_type_strategy()) {
        let segment = Segment::new(ty, id).unwrap();
        let decoded = decode(&encode(std::slice::from_ref(&segment))).unwrap();
        prop_assert_eq!(decoded, vec![segment]);
    }

    // up_by(k).down_by(k) == p for every k up to depth + 1
    #[test]
    fn up_down_symmetry(path in canonical_strategy(), k in 0usize..10) {
        let max = usize::try_from(path.depth() + 1).unwrap();
        let k = k.min(max);
        prop_assert_eq!(path.up_by(k).down_by(k), path);
    }

    // The ascending views are the descending views reversed
    #[test]
    fn ascending_reverses_descending(path in canonical_strategy()) {
        let up: Vec<_> = path.ascending_iter().collect();
        let mut down: Vec<_> = path.descending_iter().collect();
        down.reverse();
        prop_assert_eq!(up.len(), usize::try_from(path.depth()).unwrap());
        prop_assert_eq!(up, down);
    }

    // Every prefix view is valid under the canonical table
    #[test]
    fn prefixes_stay_valid(path in canonical_strategy()) {
        for view in path.ascending_iter() {
            let mut ext = Extender::<CanonicalPath>::new();
            prop_assert!(ext.extend_all(view.path().iter().cloned()).is_ok());
        }
    }

    // k ups then a metric lands k levels above, when that is an environment or feed
    #[test]
    fn apply_ups_pop_one_each(path in canonical_strategy(), id in id_strategy()) {
        let mut ext = RelativePath::empty();
        ext.extend(Segment::up()).unwrap();
        ext.extend_with(SegmentType::Metric, id.clone()).unwrap();
        let rel = ext.get().unwrap();

        let parent = path.up();
        let result = rel.apply_to(&path);
        match parent.segment().map(Segment::element_type) {
            Some(SegmentType::Environment | SegmentType::Feed) => {
                let target = result.unwrap();
                prop_assert_eq!(target.path().len(), path.path().len());
                prop_assert_eq!(target.segment().and_then(Segment::element_id), Some(id.as_str()));
            }
            _ => prop_assert!(result.is_err()),
        }
    }
}
