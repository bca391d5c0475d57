//! Equality, hashing and formatting laws for `Overlay`.

mod common;

use common::{sample_mutation, EqualsTester, SAMPLE_BATCH_ID};
use docsync_core::{fields, CoreError, DocumentKey, ResourcePath};
use docsync_mutation::{Mutation, Precondition};
use docsync_overlay::{Overlay, OverlayByDocumentKeyMap, OverlayHash, OverlaySet};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn std_hash(overlay: &Overlay) -> u64 {
    let mut hasher = DefaultHasher::new();
    overlay.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equals_and_hash() {
    EqualsTester::new()
        .add_hasher("hash_value", |o: &Overlay| o.hash_value())
        .add_hasher("OverlayHash", |o: &Overlay| OverlayHash.hash(o))
        .add_hasher("Hash", std_hash)
        .add_equality_group(vec![Overlay::default(), Overlay::default()])
        .add_equality_group(vec![
            Overlay::new(SAMPLE_BATCH_ID, Mutation::default()),
            Overlay::new(SAMPLE_BATCH_ID, Mutation::default()),
        ])
        .add_equality_group(vec![
            Overlay::new(SAMPLE_BATCH_ID, sample_mutation("col/abc")),
            Overlay::new(SAMPLE_BATCH_ID, sample_mutation("col/abc")),
        ])
        .add_equality_group(vec![
            Overlay::new(SAMPLE_BATCH_ID + 1, sample_mutation("col/abc")),
            Overlay::new(SAMPLE_BATCH_ID + 1, sample_mutation("col/abc")),
        ])
        .add_equality_group(vec![
            Overlay::new(SAMPLE_BATCH_ID, sample_mutation("col/xyz")),
            Overlay::new(SAMPLE_BATCH_ID, sample_mutation("col/xyz")),
        ])
        .test_equals();
}

#[test]
fn test_equal_regardless_of_construction_path() {
    // GIVEN
    let direct = Overlay::new(SAMPLE_BATCH_ID, sample_mutation("col/abc"));
    let copied = direct.clone();
    let mut source = Overlay::new(SAMPLE_BATCH_ID, sample_mutation("col/abc"));
    let moved = source.take();
    let mut shared = sample_mutation("col/abc");
    let from_taken_mutation = Overlay::new(SAMPLE_BATCH_ID, shared.take());

    // WHEN/THEN
    EqualsTester::new()
        .add_hasher("hash_value", |o: &Overlay| o.hash_value())
        .add_equality_group(vec![direct, copied, moved, from_taken_mutation])
        .add_equality_group(vec![source, Overlay::new(-1, shared)])
        .test_equals();
}

#[test]
fn test_invalid_mutation_origin_does_not_matter() {
    let mut taken_from = sample_mutation("col/abc");
    taken_from.take();

    assert_eq!(
        Overlay::new(SAMPLE_BATCH_ID, taken_from),
        Overlay::new(SAMPLE_BATCH_ID, Mutation::default())
    );
}

#[test]
fn test_overlay_set_deduplicates() {
    // GIVEN
    let mut set = OverlaySet::default();

    // WHEN
    set.insert(Overlay::new(1, sample_mutation("col/abc")));
    set.insert(Overlay::new(1, sample_mutation("col/abc")));
    set.insert(Overlay::new(2, sample_mutation("col/abc")));
    set.insert(Overlay::default());

    // THEN
    assert_eq!(set.len(), 3);
    assert!(set.contains(&Overlay::new(2, sample_mutation("col/abc"))));
}

#[test]
fn test_overlays_by_document_key() {
    // GIVEN
    let overlays = [
        Overlay::new(3, sample_mutation("col/abc")),
        Overlay::new(
            5,
            Mutation::delete(
                DocumentKey::from_path_string("col/xyz").unwrap(),
                Precondition::None,
            ),
        ),
    ];

    // WHEN
    let by_key: OverlayByDocumentKeyMap = overlays
        .iter()
        .map(|overlay| (overlay.key().clone(), overlay.clone()))
        .collect();

    // THEN
    let xyz = DocumentKey::from_path_string("col/xyz").unwrap();
    assert_eq!(by_key.len(), 2);
    assert_eq!(by_key[&xyz].largest_batch_id(), 5);
}

#[test]
fn test_distinct_keys_print_distinctly() {
    // GIVEN
    let nested = DocumentKey::from_path_string("col/a/sub/b").unwrap();
    let flat = DocumentKey::from_path_string("col/ab").unwrap();
    let mutation_for = |key: DocumentKey| Mutation::delete(key, Precondition::None);

    // WHEN
    let nested_overlay = Overlay::new(1, mutation_for(nested.clone()));
    let flat_overlay = Overlay::new(1, mutation_for(flat));

    // THEN
    assert_ne!(nested_overlay, flat_overlay);
    assert_ne!(nested_overlay.to_string(), flat_overlay.to_string());
    assert!(nested_overlay.to_string().contains("col/a/sub/b"));
    assert_eq!(
        DocumentKey::from_path_string(&nested_overlay.key().to_string()).unwrap(),
        nested
    );
}

#[test]
fn test_keys_with_unprintable_segments_are_rejected() {
    let slashed = ResourcePath::from_segments(["col", "a/b"]);
    let empty = ResourcePath::from_segments(["col", ""]);

    assert_eq!(slashed, Err(CoreError::invalid_path_segment("a/b")));
    assert_eq!(empty, Err(CoreError::invalid_path_segment("")));
}

fn arb_mutation() -> impl Strategy<Value = Mutation> {
    let valid = (
        prop::sample::select(vec!["col", "rooms", "users"]),
        prop::sample::select(vec!["abc", "xyz", "doc1"]),
        0i64..3,
    )
        .prop_map(|(collection, document, n)| {
            let key = DocumentKey::from_path_string(&format!("{collection}/{document}")).unwrap();
            Mutation::patch_fields(key, fields! { "n" => n }).unwrap()
        });
    prop_oneof![1 => Just(Mutation::default()), 4 => valid]
}

fn arb_overlay() -> impl Strategy<Value = Overlay> {
    (-2i32..4, arb_mutation()).prop_map(|(batch_id, mutation)| Overlay::new(batch_id, mutation))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn equality_matches_components(a in arb_overlay(), b in arb_overlay()) {
        let components_equal =
            a.largest_batch_id() == b.largest_batch_id() && a.mutation() == b.mutation();
        prop_assert_eq!(a == b, components_equal);
        prop_assert_eq!(b == a, components_equal);
        if a == b {
            prop_assert_eq!(a.hash_value(), b.hash_value());
            prop_assert_eq!(OverlayHash.hash(&a), OverlayHash.hash(&b));
        }
    }

    #[test]
    fn equality_is_transitive(a in arb_overlay(), b in arb_overlay(), c in arb_overlay()) {
        if a == b && b == c {
            prop_assert_eq!(a, c);
        }
    }

    #[test]
    fn hash_forms_agree(overlay in arb_overlay()) {
        prop_assert_eq!(OverlayHash.hash(&overlay), overlay.hash_value());
        prop_assert_eq!(overlay.clone().hash_value(), overlay.hash_value());
    }

    #[test]
    fn clone_leaves_source_unchanged(overlay in arb_overlay()) {
        let before = overlay.clone();
        let copy = overlay.clone();
        prop_assert_eq!(&copy, &overlay);
        prop_assert_eq!(&overlay, &before);
    }

    #[test]
    fn take_resets_source(overlay in arb_overlay()) {
        let mut source = overlay.clone();
        let taken = source.take();
        prop_assert_eq!(taken, overlay);
        prop_assert_eq!(source, Overlay::default());
    }

    #[test]
    fn display_shape(overlay in arb_overlay()) {
        let text = overlay.to_string();
        prop_assert!(text.starts_with("Overlay("));
        prop_assert!(text.ends_with(')'));
        let batch_field = format!("largest_batch_id={}", overlay.largest_batch_id());
        prop_assert!(text.contains(&batch_field));
        prop_assert_eq!(text.contains("mutation="), overlay.is_valid());
        if let Ok(key) = overlay.try_key() {
            prop_assert!(text.contains(&key.to_string()));
        }
        prop_assert_eq!(format!("{overlay}"), text);
    }
}
