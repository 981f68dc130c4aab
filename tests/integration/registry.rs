//! Registry aggregates, lookups and the update cycle

use super::test_utils::{course, model_ids, registry, registry_with_events};
use coursescore::events::{ASSESSMENTS_COMPLETE, ASSESSMENTS_PASSED, BUCKET_COMPLETE};
use coursescore::policies::bootstrap;
use coursescore::types::ASSESSMENT;
use coursescore::{ContentTree, ItemId, ScoringError};

fn complete(tree: &mut ContentTree, id: &str) -> ItemId {
    let id = ItemId::from(id);
    tree.set_interaction_complete(&id, true).unwrap();
    tree.set_complete(&id, true).unwrap();
    id
}

#[test]
fn test_registration_order_and_flags() {
    let tree = course();
    let registry = registry(&tree);

    let ids: Vec<&str> = registry.subsets().iter().map(|set| set.id()).collect();
    assert_eq!(
        ids,
        vec!["assessments", "assessment1", "assessment2", "buckets", "bucket1", "bucket2"]
    );

    let scoring: Vec<&str> = registry.scoring_sets().iter().map(|set| set.id()).collect();
    assert_eq!(scoring, vec!["assessment1", "assessment2", "bucket1"]);
    let required: Vec<&str> = registry
        .completion_sets()
        .iter()
        .map(|set| set.id())
        .collect();
    assert_eq!(required, vec!["assessment1", "bucket2"]);
}

#[test]
fn test_course_scores_sum_scoring_sets() {
    let tree = course();
    let registry = registry(&tree);

    assert_eq!(registry.min_score(&tree), 0.0);
    assert_eq!(registry.max_score(&tree), 17.0);
    assert_eq!(registry.score(&tree), 11.0);
    assert_eq!(registry.scaled_score(&tree), 1100.0 / 17.0);
    assert!(!registry.is_complete(&tree));
}

#[test]
fn test_models_union_is_deduplicated() {
    let tree = course();
    let registry = registry(&tree);
    assert_eq!(
        model_ids(&registry.models(&tree)),
        vec!["block-1a", "block-1b", "block-2a", "block-2b", "comp-1b", "block-3a"]
    );
}

#[test]
fn test_lookup_by_id_type_and_item() {
    let tree = course();
    let registry = registry(&tree);

    assert_eq!(registry.get_subset_by_id("bucket2").unwrap().title(), "Bucket 2");
    assert!(registry.get_subset_by_id("bucket3").is_none());

    let assessments: Vec<&str> = registry
        .get_subsets_by_type(ASSESSMENT)
        .iter()
        .map(|set| set.id())
        .collect();
    assert_eq!(assessments, vec!["assessment1", "assessment2"]);
    assert!(registry.get_subsets_by_type("quiz").is_empty());

    let touching: Vec<&str> = registry
        .get_subsets_by_model_id(&tree, &ItemId::from("comp-3a"))
        .iter()
        .map(|set| set.id())
        .collect();
    assert_eq!(touching, vec!["buckets", "bucket2"]);
    assert!(registry
        .get_subsets_by_model_id(&tree, &ItemId::from("nowhere"))
        .is_empty());
}

#[test]
fn test_duplicate_bootstrap_is_rejected() {
    let tree = course();
    let mut registry = registry(&tree);
    let result = bootstrap(&mut registry, &tree, &["assessment".to_string()]);
    assert!(matches!(
        result,
        Err(ScoringError::DuplicateRegistration(id)) if id == "assessments"
    ));
    assert_eq!(registry.len(), 6);
}

#[test]
fn test_derived_sets_cannot_be_registered() {
    let tree = course();
    let mut registry = registry(&tree);
    let derived = registry
        .get_subset_by_path(&tree, "bucket1.assessment2")
        .unwrap();
    let result = registry.register(&tree, derived);
    assert!(matches!(result, Err(ScoringError::DerivedRegistration(id)) if id == "assessment2"));
}

#[test]
fn test_completion_cycle_fires_once_per_transition() {
    let mut tree = course();
    let (registry, events) = registry_with_events(&tree);

    let id = complete(&mut tree, "block-1a");
    assert!(registry
        .item_completion_changed(&tree, &id)
        .iter()
        .all(|t| !t.fired()));

    let id = complete(&mut tree, "block-1b");
    let fired: Vec<String> = registry
        .item_completion_changed(&tree, &id)
        .into_iter()
        .filter(|t| t.fired())
        .map(|t| t.set_id)
        .collect();
    assert_eq!(fired, vec!["assessment1"]);

    let received: Vec<(String, String)> = events
        .try_iter()
        .map(|event| (event.event_type, event.set_id))
        .collect();
    assert_eq!(
        received,
        vec![
            (ASSESSMENTS_COMPLETE.to_string(), "assessment1".to_string()),
            (ASSESSMENTS_PASSED.to_string(), "assessment1".to_string()),
        ]
    );

    assert!(registry.update(&tree).iter().all(|t| !t.fired()));
    assert_eq!(events.try_iter().count(), 0);
}

#[test]
fn test_course_completes_with_required_sets() {
    let mut tree = course();
    let (registry, events) = registry_with_events(&tree);

    for id in ["block-1a", "block-1b", "comp-1b", "block-3a"] {
        let id = complete(&mut tree, id);
        registry.item_completion_changed(&tree, &id);
    }
    assert!(registry.is_complete(&tree));

    let bucket_events: Vec<String> = events
        .try_iter()
        .filter(|event| event.event_type == BUCKET_COMPLETE)
        .map(|event| event.set_id)
        .collect();
    assert_eq!(bucket_events, vec!["bucket2"]);
}

#[test]
fn test_aggregates_fire_once_when_every_member_completes() {
    let mut tree = course();
    let registry = registry(&tree);
    assert!(registry.update(&tree).iter().all(|t| !t.fired()));

    let mut fired = Vec::new();
    for id in ["block-1a", "block-1b", "block-2a", "block-2b", "comp-1b", "block-3a"] {
        let id = complete(&mut tree, id);
        fired.extend(
            registry
                .item_completion_changed(&tree, &id)
                .into_iter()
                .filter(|t| t.fired())
                .map(|t| (id.to_string(), t.set_id, t.completed, t.passed)),
        );
    }

    let aggregates: Vec<(&str, &str, bool, bool)> = fired
        .iter()
        .filter(|(_, set_id, _, _)| set_id == "assessments" || set_id == "buckets")
        .map(|(item, set_id, completed, passed)| {
            (item.as_str(), set_id.as_str(), *completed, *passed)
        })
        .collect();
    assert_eq!(
        aggregates,
        vec![
            ("block-2b", "assessments", true, true),
            ("block-3a", "buckets", true, true),
        ]
    );
    assert_eq!(fired.len(), 6);
}

#[test]
fn test_completion_refires_after_regression() {
    let mut tree = course();
    let (registry, events) = registry_with_events(&tree);
    complete(&mut tree, "block-1a");
    complete(&mut tree, "block-1b");
    registry.update(&tree);

    tree.set_complete(&ItemId::from("block-1b"), false).unwrap();
    assert!(registry.update(&tree).iter().all(|t| !t.fired()));

    tree.set_complete(&ItemId::from("block-1b"), true).unwrap();
    let again = registry.update(&tree);
    assert!(again.iter().any(|t| t.set_id == "assessment1" && t.completed));

    let completions = events
        .try_iter()
        .filter(|event| event.event_type == ASSESSMENTS_COMPLETE)
        .count();
    assert_eq!(completions, 2);
}

#[test]
fn test_unavailable_items_leave_the_set() {
    let mut tree = course();
    let registry = registry(&tree);
    tree.set_available(&ItemId::from("block-2b"), false).unwrap();

    let ctx = registry.context(&tree);
    let assessment2 = registry.get_subset_by_id("assessment2").unwrap();
    assert_eq!(model_ids(&assessment2.models(&ctx).unwrap()), vec!["block-2a"]);
    assert_eq!(assessment2.max_score(&ctx), 3.0);
    assert_eq!(assessment2.scaled_score(&ctx), 100.0);
}
