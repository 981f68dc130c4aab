//! Hierarchy intersection over the shared course fixture

use super::test_utils::{course, model_ids};
use coursescore::hierarchy::{
    expand_with_descendants, filter_intersecting_hierarchy, has_intersecting_hierarchy,
};
use coursescore::{ContentTree, Item, ItemId, ItemStore};

fn items<'a>(tree: &'a ContentTree, ids: &[&str]) -> Vec<&'a Item> {
    ids.iter()
        .map(|id| tree.find_by_id(&ItemId::from(*id)).unwrap())
        .collect()
}

#[test]
fn test_expand_keeps_document_order_per_root() {
    let tree = course();
    let expanded = expand_with_descendants(&tree, &items(&tree, &["assessment2", "block-1a"]));
    assert_eq!(
        model_ids(&expanded),
        vec!["assessment2", "block-2a", "comp-2a", "block-2b", "comp-2b", "block-1a", "comp-1a"]
    );
}

#[test]
fn test_ancestor_descendant_and_sibling() {
    let tree = course();
    let comp = items(&tree, &["comp-1b"]);

    assert!(has_intersecting_hierarchy(&tree, &items(&tree, &["course"]), &comp));
    assert!(has_intersecting_hierarchy(&tree, &comp, &items(&tree, &["assessment1"])));
    assert!(!has_intersecting_hierarchy(&tree, &comp, &items(&tree, &["block-1a"])));
    assert!(!has_intersecting_hierarchy(&tree, &comp, &[]));
}

#[test]
fn test_filter_narrows_bucket_to_assessment() {
    let tree = course();
    let bucket2 = items(&tree, &["comp-1b", "block-3a"]);
    let assessment1 = items(&tree, &["block-1a", "block-1b"]);

    let narrowed = filter_intersecting_hierarchy(&tree, &bucket2, &assessment1);
    assert_eq!(model_ids(&narrowed), vec!["comp-1b"]);

    let reverse = filter_intersecting_hierarchy(&tree, &assessment1, &bucket2);
    assert_eq!(model_ids(&reverse), vec!["block-1b"]);
}

#[test]
fn test_store_traversal_matches_tree() {
    let tree = course();
    let course_item = tree.find_by_id(&ItemId::from("course")).unwrap();
    assert_eq!(
        model_ids(&tree.children(course_item)),
        vec!["assessment1", "assessment2", "article-3"]
    );
    assert_eq!(tree.descendants(course_item).len(), tree.len() - 1);
    assert_eq!(model_ids(&tree.roots()), vec!["course"]);
}
