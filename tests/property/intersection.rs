//! Property-based tests for hierarchy intersection

use coursescore::hierarchy::{filter_intersecting_hierarchy, has_intersecting_hierarchy};
use coursescore::{ContentTree, Item, ItemStore};
use proptest::prelude::*;

/// Random forest: item `i` has parent `parents[i]`, always an earlier index.
fn forest_strategy() -> impl Strategy<Value = Vec<Option<usize>>> {
    (1usize..40).prop_flat_map(|len| {
        (0..len)
            .map(|i| {
                if i == 0 {
                    Just(None).boxed()
                } else {
                    prop::option::of(0..i).boxed()
                }
            })
            .collect::<Vec<_>>()
    })
}

fn build(parents: &[Option<usize>]) -> ContentTree {
    let items = parents
        .iter()
        .enumerate()
        .map(|(i, parent)| {
            let item = Item::new(format!("n{}", i), "node");
            match parent {
                Some(parent) => item.with_parent(format!("n{}", parent)),
                None => item,
            }
        })
        .collect();
    ContentTree::from_items(items).unwrap()
}

fn pick<'a>(tree: &'a ContentTree, indices: &[usize]) -> Vec<&'a Item> {
    let items = tree.items();
    indices.iter().map(|i| items[i % items.len()]).collect()
}

fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}

fn input_strategy() -> impl Strategy<Value = (Vec<Option<usize>>, Vec<usize>, Vec<usize>)> {
    (
        forest_strategy(),
        prop::collection::vec(0usize..64, 0..8),
        prop::collection::vec(0usize..64, 0..8),
    )
}

/// A non-empty collection always intersects itself.
#[test]
fn test_intersection_is_reflexive() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&input_strategy(), |(parents, a, _)| {
            let tree = build(&parents);
            let list_a = pick(&tree, &a);
            prop_assert_eq!(
                has_intersecting_hierarchy(&tree, &list_a, &list_a),
                !list_a.is_empty()
            );
            Ok(())
        })
        .unwrap();
}

/// Equal, ancestor and descendant are symmetric relations.
#[test]
fn test_intersection_is_symmetric() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&input_strategy(), |(parents, a, b)| {
            let tree = build(&parents);
            let list_a = pick(&tree, &a);
            let list_b = pick(&tree, &b);
            prop_assert_eq!(
                has_intersecting_hierarchy(&tree, &list_a, &list_b),
                has_intersecting_hierarchy(&tree, &list_b, &list_a)
            );
            Ok(())
        })
        .unwrap();
}

/// The filter keeps an ordered sub-list of A, empty exactly when A and B are disjoint.
#[test]
fn test_filter_agrees_with_predicate() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&input_strategy(), |(parents, a, b)| {
            let tree = build(&parents);
            let list_a = pick(&tree, &a);
            let list_b = pick(&tree, &b);
            let filtered = filter_intersecting_hierarchy(&tree, &list_a, &list_b);

            prop_assert_eq!(
                filtered.is_empty(),
                !has_intersecting_hierarchy(&tree, &list_a, &list_b)
            );
            let expected: Vec<String> = list_a
                .iter()
                .filter(|item| has_intersecting_hierarchy(&tree, &[**item], &list_b))
                .map(|item| item.id.to_string())
                .collect();
            prop_assert_eq!(ids(&filtered), expected);
            Ok(())
        })
        .unwrap();
}

/// Filtering twice by the same collection changes nothing.
#[test]
fn test_filter_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&input_strategy(), |(parents, a, b)| {
            let tree = build(&parents);
            let list_a = pick(&tree, &a);
            let list_b = pick(&tree, &b);
            let once = filter_intersecting_hierarchy(&tree, &list_a, &list_b);
            let twice = filter_intersecting_hierarchy(&tree, &once, &list_b);
            prop_assert_eq!(ids(&once), ids(&twice));
            Ok(())
        })
        .unwrap();
}

/// Items under different roots never intersect.
#[test]
fn test_separate_roots_are_disjoint() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(forest_strategy(), forest_strategy()), |(left, right)| {
            let offset = left.len();
            let mut parents = left;
            parents.extend(right.iter().map(|parent| parent.map(|p| p + offset)));
            let tree = build(&parents);
            let items = tree.items();
            let (left_items, right_items) = items.split_at(offset);

            let left_root = [left_items[0]];
            let right_root = [right_items[0]];
            let right_under: Vec<&Item> = std::iter::once(right_items[0])
                .chain(tree.descendants(right_items[0]))
                .collect();
            prop_assert!(!has_intersecting_hierarchy(&tree, &left_root, &right_root));
            prop_assert!(!has_intersecting_hierarchy(&tree, &left_root, &right_under));
            Ok(())
        })
        .unwrap();
}
