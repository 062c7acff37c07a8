#![cfg(test)]
#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_insert_and_contains() {
    let mut set = TreeSet::new();
    assert!(set.insert(5), "Insertion into an empty set should succeed.");
    assert!(set.insert(3));
    assert!(set.insert(8));
    assert!(
        !set.insert(5),
        "Inserting a duplicate should report it without growing the set."
    );
    assert_eq!(set.len(), 3);

    assert!(set.contains(&3));
    assert!(!set.contains(&4));
}

#[test]
fn test_in_order_iteration() {
    let set: TreeSet<_> = [5, 1, 4, 2, 3].into_iter().collect();

    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3, 4, 5],
        "In-order traversal should yield ascending order regardless of insertion order."
    );
    assert_eq!(set.iter().len(), 5);

    assert_eq!(
        set.into_iter().collect::<Vec<_>>(),
        [1, 2, 3, 4, 5],
        "Consuming iteration should also be in-order."
    );
}

#[test]
fn test_borrowed_lookup() {
    let set: TreeSet<String> = ["pear", "apple", "plum"]
        .into_iter()
        .map(String::from)
        .collect();

    assert!(
        set.contains("apple"),
        "Lookups should work through Borrow without building an owned key."
    );
    assert_eq!(set.get("plum"), Some(&String::from("plum")));
    assert_eq!(set.get("fig"), None);
}

#[test]
fn test_height() {
    let mut set = TreeSet::new();
    assert_eq!(set.height(), 0, "An empty set has no levels.");

    set.insert(2);
    set.insert(1);
    set.insert(3);
    assert_eq!(set.height(), 2, "A balanced insertion order should stay shallow.");

    let degenerate: TreeSet<_> = (1..=5).collect();
    assert_eq!(
        degenerate.height(),
        5,
        "Sorted insertion should degrade the unbalanced tree to a chain."
    );
}

#[test]
fn test_equality_ignores_shape() {
    let a: TreeSet<_> = [2, 1, 3].into_iter().collect();
    let b: TreeSet<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(a, b, "Sets with the same contents but different shapes should be equal.");
    assert_ne!(a.height(), b.height(), "The shapes really do differ.");
}

#[test]
fn test_clear() {
    let mut set: TreeSet<_> = [1, 2].into_iter().collect();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.iter().next(), None);
    assert!(set.insert(1), "A cleared set should accept previously held values.");
}
