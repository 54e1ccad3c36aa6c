#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn sample() -> LinkedList<i32> {
    [1, 2, 3, 1, 1, 2, 3].into_iter().collect()
}

#[test]
fn test_node_chaining() {
    let mut node = Node::new(1);
    assert_eq!(node.next(), None, "A new node shouldn't have a next node.");

    let third = node.insert_after(3);
    assert_eq!(*third.value(), 3);
    assert_eq!(third.next(), None);

    node.insert_after(2);
    assert_eq!(
        node.next().map(|n| *n.value()),
        Some(2),
        "Inserting after a node should place the new node directly after it."
    );
    assert_eq!(
        node.next().and_then(Node::next).map(|n| *n.value()),
        Some(3),
        "The previous next node should follow the inserted one."
    );

    assert_eq!(node.set_value(10), 1);
    assert_eq!(node.to_string(), "10");

    let rest = node.take_next();
    assert_eq!(node.next(), None);
    assert_eq!(rest.map(|n| n.value), Some(2));

    let old = node.set_next(Some(Box::new(Node::new(20))));
    assert!(old.is_none());
    assert_eq!(node.next_mut().map(|n| n.set_value(21)), Some(20));
}

#[test]
fn test_head_and_tail() {
    let mut list = LinkedList::new();
    assert_eq!(list.head(), None, "An empty list has no head.");
    assert_eq!(list.tail(), None, "An empty list has no tail.");
    assert!(list.is_empty());

    list.append(1);
    list.append(2);
    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.tail(), Some(&2));
    assert!(!list.is_empty());
}

#[test]
fn test_len() {
    let mut list = LinkedList::new();
    assert_eq!(list.len(), 0);
    list.append(1);
    assert_eq!(list.len(), 1);
    list.append(2);
    assert_eq!(list.len(), 2);
    list.delete(0).unwrap();
    assert_eq!(list.len(), 1, "Length should be recomputed after a deletion.");
}

#[test]
fn test_get() {
    let mut list: LinkedList<_> = [1, 2].into_iter().collect();

    assert_eq!(list.get(0), Ok(&1));
    assert_eq!(list.get(1), Ok(&2));
    assert_eq!(list.get(2), Err(InvalidPosition { position: 2 }));
    assert_eq!(list.get(9999), Err(InvalidPosition { position: 9999 }));

    *list.get_mut(1).unwrap() = 5;
    assert_eq!(list[1], 5);

    let first = list.get_node(0).unwrap();
    let second = list.get_node(1).unwrap();
    assert_eq!(first.next(), Some(second), "Nodes should link to their successor.");
    assert!(list.get_node(9999).is_err());

    assert_panics!({
        let list: LinkedList<u8> = LinkedList::new();
        list[0]
    }, contains "Invalid position 0");
}

#[test]
fn test_append() {
    let mut list = LinkedList::new();
    let node = list.append(1);
    assert_eq!(*node.value(), 1);
    node.set_value(10);
    assert_eq!(list.head(), Some(&10), "The appended node should belong to the list.");

    list.append(2);
    assert_eq!(list.get(1), Ok(&2));
    assert_eq!(list.to_string(), "[10 2]");
}

#[test]
fn test_insert() {
    let mut list = LinkedList::new();

    assert_eq!(*list.insert(0, 1).unwrap().value(), 1);
    assert_eq!(*list.insert(1, 3).unwrap().value(), 3);
    let node = list.insert(1, 2).unwrap();
    assert_eq!(node.next().map(|n| *n.value()), Some(3));
    assert_eq!(list.to_string(), "[1 2 3]");

    assert_eq!(
        list.insert(9999, 1).map(|n| *n.value()),
        Err(InvalidPosition { position: 9999 }),
    );
    assert_eq!(
        list.insert(4, 1).map(|n| *n.value()),
        Err(InvalidPosition { position: 4 }),
        "Inserting more than one past the end should fail."
    );
    assert_eq!(list.len(), 3, "A failed insert shouldn't change the list.");
}

#[test]
fn test_push_front() {
    let mut list = LinkedList::new();
    assert_eq!(*list.push_front(2).value(), 2);
    assert_eq!(list.push_front(1).next().map(|n| *n.value()), Some(2));
    assert_eq!(list.to_string(), "[1 2]", "Pushed values should become the head.");
    assert_eq!(list.tail(), Some(&2));
}

#[test]
fn test_insert_then_get() {
    for pos in 0..=5 {
        let mut list: LinkedList<_> = (0..5).collect();
        list.insert(pos, 100).unwrap();
        assert_eq!(list.get(pos), Ok(&100), "Inserted value should be found at {pos}.");
        assert_eq!(list.len(), 6);
    }
}

#[test]
fn test_delete() {
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.delete(1), Ok(2));
    assert_eq!(list.to_string(), "[1 3]");
    assert_eq!(list.delete(9999), Err(InvalidPosition { position: 9999 }));
    assert_eq!(
        list.delete(2),
        Err(InvalidPosition { position: 2 }),
        "Deleting at the length of the list should fail."
    );

    assert_eq!(list.delete(1), Ok(3));
    assert_eq!(list.delete(0), Ok(1));
    assert_eq!(list.delete(0), Err(InvalidPosition { position: 0 }));
    assert!(list.is_empty());
}

#[test]
fn test_delete_neighbours() {
    let mut list: LinkedList<_> = (0..6).collect();
    list.delete(3).unwrap();
    assert_eq!(list.get(2), Ok(&2), "The previous neighbour should stay in place.");
    assert_eq!(list.get(3), Ok(&4), "The next neighbour should move up.");
    assert_eq!(list.len(), 5);
}

#[test]
fn test_find() {
    let list = sample();

    assert_eq!(list.find(|&v| v == 9999), None);
    assert_eq!(list.find(|&v| v == 1), Some(0));
    assert_eq!(list.find(|&v| v == 2), Some(1));
    assert_eq!(list.find(|&v| v == 3), Some(2));
}

#[test]
fn test_find_by_occurrence() {
    let list = sample();

    assert_eq!(list.find_by_occurrence(|&v| v == 9999, 1), None);
    assert_eq!(list.find_by_occurrence(|&v| v == 1, 1), Some(0));
    assert_eq!(list.find_by_occurrence(|&v| v == 1, 2), Some(3));
    assert_eq!(list.find_by_occurrence(|&v| v == 1, 3), Some(4));
    assert_eq!(list.find_by_occurrence(|&v| v == 1, 5), None);
    assert_eq!(list.find_by_occurrence(|&v| v == 1, 0), None);

    assert_eq!(list.find_by_occurrence(|&v| v == 1, -1), Some(4));
    assert_eq!(list.find_by_occurrence(|&v| v == 1, -2), Some(3));
    assert_eq!(list.find_by_occurrence(|&v| v == 1, -3), Some(0));
    assert_eq!(
        list.find_by_occurrence(|&v| v == 1, -4),
        None,
        "Counting back past the first match shouldn't resolve."
    );
}

#[test]
fn test_display() {
    let mut list = LinkedList::new();
    assert_eq!(list.to_string(), "[]");

    for i in 1..=5 {
        list.append(i);
    }
    assert_eq!(list.to_string(), "[1 2 3 4 5]");
    assert_eq!(format!("{list:?}"), "[1, 2, 3, 4, 5]");
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (0_usize..5).collect();
    let collected: LinkedList<_> = list.iter().cloned().collect();
    assert_eq!(list, collected, "Collected iter should be equal.");

    for i in list.iter_mut() {
        *i *= 2;
    }
    assert_eq!(list.to_string(), "[0 2 4 6 8]");

    list.extend([10, 12]);
    assert_eq!(
        list.into_iter().collect::<Vec<_>>(),
        [0, 2, 4, 6, 8, 10, 12],
        "Owned iteration should yield elements front to back."
    );
}

#[test]
fn test_equality_and_hash() {
    let list: LinkedList<_> = (0_usize..5).collect();

    assert_eq!(list, list.clone());
    assert_ne!(list, (0_usize..4).collect::<LinkedList<_>>());

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&list),
        state.hash_one((0_usize..5).collect::<LinkedList<_>>()),
        "Equal lists should produce the same hash."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list.delete(4));
    assert_eq!(counter.take(), 1, "A deleted element should be dropped on its own.");

    drop(list);
    assert_eq!(counter.take(), 9, "9 remaining elements should have been dropped.");

    let long: LinkedList<_> = (0..200_000).collect();
    drop(long);
}
