#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::traits::Stack;
use crate::util::alloc::CountedDrop;

fn check_lifo<S: Stack<usize> + Default>() {
    let mut stack = S::default();
    for i in 0..100 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 100);
    assert_eq!(
        stack.drain_top(),
        (0..100).rev().collect::<Vec<_>>(),
        "Popping should yield the exact reverse of the push order."
    );
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackEmpty));
}

fn check_empty<S: Stack<u8> + Default>() {
    let mut stack = S::default();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.pop(), Err(StackEmpty), "Popping an empty stack should fail.");
    assert_eq!(stack.top(), Err(StackEmpty), "Peeking an empty stack should fail.");
    assert_eq!(stack.top_mut(), Err(StackEmpty));
}

fn check_top<S: Stack<u8> + Default>() {
    let mut stack = S::default();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.top(), Ok(&3));
    assert_eq!(stack.len(), 3, "Peeking shouldn't remove anything.");

    stack.push(5);
    assert_eq!(stack.top(), Ok(&5));
    assert_eq!(stack.len(), 4);

    if let Ok(top) = stack.top_mut() {
        *top = 50;
    }
    assert_eq!(stack.pop(), Ok(50));
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.len(), 2);

    stack.push(5);
    assert_eq!(stack.pop(), Ok(5));
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_lifo() {
    check_lifo::<ArrayStack<usize>>();
    check_lifo::<SliceStack<usize>>();
    check_lifo::<LinkedListStack<usize>>();
}

#[test]
fn test_empty() {
    check_empty::<ArrayStack<u8>>();
    check_empty::<LinkedListStack<u8>>();
}

#[test]
fn test_top() {
    check_top::<ArrayStack<u8>>();
    check_top::<LinkedListStack<u8>>();
}

#[test]
fn test_array_stack_capacity() {
    let stack: ArrayStack<u8> = ArrayStack::new();
    assert!(stack.cap() >= DEFAULT_CAP, "The default capacity hint should be honoured.");

    let mut stack = ArrayStack::with_cap(2);
    for i in 0..10 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 10, "Capacity should never limit the stack.");
    assert!(stack.cap() >= 10);
}

#[test]
fn test_iteration_order() {
    let array: ArrayStack<_> = (1..=3).collect();
    let linked: LinkedListStack<_> = (1..=3).collect();

    assert_eq!(array.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(
        linked.iter().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "Both stacks should iterate from the top down."
    );
    assert_eq!(linked.to_string(), "[3 2 1]");
}

#[test]
fn test_equality() {
    let mut a: ArrayStack<_> = (0..5).collect();
    let b = a.clone();
    assert_eq!(a, b);
    a.pop().unwrap();
    assert_ne!(a, b);

    let mut c: LinkedListStack<_> = (0..5).collect();
    assert_eq!(c, c.clone());
    c.push(9);
    assert_ne!(c, (0..5).collect::<LinkedListStack<_>>());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();

    let array: ArrayStack<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(array);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let mut linked: LinkedListStack<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(linked.pop());
    assert_eq!(counter.take(), 1);
    drop(linked);
    assert_eq!(counter.take(), 9, "9 remaining elements should have been dropped.");
}
