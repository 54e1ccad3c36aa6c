use textbook_collections::collections::linked::LinkedList;
use textbook_collections::collections::stack::{ArrayStack, LinkedListStack};
use textbook_collections::collections::traits::Stack;
use textbook_collections::collections::tree::{LinkedListTree, Traversal};

fn main() {
    println!("\n[LinkedList]\n");

    let mut list: LinkedList<u32> = (1..=5).collect();
    println!("{list}");

    if let Err(err) = list.insert(9, 100) {
        println!("{err}");
    }
    if let Ok(node) = list.insert(2, 100) {
        node.set_value(10);
    }
    println!("{list}, len {}", list.len());
    println!("{:?}, {list}", list.delete(0));
    println!("first 10 at {:?}", list.find(|&v| v == 10));
    println!("last even at {:?}", list.find_by_occurrence(|v| v % 2 == 0, -1));

    println!("\n[Stacks]\n");

    let mut array = ArrayStack::with_cap(4);
    let mut linked = LinkedListStack::new();
    for i in 0..6 {
        array.push(i);
        linked.push(i);
    }
    println!("{array:?}");
    println!("{linked}");
    println!("{:?}", array.drain_top());
    println!("{:?}", linked.top());
    println!("{:?}, {linked}", linked.pop());
    println!("{:?}", array.pop());

    println!("\n[LinkedListTree]\n");

    let tree = LinkedListTree::new(1);
    let grandchildren: [&[u32]; 5] =
        [&[7, 8], &[9, 10], &[11, 12, 13], &[14, 15], &[16, 17, 18, 19, 20]];
    for (value, values) in (2..).zip(grandchildren) {
        let child = tree.append_child(value);
        for &value in values {
            child.append_child(value);
        }
    }
    print!("{tree}");

    println!();
    tree.traverse(Traversal::PostOrder, |value, depth| {
        println!("{:indent$}{value}", "", indent = depth * 4);
    });

    if let Err(err) = tree.append_sibling(0) {
        println!("\n{err}");
    }
    if let Err(err) = tree.traverse_by_code(2, |_, _| {}) {
        println!("{err}");
    }
}
