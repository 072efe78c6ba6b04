use crate::randomized_tree::tree;

/// A struct representing an internal node of a randomized binary search tree.
pub struct Node<T> {
    pub key: T,
    pub size: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut size,
            ref left,
            ref right,
            ..
        } = self;
        *size = 1 + tree::size(left) + tree::size(right);
    }
}
