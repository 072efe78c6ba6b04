use crate::random::RandomSource;
use crate::randomized_tree::node::Node;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn size<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.size,
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => 1 + cmp::max(height(&node.left), height(&node.right)),
    }
}

// precondition: `node.left` is not empty
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// precondition: `node.right` is not empty
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn root_insert<T>(tree: &mut Tree<T>, key: T)
where
    T: Ord,
{
    let new_root = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                root_insert(&mut node.left, key);
                rotate_right(node)
            },
            Ordering::Greater => {
                root_insert(&mut node.right, key);
                rotate_left(node)
            },
            Ordering::Equal => node,
        },
        None => Box::new(Node::new(key)),
    };
    *tree = Some(new_root);
}

pub fn insert<T, R>(tree: &mut Tree<T>, key: T, rng: &mut R)
where
    T: Ord,
    R: RandomSource,
{
    let tree_size = match tree {
        Some(ref node) => node.size,
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return;
        },
    };

    // The new key becomes the root of a subtree of size `n` with probability `1 / (n + 1)`.
    if rng.gen_range_inclusive(0, tree_size + 1) == 0 {
        root_insert(tree, key);
        return;
    }

    if let Some(ref mut node) = tree {
        match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, rng),
            Ordering::Greater => insert(&mut node.right, key, rng),
            Ordering::Equal => return,
        }
        node.update();
    }
}

// precondition: every key in `left_tree` is less than every key in `right_tree`
pub fn join<T, R>(left_tree: Tree<T>, right_tree: Tree<T>, rng: &mut R) -> Tree<T>
where
    R: RandomSource,
{
    match (left_tree, right_tree) {
        (Some(mut left_node), Some(mut right_node)) => {
            let left_size = left_node.size;
            if rng.gen_range_inclusive(0, left_size + right_node.size) < left_size {
                let left_right_tree = left_node.right.take();
                left_node.right = join(left_right_tree, Some(right_node), rng);
                left_node.update();
                Some(left_node)
            } else {
                let right_left_tree = right_node.left.take();
                right_node.left = join(Some(left_node), right_left_tree, rng);
                right_node.update();
                Some(right_node)
            }
        },
        (new_tree, None) | (None, new_tree) => new_tree,
    }
}

pub fn remove<T, R>(tree: &mut Tree<T>, key: &T, rng: &mut R) -> Option<T>
where
    T: Ord,
    R: RandomSource,
{
    match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key, rng);
                node.update();
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key, rng);
                node.update();
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { key, left, right, .. } = *node;
                *tree = join(left, right, rng);
                Some(key)
            },
        },
        None => None,
    }
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}
