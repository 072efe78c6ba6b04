//! A randomized binary search tree that stays balanced with high probability.
//!
//! The tree stores nothing but keys and subtree sizes. Insertions and deletions make
//! size-weighted random choices so that the shape of the tree is always distributed as if its
//! keys had been inserted in a uniformly random order, giving an expected height proportional to
//! the logarithm of the number of keys even when keys arrive in sorted order.

pub mod random;
pub mod randomized_tree;
