use crate::randomized_tree::tree::{self, Tree};
use std::cmp;
use std::fmt;

/// A diagnostic view of the shape of a `RandomizedSet<T>`.
///
/// Each node is written on its own line in pre-order as `key: K size: S height: H`, indented by
/// two spaces per level of depth.
pub struct TreeDisplay<'a, T>
where
    T: 'a,
{
    pub(crate) root: &'a Tree<T>,
}

impl<'a, T> fmt::Display for TreeDisplay<'a, T>
where
    T: 'a + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack = Vec::new();
        if let Some(ref node) = self.root {
            stack.push((node, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            writeln!(
                f,
                "{:indent$}key: {} size: {} height: {}",
                "",
                node.key,
                node.size,
                1 + cmp::max(tree::height(&node.left), tree::height(&node.right)),
                indent = depth * 2,
            )?;
            if let Some(ref right_node) = node.right {
                stack.push((right_node, depth + 1));
            }
            if let Some(ref left_node) = node.left {
                stack.push((left_node, depth + 1));
            }
        }
        Ok(())
    }
}
