use crate::random::RandomSource;
use crate::randomized_tree::display::TreeDisplay;
use crate::randomized_tree::node::Node;
use crate::randomized_tree::tree;
use rand::XorShiftRng;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented by a randomized binary search tree.
///
/// A randomized binary search tree keeps no balance metadata besides the size of every subtree.
/// When a key is inserted into a subtree of size `n`, it becomes the root of that subtree with
/// probability `1 / (n + 1)`, and when a key is removed, its two subtrees are joined by picking
/// each root with probability proportional to its subtree size. The resulting tree has the same
/// distribution as a tree built by inserting its keys in a uniformly random order, so the
/// expected height is proportional to the logarithm of the number of keys regardless of the order
/// of operations.
///
/// # Examples
/// ```
/// use randomized_bst::randomized_tree::RandomizedSet;
///
/// let mut set = RandomizedSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RandomizedSet<T, R = XorShiftRng> {
    root: tree::Tree<T>,
    rng: R,
}

impl<T> RandomizedSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RandomizedSet<T>` whose random source is seeded from the
    /// operating system.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let set: RandomizedSet<u32> = RandomizedSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(rand::weak_rng())
    }
}

impl<T, R> RandomizedSet<T, R>
where
    T: Ord,
    R: RandomSource,
{
    /// Constructs a new, empty `RandomizedSet<T, R>` that draws from a particular random source.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    /// let mut set = RandomizedSet::with_rng(rng);
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        RandomizedSet { root: None, rng }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already in the set. If the
    /// key already exists, the set keeps the same keys, although its shape may change.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let RandomizedSet {
            ref mut root,
            ref mut rng,
        } = self;
        let prev_len = tree::size(root);
        tree::insert(root, key, rng);
        tree::size(root) > prev_len
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let RandomizedSet {
            ref mut root,
            ref mut rng,
        } = self;
        tree::remove(root, key, rng)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.root)
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let set: RandomizedSet<u32> = RandomizedSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree, which is the number of nodes on the longest path from the
    /// root to a leaf. The height is recomputed on every call and takes linear time.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert(1);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RandomizedSetIter<T> {
        RandomizedSetIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T, R> RandomizedSet<T, R> {
    /// Returns a value that writes the shape of the tree, one node per line, when formatted with
    /// `{}`.
    ///
    /// # Examples
    /// ```
    /// use randomized_bst::randomized_tree::RandomizedSet;
    ///
    /// let mut set = RandomizedSet::new();
    /// set.insert(1);
    /// assert_eq!(set.tree_display().to_string(), "key: 1 size: 1 height: 1\n");
    /// ```
    pub fn tree_display(&self) -> TreeDisplay<T> {
        TreeDisplay { root: &self.root }
    }
}

impl<T, R> IntoIterator for RandomizedSet<T, R> {
    type Item = T;
    type IntoIter = RandomizedSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, R> IntoIterator for &'a RandomizedSet<T, R>
where
    T: 'a + Ord,
    R: RandomSource,
{
    type Item = &'a T;
    type IntoIter = RandomizedSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RandomizedSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RandomizedSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for RandomizedSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `RandomizedSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RandomizedSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for RandomizedSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key, ref right, ..
            } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for RandomizedSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Extend<T> for RandomizedSet<T, R>
where
    T: Ord,
    R: RandomSource,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RandomizedSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, R> fmt::Debug for RandomizedSet<T, R>
where
    T: Ord + fmt::Debug,
    R: RandomSource,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
