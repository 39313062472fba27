//! A recursive BST. Every operation recurses through the subtrees,
//! threading ownership of each subtree root through the call and rebuilding
//! the child links on the way back up. This keeps the borrow story trivial:
//! a recursive call owns the subtree it is reshaping and hands the
//! (possibly reattached) root back to its caller.
//!
//! # Examples
//!
//! ```
//! use dsa::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::queue::Queue;
use crate::DuplicatePolicy;

/// A Binary Search Tree built out of recursive operations. This can be used
/// for inserting, finding, and removing values. Equal values route right by
/// default; see [`DuplicatePolicy`] for the alternative.
#[derive(Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    policy: DuplicatePolicy,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` that stores duplicate values as
    /// distinct nodes.
    pub fn new() -> Self {
        Self::with_duplicate_policy(DuplicatePolicy::Allow)
    }

    /// Generates a new, empty `Tree` with the given duplicate policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::recursive::Tree;
    /// use dsa::DuplicatePolicy;
    ///
    /// let mut tree = Tree::with_duplicate_policy(DuplicatePolicy::Reject);
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn with_duplicate_policy(policy: DuplicatePolicy) -> Self {
        Self { root: None, policy }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree. This always succeeds: equal
    /// values descend into the right subtree (under the default
    /// [`DuplicatePolicy::Allow`]) and attach as distinct leaf nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let root = self.root.take();
        self.root = Some(insert_node(root, value, self.policy));
    }

    /// Potentially finds the given value in this tree. If no node holds an
    /// equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        find_node(self.root.as_deref(), value)
    }

    /// Returns `true` if the tree holds a value equal to the given one.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Returns `true` if the tree holds a value equal to the given one,
    /// found by a level-order walk rather than an ordered descent. The
    /// frontier is the crate's own [`Queue`].
    ///
    /// This visits every node in the worst case; [`Tree::contains`] is the
    /// `O(height)` way to answer the same question.
    pub fn contains_breadth_first(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut frontier = Queue::new();
        if let Some(root) = self.root.as_deref() {
            frontier.enqueue(root);
        }

        while let Some(node) = frontier.dequeue() {
            if node.value == *value {
                return true;
            }
            if let Some(left) = node.left.as_deref() {
                frontier.enqueue(left);
            }
            if let Some(right) = node.right.as_deref() {
                frontier.enqueue(right);
            }
        }

        false
    }

    /// Removes one node holding a value equal to the given one and returns
    /// its value. If the tree holds no such value, `None` is returned and
    /// the tree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = remove_node(self.root.take(), value);
        self.root = root;
        removed
    }

    /// The smallest value in the tree, reached by descending left while a
    /// left child exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(8);
    ///
    /// assert_eq!(tree.min(), Some(&3));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(min_node)
    }

    /// Visits the values in the tree in sorted (in-order) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let values: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

fn insert_node<T>(node: Option<Box<Node<T>>>, value: T, policy: DuplicatePolicy) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match node {
        None => return Node::new(value),
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), value, policy)),
        Ordering::Equal if policy == DuplicatePolicy::Reject => {}
        // Equal values route right.
        Ordering::Equal | Ordering::Greater => {
            node.right = Some(insert_node(node.right.take(), value, policy))
        }
    }

    node
}

fn find_node<'a, T>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    let node = node?;
    match value.cmp(&node.value) {
        Ordering::Less => find_node(node.left.as_deref(), value),
        Ordering::Equal => Some(&node.value),
        Ordering::Greater => find_node(node.right.as_deref(), value),
    }
}

/// Removes one node equal to `value` from the subtree rooted at `node`,
/// returning the rebuilt subtree root and the removed value.
fn remove_node<T>(node: Option<Box<Node<T>>>, value: &T) -> (Option<Box<Node<T>>>, Option<T>)
where
    T: Ord,
{
    let mut node = match node {
        None => return (None, None),
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove_node(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove_node(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // A leaf detaches outright.
            (None, None) => (None, Some(node.value)),
            // One child is promoted into the removed node's position.
            (None, Some(child)) | (Some(child), None) => (Some(child), Some(node.value)),
            // Two children: overwrite with the in-order successor (the
            // minimum of the right subtree) and splice the successor out.
            // That removal is always a <=1-child removal, so it bottoms out
            // in one further step.
            (Some(left), Some(right)) => {
                let (right, successor) = remove_min(right);
                let removed = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                (Some(node), Some(removed))
            }
        },
    }
}

/// Detaches the minimum node of the subtree rooted at `node`, returning the
/// rebuilt subtree root and the detached value.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
    match node.left.take() {
        None => (node.right.take(), node.value),
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(node), min)
        }
    }
}

fn min_node<T>(node: &Node<T>) -> &T {
    match node.left.as_deref() {
        None => &node.value,
        Some(left) => min_node(left),
    }
}

/// An in-order iterator over a [`Tree`], yielding values in sorted order.
pub struct Iter<'a, T> {
    /// Nodes whose value (and right subtree) are still to be visited, in
    /// descend-left order.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}
