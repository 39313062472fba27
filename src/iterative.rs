//! An iterative BST. Every operation loops instead of recursing, walking
//! down the tree while holding the owning link out of the current node's
//! parent, then patching links in place once the right spot is found. The
//! external contract is identical to [`crate::recursive::Tree`]; only the
//! construction strategy differs, so the two may build differently shaped
//! (but equally valid) trees for the same operation sequence.
//!
//! # Examples
//!
//! ```
//! use dsa::iterative::Tree;
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

use crate::DuplicatePolicy;

/// A Binary Search Tree built out of iterative operations. This can be used
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
    /// use dsa::iterative::Tree;
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
        let policy = self.policy;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal if policy == DuplicatePolicy::Reject => return,
                // Equal values route right.
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new(value));
    }

    /// Potentially finds the given value in this tree. If no node holds an
    /// equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::iterative::Tree;
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
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns `true` if the tree holds a value equal to the given one.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes one node holding a value equal to the given one and returns
    /// its value. If the tree holds no such value, `None` is returned and
    /// the tree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::iterative::Tree;
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
        // Walk down to the owning link of the node holding `value`. The
        // arm that finds it binds nothing, so the loop exits without a
        // live borrow and the link can be reused below.
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => return None,
                Some(node) => value.cmp(&node.value),
            };
            match ordering {
                Ordering::Less => link = &mut link.as_mut().unwrap().left,
                Ordering::Greater => link = &mut link.as_mut().unwrap().right,
                Ordering::Equal => break,
            }
        }

        let mut node = link
            .take()
            .expect("the descent loop only breaks on an occupied link");

        match (node.left.take(), node.right.take()) {
            // A leaf detaches outright; the parent's link stays empty.
            (None, None) => Some(node.value),
            // One child is promoted into the removed node's position.
            (None, Some(child)) | (Some(child), None) => {
                *link = Some(child);
                Some(node.value)
            }
            // Two children: splice the in-order successor (the leftmost
            // node of the right subtree) out of its spot, then promote its
            // value into the removed node. The successor has no left child,
            // so splicing it out is a <=1-child unlink.
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let mut successor_link = &mut right;
                while successor_link
                    .as_deref()
                    .map_or(false, |n| n.left.is_some())
                {
                    successor_link = &mut successor_link.as_mut().unwrap().left;
                }

                let mut successor = successor_link
                    .take()
                    .expect("the successor walk only stops at an occupied link");
                *successor_link = successor.right.take();

                let removed = mem::replace(&mut node.value, successor.value);
                node.left = Some(left);
                node.right = right;
                *link = Some(node);
                Some(removed)
            }
        }
    }

    /// The smallest value in the tree, reached by descending left while a
    /// left child exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::iterative::Tree;
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
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Visits the values in the tree in sorted (in-order) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::iterative::Tree;
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
