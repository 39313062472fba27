//! An array-backed binary heap. The backing `Vec` is read as a complete
//! binary tree through index arithmetic: the parent of index `i` is
//! `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`, so parent and
//! child addressing stay `O(1)` with no pointer chasing.
//!
//! Whether the heap is a min-heap or a max-heap is chosen at construction
//! and fixed for the life of the container.
//!
//! # Examples
//!
//! ```
//! use dsa::heap::Heap;
//!
//! let mut heap = Heap::min();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), None);
//! ```

/// The ordering mode of a [`Heap`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// `pop` returns the smallest held value.
    Min,
    /// `pop` returns the largest held value.
    Max,
}

/// A single-ended priority container over any `T: Ord`.
///
/// Invariant: for every index with children in range, the element there is
/// no worse than either child under the configured ordering (min: `<=`,
/// max: `>=`). There is no arbitrary-element removal, no decrease-key, and
/// no access to the far end.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    items: Vec<T>,
    kind: HeapKind,
}

impl<T: Ord> Heap<T> {
    /// Generates a new, empty heap with the given ordering mode.
    pub fn new(kind: HeapKind) -> Self {
        Self {
            items: Vec::new(),
            kind,
        }
    }

    /// Generates a new, empty min-heap.
    pub fn min() -> Self {
        Self::new(HeapKind::Min)
    }

    /// Generates a new, empty max-heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::heap::Heap;
    ///
    /// let mut heap = Heap::max();
    /// heap.push(5);
    /// heap.push(3);
    /// heap.push(8);
    ///
    /// assert_eq!(heap.pop(), Some(8));
    /// assert_eq!(heap.pop(), Some(5));
    /// assert_eq!(heap.pop(), Some(3));
    /// ```
    pub fn max() -> Self {
        Self::new(HeapKind::Max)
    }

    /// The ordering mode this heap was constructed with.
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// The number of values currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The best value under the configured ordering, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Adds a value to the heap, then repairs the ordering by sifting the
    /// new value up toward the root while it is better than its parent.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the best value under the configured ordering, or
    /// `None` if the heap is empty.
    ///
    /// The last element moves into the root slot and sifts down, swapping
    /// with the better of its two children until neither is better.
    /// Removing the final remaining element needs no sift-down.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let value = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        value
    }

    /// Whether `a` should sit above `b` in the tree.
    fn better(&self, a: &T, b: &T) -> bool {
        match self.kind {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.better(&self.items[index], &self.items[parent]) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = index * 2 + 1;
            let right = index * 2 + 2;
            if left >= self.items.len() {
                break;
            }

            // The better of the two children; ties go to the left child.
            let mut target = left;
            if right < self.items.len() && self.better(&self.items[right], &self.items[left]) {
                target = right;
            }

            if !self.better(&self.items[target], &self.items[index]) {
                break;
            }
            self.items.swap(target, index);
            index = target;
        }
    }
}
