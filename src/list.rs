//! A doubly linked list. The `next` links own the chain from `head`
//! onward; `prev` and `tail` are non-owning back references used only to
//! patch links, never to decide ownership or destruction.
//!
//! End operations are `O(1)`; positional operations walk forward from the
//! head and cost `O(index)`. Positional misuse (an index past the end) is
//! reported as a distinct [`OutOfBounds`] error so it can never be mistaken
//! for the `None` that means "not found" or "empty" elsewhere in the crate.
//!
//! # Examples
//!
//! ```
//! use dsa::list::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(2);
//! list.prepend(1);
//! list.append(3);
//!
//! assert_eq!(list.get(1), Ok(&2));
//! assert_eq!(list.remove(&2), Some(2));
//! assert_eq!(list.len(), 2);
//!
//! // Inserting at the current length appends.
//! list.insert_at(9, 2).unwrap();
//! assert!(list.insert_at(9, 10).is_err());
//! ```

use std::fmt;
use std::ptr::NonNull;

/// The error returned by positional operations handed an index outside the
/// valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The index that was asked for.
    pub index: usize,
    /// The list length at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfBounds {}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
    /// Non-owning back reference. `None` exactly at the head node.
    prev: Option<NonNull<Node<T>>>,
}

/// A doubly linked list with `O(1)` end operations and `O(index)`
/// positional access.
pub struct DoublyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    /// Non-owning pointer to the last node of the chain owned by `head`.
    /// `Some` exactly when `head` is `Some`.
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Generates a new, empty `DoublyLinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The number of values currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds a value at the front of the list.
    pub fn prepend(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
            prev: None,
        }));

        let head = self.head.as_deref_mut().expect("just assigned");
        let head_ptr = NonNull::from(&mut *head);
        match head.next.as_deref_mut() {
            Some(old_head) => old_head.prev = Some(head_ptr),
            // The list was empty, so the new node is both ends.
            None => self.tail = Some(head_ptr),
        }

        self.len += 1;
    }

    /// Adds a value at the back of the list.
    pub fn append(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: None,
            prev: self.tail,
        });

        let new_tail = match self.tail {
            Some(mut tail) => {
                // SAFETY: `tail` points at the last node of the chain owned
                // by `self.head`, and `&mut self` guarantees no other
                // reference into that chain exists right now.
                let tail = unsafe { tail.as_mut() };
                tail.next = Some(node);
                NonNull::from(tail.next.as_deref_mut().expect("just assigned"))
            }
            None => {
                self.head = Some(node);
                NonNull::from(self.head.as_deref_mut().expect("just assigned"))
            }
        };

        self.tail = Some(new_tail);
        self.len += 1;
    }

    /// The value at `index`, or an [`OutOfBounds`] error when `index` is
    /// not in `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }

        let mut node = self.head.as_deref().expect("len > 0 implies a head");
        for _ in 0..index {
            node = node.next.as_deref().expect("index < len implies a next node");
        }
        Ok(&node.value)
    }

    /// Inserts a value so that it ends up at `index`. An index of 0 behaves
    /// as [`DoublyLinkedList::prepend`], an index equal to the current
    /// length behaves as [`DoublyLinkedList::append`], and anything past
    /// the length is an [`OutOfBounds`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(1);
    /// list.append(3);
    ///
    /// list.insert_at(2, 1).unwrap();
    /// assert_eq!(list.get(1), Ok(&2));
    ///
    /// let err = list.insert_at(9, 4).unwrap_err();
    /// assert_eq!(err.index, 4);
    /// assert_eq!(err.len, 3);
    /// ```
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), OutOfBounds> {
        if index > self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }

        // Interior insert: walk to the owning link of the node currently at
        // `index` and splice the new node in front of it. Neither end moves.
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("index was checked against len"),
            }
        }

        let successor = link.take().expect("index < len implies an occupied link");
        let prev = successor.prev;
        *link = Some(Box::new(Node {
            value,
            next: Some(successor),
            prev,
        }));

        let node = link.as_deref_mut().expect("just assigned");
        let node_ptr = NonNull::from(&mut *node);
        node.next
            .as_deref_mut()
            .expect("an interior insert has a successor")
            .prev = Some(node_ptr);

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`, or an [`OutOfBounds`]
    /// error when `index` is not in `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }

        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("index was checked against len"),
            }
        }

        let mut node = link.take().expect("index < len implies an occupied link");
        *link = node.next.take();
        match link.as_deref_mut() {
            // The follower inherits the removed node's back reference.
            Some(next) => next.prev = node.prev,
            // The tail was removed; its predecessor becomes the tail.
            None => self.tail = node.prev,
        }

        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the first value equal to the given one, or
    /// `None` if the list holds no such value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&2), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.iter().position(|held| held == value)?;
        self.remove_at(index).ok()
    }

    /// Visits the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink the chain iteratively; deep chains would otherwise recurse
        // through the `Box` drop glue.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

/// A front-to-back iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.value)
    }
}
