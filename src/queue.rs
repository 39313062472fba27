//! A FIFO queue over a singly linked chain with head and tail pointers.
//! Every operation is `O(1)`.
//!
//! The `head` link owns the whole chain; `tail` is a non-owning pointer to
//! the last node, kept only so `enqueue` can append without walking the
//! chain. This mirrors how the doubly linked list keeps its back
//! references: raw pointers never decide ownership or destruction.
//!
//! # Examples
//!
//! ```
//! use dsa::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::ptr::NonNull;

/// A first-in, first-out container.
pub struct Queue<T> {
    head: Option<Box<Node<T>>>,
    /// Non-owning pointer to the last node of the chain owned by `head`.
    /// `Some` exactly when `head` is `Some`.
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
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

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds a value to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let mut node = Box::new(Node { value, next: None });
        let node_ptr = NonNull::from(node.as_mut());

        match self.tail {
            Some(mut tail) => {
                // SAFETY: `tail` points at the last node of the chain owned
                // by `self.head`, and `&mut self` guarantees no other
                // reference into that chain exists right now.
                unsafe { tail.as_mut().next = Some(node) };
            }
            None => self.head = Some(node),
        }

        self.tail = Some(node_ptr);
        self.len += 1;
    }

    /// Removes and returns the least recently enqueued value, or `None` if
    /// the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue("a");
    ///
    /// assert_eq!(queue.dequeue(), Some("a"));
    /// assert_eq!(queue.dequeue(), None);
    ///
    /// // Draining the queue resets the tail, so it stays usable.
    /// queue.enqueue("b");
    /// assert_eq!(queue.peek(), Some(&"b"));
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let node = *self.head.take()?;
        self.head = node.next;
        self.len -= 1;

        if self.head.is_none() {
            // The last node just left the chain; `tail` would dangle.
            self.tail = None;
        }

        Some(node.value)
    }

    /// The least recently enqueued value, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        // Unlink the chain iteratively; deep chains would otherwise recurse
        // through the `Box` drop glue.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}
