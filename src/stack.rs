//! A LIFO stack over a singly linked chain with a head-only pointer. Every
//! operation is `O(1)`.
//!
//! # Examples
//!
//! ```
//! use dsa::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

/// A last-in, first-out container.
pub struct Stack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// The number of values currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Removes and returns the most recently pushed value, or `None` if the
    /// stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = *self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// The most recently pushed value, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink the chain iteratively; deep chains would otherwise recurse
        // through the `Box` drop glue.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}
