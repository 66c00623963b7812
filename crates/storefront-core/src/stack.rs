//! # Stack
//!
//! A generic last-in-first-out container owned by a single caller.
//!
//! Popping or peeking an empty stack is a programming mistake, not bad user
//! input, so it is reported through [`CoreError::EmptyStack`].

use crate::error::{CoreError, CoreResult};

/// LIFO container.
///
/// ## Example
/// ```rust
/// use storefront_core::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.size(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Places `item` on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> CoreResult<T> {
        self.items
            .pop()
            .ok_or(CoreError::EmptyStack { operation: "pop" })
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> CoreResult<&T> {
        self.items
            .last()
            .ok_or(CoreError::EmptyStack { operation: "peek" })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
