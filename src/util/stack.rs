/// A last-in, first-out stack backed by a `Vec`.
///
/// The end of the vector is the top of the stack.
///
/// ## Example
/// ```
/// use stackcalc::util::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Places `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Removes and returns the top element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
