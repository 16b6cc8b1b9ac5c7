/// Names of the currently open tags, innermost last
#[derive(Debug, Default, Clone)]
pub struct TagStack {
    tags: Vec<String>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Pops the innermost open tag.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Closing tags are matched against
    /// [`TagStack::peek`] before popping, so an empty pop is a reader bug.
    #[allow(clippy::expect_used)]
    pub fn pop(&mut self) -> String {
        self.tags.pop().expect("tag stack popped while empty")
    }

    pub fn peek(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_peek_pop() {
        let mut stack = TagStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);

        stack.push("root");
        stack.push("child");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some("child"));
        assert_eq!(stack.pop(), "child");
        assert_eq!(stack.pop(), "root");
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "tag stack popped while empty")]
    fn test_pop_empty_panics() {
        let mut stack = TagStack::new();
        stack.pop();
    }
}
