/// LIFO stack used by the shunting-yard converter and the postfix replay.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Pop the top `N` items at once, deepest first.
    ///
    /// Returns `None` and leaves the stack untouched if fewer than `N` items are present.
    pub fn pop_n<const N: usize>(&mut self) -> Option<[T; N]> {
        if self.items.len() < N {
            return None;
        }
        let tail = self.items.split_off(self.items.len() - N);
        tail.try_into().ok()
    }
}
