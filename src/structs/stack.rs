use std::sync::{Mutex, MutexGuard, PoisonError};

/// Last-in-first-out stack behind a mutex; every method takes `&self`.
pub struct Stack<T> {
    items: Mutex<Vec<T>>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Mutex::new(Vec::new()) }
    }

    pub fn push(&self, item: T) {
        self.lock().push(item);
    }

    /// Removes and returns the top item, `None` when empty.
    pub fn pop(&self) -> Option<T> {
        self.lock().pop()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a copy of the top item without removing it, `None` when empty.
    pub fn peek(&self) -> Option<T> {
        self.lock().last().cloned()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
