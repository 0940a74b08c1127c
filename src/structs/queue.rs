use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// First-in-first-out queue behind a mutex; every method takes `&self`.
///
/// Backed by a ring buffer, so both ends are O(1).
pub struct Queue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue { items: Mutex::new(VecDeque::new()) }
    }

    pub fn enqueue(&self, item: T) {
        self.lock().push_back(item);
    }

    /// Removes and returns the front item, `None` when empty.
    pub fn dequeue(&self) -> Option<T> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Queue<T> {
    /// Returns a copy of the front item without removing it, `None` when
    /// empty.
    pub fn peek(&self) -> Option<T> {
        self.lock().front().cloned()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
