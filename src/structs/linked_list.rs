use std::sync::{Mutex, MutexGuard, PoisonError};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

struct Core<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

/// Singly linked list behind a mutex; every method takes `&self`.
pub struct LinkedList<T> {
    core: Mutex<Core<T>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            core: Mutex::new(Core { head: None, len: 0 }),
        }
    }

    /// Adds `value` at the tail.
    ///
    /// Complexity: O(n), the list keeps no tail pointer
    pub fn append(&self, value: T) {
        let mut core = self.lock();
        let mut cursor = &mut core.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        core.len += 1;
    }

    /// Adds `value` at the head.
    ///
    /// Complexity: O(1)
    pub fn prepend(&self, value: T) {
        let mut core = self.lock();
        let head = core.head.take();
        core.head = Some(Box::new(Node { value, next: head }));
        core.len += 1;
    }

    pub fn len(&self) -> usize {
        self.lock().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Core<T>> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Unlinks the first node equal to `value`; does nothing when no node
    /// matches.
    pub fn remove(&self, value: &T) {
        let mut guard = self.lock();
        let core = &mut *guard;
        if core.head.as_ref().is_some_and(|node| node.value == *value) {
            if let Some(mut head) = core.head.take() {
                core.head = head.next.take();
                core.len -= 1;
            }
            return;
        }
        let mut cursor = core.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.next.as_ref().is_some_and(|next| next.value == *value) {
                if let Some(mut removed) = node.next.take() {
                    node.next = removed.next.take();
                }
                core.len -= 1;
                return;
            }
            cursor = node.next.as_deref_mut();
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
