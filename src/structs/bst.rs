use std::sync::{Mutex, MutexGuard, PoisonError};

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

struct Core<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

/// Plain (unbalanced) binary search tree ordered by a caller-supplied strict
/// `less` predicate, with the same locking contract as
/// [`RedBlackTree`](crate::structs::RedBlackTree): one mutex per instance,
/// every method `&self`.
///
/// Ties go right, so duplicates are kept. Sorted input degenerates into a
/// linked list; use the red-black tree when that matters.
pub struct BinarySearchTree<T, F> {
    core: Mutex<Core<T>>,
    less: F,
}

impl<T, F: Fn(&T, &T) -> bool> BinarySearchTree<T, F> {
    pub fn new(less: F) -> Self {
        BinarySearchTree {
            core: Mutex::new(Core { root: None, len: 0 }),
            less,
        }
    }

    /// Complexity: O(height), which is O(n) in the worst case
    pub fn insert(&self, value: T) {
        let mut core = self.lock();
        let root = core.root.take();
        core.root = Some(self.insert_node(root, value));
        core.len += 1;
    }

    fn insert_node(&self, node: Option<Box<Node<T>>>, value: T) -> Box<Node<T>> {
        match node {
            None => Box::new(Node { value, left: None, right: None }),
            Some(mut node) => {
                if (self.less)(&value, &node.value) {
                    node.left = Some(self.insert_node(node.left.take(), value));
                } else {
                    node.right = Some(self.insert_node(node.right.take(), value));
                }
                node
            }
        }
    }

    /// Whether some element compares equal to `value` under the comparator.
    pub fn search(&self, value: &T) -> bool {
        let core = self.lock();
        let mut cursor = core.root.as_deref();
        while let Some(node) = cursor {
            cursor = if (self.less)(value, &node.value) {
                node.left.as_deref()
            } else if (self.less)(&node.value, value) {
                node.right.as_deref()
            } else {
                return true;
            };
        }
        false
    }

    /// Calls `visit` for every element in ascending comparator order. Holds
    /// the lock for the whole walk, so `visit` must not touch this tree.
    pub fn in_order(&self, mut visit: impl FnMut(&T)) {
        let core = self.lock();
        Self::visit_in_order(core.root.as_deref(), &mut visit);
    }

    fn visit_in_order(node: Option<&Node<T>>, visit: &mut impl FnMut(&T)) {
        if let Some(node) = node {
            Self::visit_in_order(node.left.as_deref(), visit);
            visit(&node.value);
            Self::visit_in_order(node.right.as_deref(), visit);
        }
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
