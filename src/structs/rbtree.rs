use std::sync::{Mutex, MutexGuard, PoisonError};

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

/// Index of a node in the tree's arena. Post-fixup the links around a node
/// get rewired, but the id itself stays valid for the life of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

struct Node<T> {
    value: T,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Storage and links, guarded by the tree's mutex. Nodes live in a flat
/// arena and refer to each other by index; rotations rewire links by id.
struct Core<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

/// Red-black tree ordered by a caller-supplied strict `less` predicate.
///
/// Values that compare equal (neither is `less` than the other) are kept as
/// duplicates, so the tree behaves as a multiset. Every method takes `&self`
/// and locks an internal mutex for its whole duration: concurrent callers
/// are serialized and only ever observe fully rebalanced states.
pub struct RedBlackTree<T, F> {
    core: Mutex<Core<T>>,
    less: F,
}

impl<T, F: Fn(&T, &T) -> bool> RedBlackTree<T, F> {
    /// Creates an empty tree. `less` must be a strict ordering (irreflexive
    /// and transitive), like `<` on integers.
    pub fn new(less: F) -> Self {
        RedBlackTree {
            core: Mutex::new(Core { nodes: Vec::new(), root: None }),
            less,
        }
    }

    /// Inserts `value`, keeping duplicates.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&self, value: T) {
        let mut core = self.lock();

        // descend to an empty slot; ties and greater both go right
        let mut parent = None;
        let mut went_left = false;
        let mut cursor = core.root;
        while let Some(id) = cursor {
            parent = Some(id);
            went_left = (self.less)(&value, &core.node(id).value);
            cursor = if went_left { core.node(id).left } else { core.node(id).right };
        }

        let fresh = core.push_node(value, parent);
        match parent {
            None => core.root = Some(fresh),
            Some(p) if went_left => core.node_mut(p).left = Some(fresh),
            Some(p) => core.node_mut(p).right = Some(fresh),
        }
        core.repair_after_insert(fresh);
    }

    /// Whether some element compares equal to `value`, i.e. neither is
    /// `less` than the other. Matching is up to the comparator, not `==`:
    /// a tree ordered by one field matches on that field alone.
    ///
    /// Complexity: O(log(n))
    pub fn search(&self, value: &T) -> bool {
        let core = self.lock();
        let mut cursor = core.root;
        while let Some(id) = cursor {
            let node = core.node(id);
            cursor = if (self.less)(value, &node.value) {
                node.left
            } else if (self.less)(&node.value, value) {
                node.right
            } else {
                return true;
            };
        }
        false
    }

    /// Calls `visit` for every element in ascending comparator order.
    ///
    /// The lock is held across the whole traversal, so `visit` must not
    /// touch this tree again or it will deadlock.
    pub fn in_order(&self, mut visit: impl FnMut(&T)) {
        let core = self.lock();
        let mut stack = Vec::new();
        let mut cursor = core.root;
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = core.node(id).left;
            }
            let Some(id) = stack.pop() else { break };
            visit(&core.node(id).value);
            cursor = core.node(id).right;
        }
    }

    /// Number of elements, duplicates included.
    ///
    /// Complexity: O(1)
    pub fn len(&self) -> usize {
        self.lock().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Core<T>> {
        // a poisoned mutex only means some comparator or visitor panicked
        // mid-call; the tree keeps serving whatever state that call left
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Core<T> {
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0 as usize]
    }

    fn push_node(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            value,
            // red insertion never changes black heights; repair_after_insert
            // clears the possible red-red pair instead
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });
        id
    }

    /// Restores the red-black invariants after `node` was attached as a red
    /// leaf. A red uncle means recolor and carry the violation two levels
    /// up; a black (or absent) uncle means one or two rotations end it.
    fn repair_after_insert(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.node(node).parent else { break };
            if self.node(parent).color == Color::Black {
                break;
            }
            // parent is red, so it cannot be the root and a grandparent exists
            let Some(grandparent) = self.node(parent).parent else { break };

            if self.node(grandparent).left == Some(parent) {
                match self.node(grandparent).right {
                    Some(uncle) if self.node(uncle).color == Color::Red => {
                        self.node_mut(parent).color = Color::Black;
                        self.node_mut(uncle).color = Color::Black;
                        self.node_mut(grandparent).color = Color::Red;
                        node = grandparent;
                    }
                    _ => {
                        let mid;
                        if self.node(parent).right == Some(node) {
                            // zig-zag: straighten so the new node sits
                            // between parent and grandparent
                            self.rotate_left(parent);
                            mid = node;
                            node = parent;
                        } else {
                            mid = parent;
                        }
                        self.node_mut(mid).color = Color::Black;
                        self.node_mut(grandparent).color = Color::Red;
                        self.rotate_right(grandparent);
                    }
                }
            } else {
                // mirror image: parent hangs off the grandparent's right
                match self.node(grandparent).left {
                    Some(uncle) if self.node(uncle).color == Color::Red => {
                        self.node_mut(parent).color = Color::Black;
                        self.node_mut(uncle).color = Color::Black;
                        self.node_mut(grandparent).color = Color::Red;
                        node = grandparent;
                    }
                    _ => {
                        let mid;
                        if self.node(parent).left == Some(node) {
                            self.rotate_right(parent);
                            mid = node;
                            node = parent;
                        } else {
                            mid = parent;
                        }
                        self.node_mut(mid).color = Color::Black;
                        self.node_mut(grandparent).color = Color::Red;
                        self.rotate_left(grandparent);
                    }
                }
            }
        }

        // recoloring can bubble redness all the way up; the root absorbs it
        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
    }

    /// Promotes `node`'s right child into its place; `node` becomes its left
    /// child and the pivot's old left subtree moves under `node`.
    fn rotate_left(&mut self, node: NodeId) {
        let pivot = self.node(node).right.expect("rotate_left needs a right child to promote");
        trace!("rotate_left around {node:?}, promoting {pivot:?}");

        let inner = self.node(pivot).left;
        self.node_mut(node).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        let parent = self.node(node).parent;
        self.node_mut(pivot).parent = parent;
        match parent {
            None => self.root = Some(pivot),
            Some(p) if self.node(p).left == Some(node) => self.node_mut(p).left = Some(pivot),
            Some(p) => self.node_mut(p).right = Some(pivot),
        }

        self.node_mut(pivot).left = Some(node);
        self.node_mut(node).parent = Some(pivot);
    }

    /// Mirror of [`Core::rotate_left`].
    fn rotate_right(&mut self, node: NodeId) {
        let pivot = self.node(node).left.expect("rotate_right needs a left child to promote");
        trace!("rotate_right around {node:?}, promoting {pivot:?}");

        let inner = self.node(pivot).right;
        self.node_mut(node).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        let parent = self.node(node).parent;
        self.node_mut(pivot).parent = parent;
        match parent {
            None => self.root = Some(pivot),
            Some(p) if self.node(p).left == Some(node) => self.node_mut(p).left = Some(pivot),
            Some(p) => self.node_mut(p).right = Some(pivot),
        }

        self.node_mut(pivot).right = Some(node);
        self.node_mut(node).parent = Some(pivot);
    }
}
