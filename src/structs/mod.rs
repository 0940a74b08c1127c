mod bst;
mod hash_map;
mod linked_list;
mod queue;
mod rbtree;
mod stack;

pub use bst::BinarySearchTree;
pub use hash_map::HashMap;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use rbtree::RedBlackTree;
pub use stack::Stack;
