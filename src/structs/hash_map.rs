use std::collections::HashMap as Table;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Key-value map behind a single coarse mutex; every method takes `&self`.
///
/// One lock guards the whole table and values are cloned out on `get`;
/// nothing is sharded.
pub struct HashMap<K, V> {
    items: Mutex<Table<K, V>>,
}

impl<K: Eq + Hash, V> HashMap<K, V> {
    pub fn new() -> Self {
        HashMap { items: Mutex::new(Table::new()) }
    }

    /// Inserts the pair, overwriting any value already stored under `key`.
    pub fn put(&self, key: K, value: V) {
        self.lock().insert(key, value);
    }

    /// Deletes the pair stored under `key`, if any.
    pub fn remove(&self, key: &K) {
        self.lock().remove(key);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Table<K, V>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Eq + Hash, V: Clone> HashMap<K, V> {
    /// Returns a copy of the value stored under `key`, `None` when absent.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }
}

impl<K: Eq + Hash, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_empty() {
        let map: HashMap<&str, i32> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(&"missing"), None);
    }

    #[test]
    fn put_then_get() {
        let map = HashMap::new();
        map.put("one", 1);
        map.put("two", 2);
        assert_eq!(map.get(&"one"), Some(1));
        assert_eq!(map.get(&"two"), Some(2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn put_overwrites() {
        let map = HashMap::new();
        map.put("key", 1);
        map.put("key", 2);
        assert_eq!(map.get(&"key"), Some(2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_deletes_the_pair() {
        let map = HashMap::new();
        map.put("key", 1);
        map.remove(&"key");
        assert_eq!(map.get(&"key"), None);
        assert!(map.is_empty());

        // removing again is a no-op
        map.remove(&"key");
        assert!(map.is_empty());
    }

    #[test]
    fn concurrent_puts_serialize() {
        use std::thread;
        const T: usize = 8;
        const R: usize = 250;

        let map = HashMap::new();
        thread::scope(|scope| {
            for t in 0..T {
                let map = &map;
                scope.spawn(move || {
                    for r in 0..R {
                        map.put(t * R + r, t);
                    }
                });
            }
        });
        assert_eq!(map.len(), T * R);
    }
}
