//! Ordered, key-addressed doubly-linked list.
//!
//! Every logical set in the graph (the graph's vertices and edges, a
//! vertex's incoming and outgoing edges, a marker's members) is one of
//! these lists. Links live in a node table keyed by the element's handle,
//! so insertion and removal are O(1) and only need the key. A key is
//! attached exactly when it has a node in the table; removing a detached
//! key is a no-op.

use std::collections::HashMap;
use std::hash::Hash;

struct Node<K, V> {
    prev: Option<K>,
    next: Option<K>,
    value: V,
}

/// Insertion-ordered list of unique keys, each carrying a value.
pub struct OrderedList<K, V = ()> {
    nodes: HashMap<K, Node<K, V>>,
    head: Option<K>,
    tail: Option<K>,
}

impl<K: Copy + Eq + Hash, V> OrderedList<K, V> {
    /// Create a new, empty list.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of attached keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `key` is currently attached.
    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.nodes.get(key).map(|n| &n.value)
    }

    /// Mutable value stored for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.nodes.get_mut(key).map(|n| &mut n.value)
    }

    /// First key in list order.
    pub fn front(&self) -> Option<K> {
        self.head
    }

    /// Last key in list order.
    pub fn back(&self) -> Option<K> {
        self.tail
    }

    /// Append `key` at the tail. Returns false, leaving the list untouched,
    /// if the key is already attached.
    pub fn push_back(&mut self, key: K, value: V) -> bool {
        if self.nodes.contains_key(&key) {
            return false;
        }
        let node = Node {
            prev: self.tail,
            next: None,
            value,
        };
        match self.tail {
            Some(tail) => self.set_next(tail, Some(key)),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.nodes.insert(key, node);
        true
    }

    /// Insert `key` at the head. Returns false if the key is already attached.
    pub fn push_front(&mut self, key: K, value: V) -> bool {
        if self.nodes.contains_key(&key) {
            return false;
        }
        let node = Node {
            prev: None,
            next: self.head,
            value,
        };
        match self.head {
            Some(head) => self.set_prev(head, Some(key)),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.nodes.insert(key, node);
        true
    }

    /// Detach `key`, returning its value. Detaching a key that is not
    /// attached returns None and changes nothing.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.nodes.remove(key)?;
        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    /// Detach and return the first entry.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let key = self.head?;
        self.remove(&key).map(|value| (key, value))
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterate over `(key, value)` pairs in list order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Iterate over keys in list order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Snapshot of the keys, for walks that mutate the list as they go.
    pub fn to_vec(&self) -> Vec<K> {
        self.keys().collect()
    }

    // Neighbour links always point at attached keys.
    fn set_next(&mut self, key: K, next: Option<K>) {
        if let Some(node) = self.nodes.get_mut(&key) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, key: K, prev: Option<K>) {
        if let Some(node) = self.nodes.get_mut(&key) {
            node.prev = prev;
        }
    }
}

impl<K: Copy + Eq + Hash, V> Default for OrderedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash + std::fmt::Debug, V> std::fmt::Debug for OrderedList<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// Iterator over an [`OrderedList`] in list order.
pub struct Iter<'a, K, V> {
    list: &'a OrderedList<K, V>,
    cursor: Option<K>,
    remaining: usize,
}

impl<'a, K: Copy + Eq + Hash, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = self.list.nodes.get(&key)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Copy + Eq + Hash, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K: Copy + Eq + Hash, V> IntoIterator for &'a OrderedList<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
