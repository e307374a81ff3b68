//! Bounded FIFO tabu memory.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Recently visited signatures, oldest evicted first.
///
/// Backed by a queue for eviction order and a set for O(1) lookup.
#[derive(Debug, Clone)]
pub struct TabuMemory<K> {
    capacity: usize,
    queue: VecDeque<K>,
    members: HashSet<K>,
}

impl<K: Eq + Hash + Clone> TabuMemory<K> {
    /// Creates an empty memory holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Appends `key`, then evicts from the front while over capacity.
    /// Returns the evicted keys in eviction order.
    ///
    /// A key already present keeps its place in the queue; the search
    /// only pushes signatures that passed the tabu filter.
    pub fn push(&mut self, key: K) -> Vec<K> {
        if !self.members.insert(key.clone()) {
            return Vec::new();
        }
        self.queue.push_back(key);

        let mut evicted = Vec::new();
        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.members.remove(&old);
                evicted.push(old);
            }
        }
        evicted
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_two_evicts_oldest() {
        let mut memory = TabuMemory::new(2);
        assert!(memory.push("a").is_empty());
        assert!(memory.push("b").is_empty());
        assert_eq!(memory.push("c"), vec!["a"]);

        assert!(!memory.contains(&"a"));
        assert!(memory.contains(&"b"));
        assert!(memory.contains(&"c"));
        assert_eq!(memory.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_remembers_nothing() {
        let mut memory = TabuMemory::new(0);
        assert_eq!(memory.push(1), vec![1]);
        assert!(memory.is_empty());
        assert!(!memory.contains(&1));
    }

    #[test]
    fn test_repush_keeps_fifo_order() {
        let mut memory = TabuMemory::new(2);
        memory.push(1);
        memory.push(2);
        assert!(memory.push(1).is_empty());
        assert_eq!(memory.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        // 1 is still the oldest entry.
        assert_eq!(memory.push(3), vec![1]);
        assert!(!memory.contains(&1));
        assert!(memory.contains(&2));
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut memory = TabuMemory::new(usize::MAX);
        assert!(memory.push(1).is_empty());
        assert_eq!(memory.len(), 1);
    }
}
