//! Binary min-heap used to schedule Huffman merges.
//!
//! Entries are ordered by `(priority, sequence)`, where `sequence` is the
//! insertion counter. Among equal priorities the entry inserted first is
//! removed first, which keeps code tables reproducible across runs.

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: u64,
    sequence: u64,
    item: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (u64, u64) {
        (self.priority, self.sequence)
    }
}

/// A min-priority queue that owns its items.
///
/// # Example
///
/// ```
/// use ascii_huffman::PriorityScheduler;
///
/// let mut queue = PriorityScheduler::new();
/// queue.insert("late", 5);
/// queue.insert("first", 1);
/// queue.insert("second", 1);
/// assert_eq!(queue.peek_min_priority(), Some(1));
/// assert_eq!(queue.remove_min(), Some("first"));
/// assert_eq!(queue.remove_min(), Some("second"));
/// assert_eq!(queue.remove_min(), Some("late"));
/// assert_eq!(queue.remove_min(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityScheduler<T> {
    entries: Vec<Entry<T>>,
    next_sequence: u64,
}

impl<T> Default for PriorityScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityScheduler<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityScheduler {
            entries: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `item` with the given priority. O(log n).
    pub fn insert(&mut self, item: T, priority: u64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push(Entry {
            priority,
            sequence,
            item,
        });
        self.sift_up(self.entries.len() - 1);
    }

    /// Priority of the minimum entry, or `None` when empty. O(1).
    pub fn peek_min_priority(&self) -> Option<u64> {
        self.entries.first().map(|e| e.priority)
    }

    /// Removes the minimum entry and returns its item. O(log n).
    pub fn remove_min(&mut self) -> Option<T> {
        self.remove_min_entry().map(|(item, _)| item)
    }

    /// Removes the minimum entry and returns it with its priority.
    pub fn remove_min_entry(&mut self) -> Option<(T, u64)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        self.sift_down(0);
        Some((entry.item, entry.priority))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].key() >= self.entries[parent].key() {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].key() < self.entries[smallest].key() {
                smallest = left;
            }
            if right < len && self.entries[right].key() < self.entries[smallest].key() {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2].key() <= self.entries[i].key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty() {
        let mut queue: PriorityScheduler<u8> = PriorityScheduler::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek_min_priority(), None);
        assert_eq!(queue.remove_min(), None);
        assert_eq!(queue.remove_min_entry(), None);
    }

    #[test]
    fn test_orders_by_priority() {
        let mut queue = PriorityScheduler::new();
        for (item, priority) in [('d', 40), ('a', 10), ('c', 30), ('b', 20)] {
            queue.insert(item, priority);
        }
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.remove_min_entry(), Some(('a', 10)));
        assert_eq!(queue.remove_min_entry(), Some(('b', 20)));
        assert_eq!(queue.remove_min_entry(), Some(('c', 30)));
        assert_eq!(queue.remove_min_entry(), Some(('d', 40)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_priorities_are_fifo() {
        let mut queue = PriorityScheduler::new();
        for i in 0..128u32 {
            queue.insert(i, 0);
        }
        for i in 0..128u32 {
            assert_eq!(queue.remove_min(), Some(i));
        }
    }

    #[test]
    fn test_fifo_survives_interleaving() {
        let mut queue = PriorityScheduler::new();
        queue.insert("x1", 3);
        queue.insert("y", 1);
        queue.insert("x2", 3);
        assert_eq!(queue.remove_min(), Some("y"));
        queue.insert("x3", 3);
        assert_eq!(queue.remove_min(), Some("x1"));
        assert_eq!(queue.remove_min(), Some("x2"));
        assert_eq!(queue.remove_min(), Some("x3"));
    }

    #[test]
    fn test_random_matches_sorted() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut queue = PriorityScheduler::with_capacity(500);
        let mut expected = Vec::new();
        for i in 0..500usize {
            let priority = rng.gen_range(0..50u64);
            queue.insert(i, priority);
            expected.push((priority, i));
            assert!(queue.is_valid_heap());
        }
        expected.sort();
        for (priority, i) in expected {
            assert_eq!(queue.peek_min_priority(), Some(priority));
            assert_eq!(queue.remove_min_entry(), Some((i, priority)));
            assert!(queue.is_valid_heap());
        }
    }
}
