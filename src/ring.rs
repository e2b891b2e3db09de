// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Bounded FIFO ring backing the history and PID records.
// Author: Lukas Bower

//! Bounded FIFO ring backing the history and PID records.

use std::collections::VecDeque;

/// Fixed-capacity FIFO collection.
///
/// Pushing past capacity evicts the oldest entry first, so the ring always
/// holds the most recent `capacity` values in insertion order.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> Ring<T> {
    /// Create an empty ring holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, evicting the oldest entry when the ring is full.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(value);
    }

    /// Entry at `index`, counting from the oldest stored value.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Number of stored entries. Never exceeds the capacity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut ring = Ring::new(4);
        for value in ["a", "b", "c"] {
            ring.push(value);
        }
        let stored: Vec<_> = ring.iter().copied().collect();
        assert_eq!(stored, vec!["a", "b", "c"]);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn push_past_capacity_evicts_oldest() {
        let mut ring = Ring::new(3);
        for value in 0..5 {
            ring.push(value);
        }
        let stored: Vec<_> = ring.iter().copied().collect();
        assert_eq!(stored, vec![2, 3, 4]);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn get_is_indexed_from_oldest() {
        let mut ring = Ring::new(2);
        ring.push("old");
        ring.push("new");
        ring.push("newest");
        assert_eq!(ring.get(0), Some(&"new"));
        assert_eq!(ring.get(1), Some(&"newest"));
        assert_eq!(ring.get(2), None);
    }

    #[test]
    fn zero_capacity_ring_stays_empty() {
        let mut ring = Ring::new(0);
        ring.push(1);
        assert!(ring.is_empty());
    }
}
