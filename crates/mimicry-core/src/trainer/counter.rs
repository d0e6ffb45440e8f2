//! Insertion-ordered frequency counter.
//!
//! Keys keep the position of their first occurrence, so ranking by count with
//! a stable sort breaks ties by first appearance.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct OrderedCounter {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, registering it on first sight.
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// The `n` most frequent keys, highest count first.
    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // `sort_by` is stable: equal counts stay in first-occurrence order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_first_occurrence_order() {
        let mut counter = OrderedCounter::new();
        for word in ["pear", "apple", "pear", "fig"] {
            counter.add(word);
        }
        assert_eq!(counter.count("pear"), 2);
        assert_eq!(counter.count("missing"), 0);
        assert_eq!(counter.keys().collect::<Vec<_>>(), vec!["pear", "apple", "fig"]);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn test_top_breaks_ties_by_first_occurrence() {
        let mut counter = OrderedCounter::new();
        for word in ["delta", "alpha", "charlie", "alpha", "bravo", "charlie"] {
            counter.add(word);
        }
        assert_eq!(counter.top(10), vec!["alpha", "charlie", "delta", "bravo"]);
        assert_eq!(counter.top(2), vec!["alpha", "charlie"]);
    }

    #[test]
    fn test_empty_counter() {
        let counter = OrderedCounter::new();
        assert!(counter.is_empty());
        assert!(counter.top(5).is_empty());
    }
}
