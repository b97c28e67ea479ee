use serde::Serialize;
use std::collections::HashMap;

/// Frequency map that remembers the order keys were first seen.
///
/// Sorting by count is stable, so equal counts keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

/// A tally row ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyEntry {
    pub key: String,
    pub count: usize,
}

/// The highest-count key of a tally and its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEntry {
    pub key: String,
    pub count: usize,
    pub percentage: f64,
}

/// Rendered form of a tally: rows plus derived statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyStats {
    pub entries: Vec<TallyEntry>,
    pub total: usize,
    pub unique: usize,
    pub top: Option<TopEntry>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`, inserting it at zero first if unseen
    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    /// Entries by count descending, ties in first-seen order
    pub fn sorted(&self) -> Vec<TallyEntry> {
        let mut rows: Vec<TallyEntry> = self
            .entries
            .iter()
            .map(|(key, count)| TallyEntry {
                key: key.clone(),
                count: *count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    /// Highest-count key; the earliest seen wins a tie
    pub fn top(&self) -> Option<TopEntry> {
        let total = self.total();
        self.sorted().into_iter().next().map(|row| TopEntry {
            percentage: percentage(row.count, total),
            key: row.key,
            count: row.count,
        })
    }

    pub fn stats(&self) -> TallyStats {
        TallyStats {
            entries: self.sorted(),
            total: self.total(),
            unique: self.unique(),
            top: self.top(),
        }
    }
}

/// `part` as a percentage of `total`, 0 when there is nothing to divide by
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_or_insert() {
        let mut tally = Tally::new();
        tally.increment("/a");
        tally.increment("/b");
        tally.increment("/a");

        assert_eq!(tally.get("/a"), 2);
        assert_eq!(tally.get("/b"), 1);
        assert_eq!(tally.get("/missing"), 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.unique(), 2);
    }

    #[test]
    fn test_sorted_ties_keep_first_seen_order() {
        let mut tally = Tally::new();
        for key in ["/z", "/y", "/x", "/x"] {
            tally.increment(key);
        }

        let keys: Vec<_> = tally.sorted().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["/x", "/z", "/y"]);
    }

    #[test]
    fn test_top_with_percentage() {
        let mut tally = Tally::new();
        for key in ["GET", "GET", "GET", "POST"] {
            tally.increment(key);
        }

        let top = tally.top().unwrap();
        assert_eq!(top.key, "GET");
        assert_eq!(top.count, 3);
        assert!((top.percentage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_tally_has_no_top() {
        let stats = Tally::new().stats();
        assert!(stats.entries.is_empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique, 0);
        assert!(stats.top.is_none());
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
