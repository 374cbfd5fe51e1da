// Global character occurrence counts.

use hashbrown::HashMap;
use wordtree_core::character::Unit;

/// Occurrence count of every code unit across all inserted words.
///
/// Entries keep the order in which each unit was first seen. That order is
/// the tie-break when the table is sorted by count, which makes the encoded
/// table deterministic.
#[derive(Debug, Clone, Default)]
pub struct CharTable {
    index: HashMap<Unit, usize>,
    entries: Vec<(Unit, u32)>,
}

impl CharTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `unit`.
    pub fn record(&mut self, unit: Unit) {
        match self.index.get(&unit) {
            Some(&i) => {
                let count = &mut self.entries[i].1;
                *count = count.saturating_add(1);
            }
            None => {
                self.index.insert(unit, self.entries.len());
                self.entries.push((unit, 1));
            }
        }
    }

    /// Number of distinct code units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of `unit` (`0` if never seen).
    pub fn count(&self, unit: Unit) -> u32 {
        self.index.get(&unit).map_or(0, |&i| self.entries[i].1)
    }

    /// Entries sorted by descending count, ties in first-seen order.
    pub fn sorted(&self) -> Vec<(Unit, u32)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}
