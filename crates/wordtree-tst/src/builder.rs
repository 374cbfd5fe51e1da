// Ternary search tree construction from validated words.

use wordtree_core::character::{self, END_OF_WORD, Unit};
use wordtree_core::entry::WordEntry;

use crate::char_table::CharTable;
use crate::node::{Node, Slot, Tree};

/// Output of the build stage: the raw insertion tree and the statistics
/// gathered while inserting.
#[derive(Debug, Clone, Default)]
pub struct BuiltTree {
    pub tree: Tree,
    pub chars: CharTable,
    /// Longest inserted word in code units, unclamped.
    pub max_word_length: usize,
    /// Number of insertions, duplicates included.
    pub words: usize,
}

/// Inserts words into a ternary search tree.
///
/// Each word is stored as its code units followed by an [`END_OF_WORD`]
/// sentinel. Every node on the path keeps the highest frequency of the words
/// passing through it.
#[derive(Debug, Default)]
pub struct TstBuilder {
    built: BuiltTree,
}

impl TstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a validated entry.
    pub fn insert_entry(&mut self, entry: &WordEntry) {
        self.insert(entry.word(), entry.frequency());
    }

    /// Inserts `word` with `frequency`.
    pub(crate) fn insert(&mut self, word: &str, frequency: f64) {
        let units = character::to_units(word);
        self.insert_units(&units, frequency);
    }

    /// Inserts a word given as code units. Empty input is ignored.
    ///
    /// An embedded [`END_OF_WORD`] ends the word, so a sentinel never gets a
    /// center child.
    pub(crate) fn insert_units(&mut self, units: &[Unit], frequency: f64) {
        let units = match units.iter().position(|&u| u == END_OF_WORD) {
            Some(end) => &units[..end],
            None => units,
        };
        if units.is_empty() {
            return;
        }

        let built = &mut self.built;
        built.words += 1;
        built.max_word_length = built.max_word_length.max(units.len());
        for &unit in units {
            built.chars.record(unit);
        }

        let tree = &mut built.tree;
        let mut slot = Slot::Root;
        let mut pos = 0;
        loop {
            let unit = units.get(pos).copied().unwrap_or(END_OF_WORD);
            let id = match tree.get(slot) {
                Some(id) => id,
                None => {
                    let id = tree.push(Node::new(unit));
                    tree.set(slot, Some(id));
                    id
                }
            };

            let node = &mut tree[id];
            if unit < node.unit {
                slot = Slot::Left(id);
            } else if unit > node.unit {
                slot = Slot::Right(id);
            } else {
                node.frequency = node.frequency.max(frequency);
                if pos == units.len() {
                    break;
                }
                pos += 1;
                slot = Slot::Center(id);
            }
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.built.tree
    }

    pub fn finish(self) -> BuiltTree {
        self.built
    }
}
