// DictionaryCompiler: validate -> build -> balance -> serialize -> encode.
//
// Each stage consumes the previous stage's output. Compilation is a pure,
// single-threaded transform of the word list; the only failure points are
// input validation and the addressable size of the record section.

use serde::Deserialize;
use wordtree_core::entry::{self, RawEntry, WordEntry};
use wordtree_core::frequency::DEFAULT_FREQUENCY;

use crate::CompileError;
use crate::balance::balance;
use crate::builder::TstBuilder;
use crate::char_table::CharTable;
use crate::dump;
use crate::encoder;
use crate::format::MAX_NEXT_OFFSET;
use crate::layout::{self, Layout};
use crate::node::Tree;

/// Compiler settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Frequency given to bare words. Must lie in `[0, 1)`.
    pub default_frequency: f64,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_frequency: DEFAULT_FREQUENCY,
        }
    }
}

/// Size figures of one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileStats {
    /// Inserted words, duplicates included.
    pub words: usize,
    /// Tree nodes, i.e. node records in the blob.
    pub nodes: usize,
    /// Longest word in code units, before clamping.
    pub max_word_length: usize,
    /// Character table entries.
    pub distinct_chars: usize,
    /// Total blob size in bytes.
    pub blob_len: usize,
}

/// A balanced and laid-out dictionary, ready to be encoded.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tree: Tree,
    layout: Layout,
    chars: CharTable,
    max_word_length: usize,
    words: usize,
}

impl Dictionary {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn chars(&self) -> &CharTable {
        &self.chars
    }

    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    pub fn stats(&self) -> CompileStats {
        CompileStats {
            words: self.words,
            nodes: self.tree.len(),
            max_word_length: self.max_word_length,
            distinct_chars: self.chars.len(),
            blob_len: encoder::encoded_len(&self.chars, &self.layout),
        }
    }

    /// Encodes the dictionary blob.
    pub fn to_bytes(&self) -> Vec<u8> {
        encoder::encode(&self.tree, &self.layout, &self.chars, self.max_word_length)
    }

    /// One line per node record, in blob order.
    pub fn dump(&self) -> String {
        dump::dump(&self.tree, &self.layout)
    }
}

/// Compiles word lists into dictionary blobs.
#[derive(Debug, Clone, Default)]
pub struct DictionaryCompiler {
    options: CompileOptions,
}

impl DictionaryCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Validates a raw word list and compiles it.
    pub fn compile_raw(&self, entries: &[RawEntry]) -> Result<Vec<u8>, CompileError> {
        let entries = entry::normalize(entries, self.options.default_frequency)?;
        self.compile(&entries)
    }

    /// Compiles validated entries into a blob.
    pub fn compile(&self, entries: &[WordEntry]) -> Result<Vec<u8>, CompileError> {
        let dictionary = self.build(entries)?;
        let blob = dictionary.to_bytes();

        let stats = dictionary.stats();
        tracing::info!(
            words = stats.words,
            nodes = stats.nodes,
            max_word_length = stats.max_word_length,
            distinct_chars = stats.distinct_chars,
            blob_len = blob.len(),
            "compiled dictionary"
        );
        Ok(blob)
    }

    /// Runs every stage up to encoding and returns the intermediate
    /// dictionary.
    pub fn build(&self, entries: &[WordEntry]) -> Result<Dictionary, CompileError> {
        let _span = tracing::debug_span!("compile", entries = entries.len()).entered();

        if entries.is_empty() {
            return Err(CompileError::EmptyWordList);
        }

        let mut builder = TstBuilder::new();
        for entry in entries {
            builder.insert_entry(entry);
        }
        let built = builder.finish();
        tracing::debug!(
            words = built.words,
            nodes = built.tree.len(),
            max_word_length = built.max_word_length,
            "built ternary search tree"
        );

        let mut tree = built.tree;
        balance(&mut tree);
        tracing::debug!("balanced ternary search tree");

        let layout = layout::serialize(&tree);
        tracing::debug!(records_len = layout.total_len(), "laid out node records");

        // The last record is the furthest any `next` field can point.
        let last = layout
            .order()
            .last()
            .map_or(0, |&id| layout.offset(id));
        if last > MAX_NEXT_OFFSET {
            return Err(CompileError::BlobTooLarge {
                size: layout.total_len(),
                max: MAX_NEXT_OFFSET,
            });
        }

        Ok(Dictionary {
            tree,
            layout,
            chars: built.chars,
            max_word_length: built.max_word_length,
            words: built.words,
        })
    }
}
