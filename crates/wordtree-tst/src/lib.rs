//! Ternary search tree dictionary compiler.
//!
//! This crate turns a validated word list into a compact binary dictionary
//! for predictive text. Words are inserted into a ternary search tree, the
//! tree is balanced for both search depth and frequency, linearized, and
//! encoded into a self-contained blob.
//!
//! # Architecture
//!
//! - [`node`] -- Arena-backed tree nodes addressed by index
//! - [`char_table`] -- Global character occurrence counts
//! - [`builder`] -- Word insertion
//! - [`balance`] -- Frequency promotion and size balancing per level
//! - [`layout`] -- Depth-first record order and byte offsets
//! - [`format`] -- Header and character table layout, record flags
//! - [`encoder`] -- Blob writer
//! - [`dump`] -- Human-readable record listing
//! - [`compiler`] -- Stage pipeline and entry points

pub mod balance;
pub mod builder;
pub mod char_table;
pub mod compiler;
pub mod dump;
pub mod encoder;
pub mod format;
pub mod layout;
pub mod node;

pub use compiler::{CompileOptions, CompileStats, Dictionary, DictionaryCompiler};
pub use wordtree_core::entry::{RawEntry, WordEntry};

use wordtree_core::EntryError;

/// Error type for dictionary compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error("word list is empty")]
    EmptyWordList,
    #[error("node records span {size} bytes, next offsets reach at most {max}")]
    BlobTooLarge { size: usize, max: usize },
}

/// Compiles validated entries with default options.
pub fn compile(entries: &[WordEntry]) -> Result<Vec<u8>, CompileError> {
    DictionaryCompiler::default().compile(entries)
}
