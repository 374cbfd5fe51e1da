//! Shared types for the wordtree dictionary compiler.
//!
//! This crate holds everything that sits in front of the tree: the raw input
//! shapes a word list arrives in, the validated [`entry::WordEntry`], the
//! frequency rules and the character model used by the tree and the encoder.
//!
//! # Architecture
//!
//! - [`entry`] -- Raw input shapes, validated entries, word-list normalization
//! - [`frequency`] -- Default frequency, range check, 5-bit quantization
//! - [`character`] -- UTF-16 code units and the end-of-word sentinel

pub mod character;
pub mod entry;
pub mod frequency;

use std::fmt;

/// Shape of a raw word-list element, used in type mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// A bare word without frequency information.
    Bare,
    /// A `{w, f}` pair.
    Weighted,
}

impl fmt::Display for EntryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryShape::Bare => f.write_str("string"),
            EntryShape::Weighted => f.write_str("object"),
        }
    }
}

/// Error type for word-list validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    #[error("Type mismatch. previous: {previous}, this: {this}")]
    TypeMismatch {
        previous: EntryShape,
        this: EntryShape,
    },
    #[error("\"{0}\" field not found in word")]
    MissingField(&'static str),
    #[error("\"f\" value not in allowed range")]
    InvalidFrequency(f64),
    #[error("empty word")]
    EmptyWord,
    #[error("word {0:?} contains U+0000")]
    InvalidCharacter(String),
}
