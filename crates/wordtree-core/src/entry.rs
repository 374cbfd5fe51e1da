// Word-list entries: raw input shapes and validated entries.

use serde::Deserialize;

use crate::character;
use crate::frequency::{self, DEFAULT_FREQUENCY};
use crate::{EntryError, EntryShape};

/// One element of a word list as supplied by the caller.
///
/// Deserializes from either a JSON string or an object with `w`/`f` (or
/// `word`/`frequency`) fields. Both fields of the object form are optional
/// at this stage so that a missing field is reported by
/// [`normalize`] rather than as a generic deserialization failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Bare(String),
    Weighted {
        #[serde(rename = "w", alias = "word", default)]
        word: Option<String>,
        #[serde(rename = "f", alias = "frequency", default)]
        frequency: Option<f64>,
    },
}

impl RawEntry {
    /// Convenience constructor for a complete `{w, f}` pair.
    pub fn weighted(word: impl Into<String>, frequency: f64) -> Self {
        RawEntry::Weighted {
            word: Some(word.into()),
            frequency: Some(frequency),
        }
    }

    pub fn shape(&self) -> EntryShape {
        match self {
            RawEntry::Bare(_) => EntryShape::Bare,
            RawEntry::Weighted { .. } => EntryShape::Weighted,
        }
    }
}

impl From<&str> for RawEntry {
    fn from(word: &str) -> Self {
        RawEntry::Bare(word.to_string())
    }
}

/// A validated word with its normalized frequency.
///
/// Invariants: the word is non-empty, contains no U+0000, and
/// `0 <= frequency < 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    word: String,
    frequency: f64,
}

impl WordEntry {
    /// Creates an entry, checking the word and the frequency range.
    pub fn new(word: impl Into<String>, frequency: f64) -> Result<Self, EntryError> {
        let word = word.into();
        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }
        if character::contains_sentinel(&word) {
            return Err(EntryError::InvalidCharacter(word));
        }
        let frequency = frequency::validate(frequency)?;
        Ok(Self { word, frequency })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

/// Validates a raw word list and produces uniform entries.
///
/// All elements must share one shape. Bare words receive
/// `default_frequency`; pairs must carry both fields with the frequency in
/// `[0, 1)`. The first violation aborts the whole list.
pub fn normalize(entries: &[RawEntry], default_frequency: f64) -> Result<Vec<WordEntry>, EntryError> {
    let default_frequency = frequency::validate(default_frequency)?;
    let mut previous: Option<EntryShape> = None;
    let mut out = Vec::with_capacity(entries.len());

    for entry in entries {
        let shape = entry.shape();
        match previous {
            Some(previous) if previous != shape => {
                return Err(EntryError::TypeMismatch {
                    previous,
                    this: shape,
                });
            }
            _ => {}
        }
        previous = Some(shape);

        let normalized = match entry {
            RawEntry::Bare(word) => WordEntry::new(word.as_str(), default_frequency)?,
            RawEntry::Weighted { word, frequency } => {
                let word = word.as_deref().ok_or(EntryError::MissingField("w"))?;
                let frequency = frequency.ok_or(EntryError::MissingField("f"))?;
                WordEntry::new(word, frequency)?
            }
        };
        out.push(normalized);
    }

    Ok(out)
}

/// [`normalize`] with the standard default frequency.
pub fn normalize_default(entries: &[RawEntry]) -> Result<Vec<WordEntry>, EntryError> {
    normalize(entries, DEFAULT_FREQUENCY)
}
