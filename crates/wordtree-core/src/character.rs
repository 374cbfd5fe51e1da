// Character model: words are sequences of UTF-16 code units.
//
// Characters outside the Basic Multilingual Plane are kept as their two
// surrogate units, so every character code fits the 2-byte fields of the
// dictionary format.

/// A single UTF-16 code unit.
pub type Unit = u16;

/// Reserved code unit marking the end of a word. Sorts below every real
/// character.
pub const END_OF_WORD: Unit = 0;

/// Converts a word into its UTF-16 code units.
pub fn to_units(word: &str) -> Vec<Unit> {
    word.encode_utf16().collect()
}

/// Number of code units in `word`.
pub fn unit_len(word: &str) -> usize {
    word.encode_utf16().count()
}

/// Returns `true` if the word contains the code unit reserved for the
/// end-of-word sentinel.
pub fn contains_sentinel(word: &str) -> bool {
    word.contains('\0')
}

/// Number of bytes the code unit occupies in a node record.
///
/// - `0` for the sentinel
/// - `1` for units up to `0xFF`
/// - `2` otherwise
#[inline]
pub fn encoded_len(unit: Unit) -> usize {
    if unit == END_OF_WORD {
        0
    } else if unit <= 0xFF {
        1
    } else {
        2
    }
}

/// Human-readable label for a code unit: `$` for the sentinel, the character
/// itself for printable ASCII and space, `U+XXXX` for everything else.
/// ASCII control characters get the `U+` form so every record stays on one
/// line.
pub fn label(unit: Unit) -> String {
    match unit {
        END_OF_WORD => "$".to_string(),
        0x20..=0x7E => char::from(unit as u8).to_string(),
        _ => format!("U+{unit:04X}"),
    }
}
