// Dictionary blob format: header and character table layout, record flags.
//
// All multi-byte integers are big-endian. The fixed-size parts are
// byte-array structs so they have alignment 1, no padding, and can be
// written with `bytemuck::bytes_of`.

use bytemuck::{Pod, Zeroable};

use crate::node::Node;

/// Magic bytes at the start of every blob.
pub const MAGIC: [u8; 8] = *b"FxOSDICT";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Size of the blob header in bytes.
pub const HEADER_SIZE: usize = 15;

/// Size of one character table entry in bytes.
pub const CHAR_ENTRY_SIZE: usize = 6;

/// Size of the `next` offset that follows a record's character bytes.
pub const NEXT_OFFSET_SIZE: usize = 3;

/// Largest offset a 3-byte `next` field can hold.
pub const MAX_NEXT_OFFSET: usize = 0x00FF_FFFF;

/// Header value for the longest word saturates here.
pub const MAX_WORD_LENGTH: usize = 255;

/// Record flag: the node carries a character (not a sentinel).
pub const FLAG_CHAR: u8 = 0x80;
/// Record flag: the character needs two bytes.
pub const FLAG_WIDE: u8 = 0x40;
/// Record flag: a 3-byte `next` offset follows.
pub const FLAG_NEXT: u8 = 0x20;
/// Mask of the quantized frequency in the flag byte.
pub const FREQUENCY_MASK: u8 = 0x1F;

/// Blob header (15 bytes).
///
/// - bytes 0..8: magic `FxOSDICT`
/// - bytes 8..12: format version
/// - byte 12: longest word in code units, clamped to 255
/// - bytes 13..15: number of character table entries
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Header {
    pub magic: [u8; 8],
    pub version: [u8; 4],
    pub max_word_length: u8,
    pub char_count: [u8; 2],
}

impl Header {
    pub fn new(max_word_length: usize, char_count: u16) -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION.to_be_bytes(),
            max_word_length: max_word_length.min(MAX_WORD_LENGTH) as u8,
            char_count: char_count.to_be_bytes(),
        }
    }
}

/// Character table entry (6 bytes): code unit and global occurrence count.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct CharEntry {
    pub unit: [u8; 2],
    pub count: [u8; 4],
}

impl CharEntry {
    pub fn new(unit: u16, count: u32) -> Self {
        Self {
            unit: unit.to_be_bytes(),
            count: count.to_be_bytes(),
        }
    }
}

const _: () = assert!(size_of::<Header>() == HEADER_SIZE);
const _: () = assert!(size_of::<CharEntry>() == CHAR_ENTRY_SIZE);

/// Builds the leading byte of a node record from the node and its quantized
/// frequency.
#[inline]
pub fn record_flags(node: &Node, quantized_frequency: u8) -> u8 {
    let mut flags = quantized_frequency & FREQUENCY_MASK;
    if !node.is_end() {
        flags |= FLAG_CHAR;
    }
    if node.unit > 0xFF {
        flags |= FLAG_WIDE;
    }
    if node.next.is_some() {
        flags |= FLAG_NEXT;
    }
    flags
}

/// Big-endian 3-byte encoding of a `next` offset.
#[inline]
pub fn next_offset_bytes(offset: usize) -> [u8; NEXT_OFFSET_SIZE] {
    debug_assert!(offset <= MAX_NEXT_OFFSET, "next offset {offset:#x} needs more than 3 bytes");
    let [_, hi, mid, lo] = (offset as u32).to_be_bytes();
    [hi, mid, lo]
}
