// Blob encoder: header, character table, node records.

use wordtree_core::frequency;

use crate::char_table::CharTable;
use crate::format::{self, CharEntry, Header};
use crate::layout::{self, Layout};
use crate::node::{Node, Tree};

/// Exact size of the blob for the given table and layout.
pub fn encoded_len(chars: &CharTable, layout: &Layout) -> usize {
    format::HEADER_SIZE + chars.len() * format::CHAR_ENTRY_SIZE + layout.total_len()
}

/// Writes the complete dictionary blob.
///
/// Callers guarantee a non-empty layout whose offsets fit the 3-byte `next`
/// field.
pub fn encode(tree: &Tree, layout: &Layout, chars: &CharTable, max_word_length: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(chars, layout));

    // At most 0xFFFF distinct non-sentinel code units exist.
    let header = Header::new(max_word_length, chars.len() as u16);
    out.extend_from_slice(bytemuck::bytes_of(&header));

    for (unit, count) in chars.sorted() {
        out.extend_from_slice(bytemuck::bytes_of(&CharEntry::new(unit, count)));
    }

    for &id in layout.order() {
        encode_node(&mut out, &tree[id], layout);
    }

    out
}

fn encode_node(out: &mut Vec<u8>, node: &Node, layout: &Layout) {
    let start = out.len();
    out.push(format::record_flags(node, frequency::quantize(node.frequency)));

    let [hi, lo] = node.unit.to_be_bytes();
    if node.unit > 0xFF {
        out.push(hi);
    }
    if !node.is_end() {
        out.push(lo);
    }

    if let Some(next) = node.next {
        out.extend_from_slice(&format::next_offset_bytes(layout.offset(next)));
    }

    debug_assert_eq!(out.len() - start, layout::record_len(node));
}
