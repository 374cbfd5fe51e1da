// Linearization of the balanced tree into blob order.

use wordtree_core::character;

use crate::format::NEXT_OFFSET_SIZE;
use crate::node::{Node, NodeId, Tree};

/// Serialized order of the nodes and the byte offset of every record.
///
/// Offsets are relative to the start of the node-record section, not to the
/// start of the blob.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    order: Vec<NodeId>,
    /// Record offset per node, indexed by `NodeId::index`.
    offsets: Vec<usize>,
    total_len: usize,
}

impl Layout {
    /// Nodes in record order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Offset of the record for `id`.
    #[inline]
    pub fn offset(&self, id: NodeId) -> usize {
        self.offsets[id.index()]
    }

    /// Byte length of the whole node-record section.
    pub fn total_len(&self) -> usize {
        self.total_len
    }
}

/// Encoded size of a node record: flag byte, character bytes, and a
/// 3-byte `next` offset when the node has one.
#[inline]
pub fn record_len(node: &Node) -> usize {
    let next_len = if node.next.is_some() { NEXT_OFFSET_SIZE } else { 0 };
    1 + character::encoded_len(node.unit) + next_len
}

/// Orders the tree depth-first, center before left before right, and
/// assigns every record its offset.
///
/// Center-first keeps the nodes of one word prefix contiguous. All offsets
/// are known before any record is written, since a `next` target can sit
/// before or after its source.
pub fn serialize(tree: &Tree) -> Layout {
    let mut order = Vec::with_capacity(tree.len());
    let mut stack: Vec<NodeId> = tree.root().into_iter().collect();
    while let Some(id) = stack.pop() {
        order.push(id);
        let node = &tree[id];
        stack.extend(node.right);
        stack.extend(node.left);
        stack.extend(node.center);
    }

    let mut offsets = vec![0; tree.len()];
    let mut total_len = 0;
    for &id in &order {
        offsets[id.index()] = total_len;
        total_len += record_len(&tree[id]);
    }

    Layout {
        order,
        offsets,
        total_len,
    }
}
