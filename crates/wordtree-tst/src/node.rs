// Arena-backed ternary search tree nodes.
//
// Nodes live in one `Vec` and refer to each other by `NodeId`. Rotations
// rewrite indices instead of moving owned boxes, and the `next`/`prev`
// sibling chain is plain relational metadata over the same indices.

use std::ops::{Index, IndexMut};

use wordtree_core::character::{END_OF_WORD, Unit};

/// Index of a node in its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One character position of the tree.
///
/// `left`/`center`/`right` are tree edges: each node has exactly one parent
/// edge. `next`/`prev` link the nodes of one level in descending frequency
/// order and never imply ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Code unit, or [`END_OF_WORD`] for a sentinel.
    pub unit: Unit,
    /// Siblings with a smaller code unit.
    pub left: Option<NodeId>,
    /// Next character position of the word.
    pub center: Option<NodeId>,
    /// Siblings with a larger code unit.
    pub right: Option<NodeId>,
    /// Highest frequency of any word whose path runs through this node.
    pub frequency: f64,
    /// Size of the level subtree: this node plus its left and right subtrees.
    /// Only meaningful while balancing.
    pub count: u32,
    /// Next sibling of the level in descending frequency order.
    pub next: Option<NodeId>,
    /// Previous sibling of the level in descending frequency order.
    pub prev: Option<NodeId>,
}

impl Node {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            left: None,
            center: None,
            right: None,
            frequency: 0.0,
            count: 0,
            next: None,
            prev: None,
        }
    }

    /// Returns `true` for an end-of-word sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.unit == END_OF_WORD
    }
}

/// A place in the tree that holds a subtree root: the tree root itself or one
/// of a node's three child edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Root,
    Left(NodeId),
    Center(NodeId),
    Right(NodeId),
}

/// Ternary search tree stored in an arena.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a detached node to the arena.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Reads the subtree root stored in `slot`.
    #[inline]
    pub fn get(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Root => self.root,
            Slot::Left(id) => self[id].left,
            Slot::Center(id) => self[id].center,
            Slot::Right(id) => self[id].right,
        }
    }

    /// Replaces the subtree root stored in `slot`.
    #[inline]
    pub fn set(&mut self, slot: Slot, value: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = value,
            Slot::Left(id) => self[id].left = value,
            Slot::Center(id) => self[id].center = value,
            Slot::Right(id) => self[id].right = value,
        }
    }

    /// Level subtree size of an optional node (`0` for `None`).
    #[inline]
    pub fn count_of(&self, id: Option<NodeId>) -> u32 {
        id.map_or(0, |id| self[id].count)
    }

    /// All nodes in arena (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// Nodes of the level rooted at `root`, reached through `left`/`right`
    /// edges only. Order is unspecified.
    pub fn level(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            let node = &self[id];
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for Tree {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
