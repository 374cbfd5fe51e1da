// Two-phase balancing of the insertion tree.
//
// Every level (the nodes reachable through left/right edges from one
// subtree root) is first re-rooted at its most frequent node, then the two
// flanks left and right of that root are re-rooted at their median by
// subtree size, recursively. Each center child starts a new level and goes
// through the frequency rule again.
//
// While a level is re-rooted by frequency, its nodes are also chained in
// descending frequency order through `next`/`prev`.
//
// All descents use explicit stacks, so deep or skewed trees cannot exhaust
// the native stack.

use std::cmp::Ordering;

use crate::node::{NodeId, Slot, Tree};

/// Which rule re-roots a level subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Procedure {
    /// Chain the level by frequency and promote its most frequent node.
    FrequencyPromote,
    /// Promote the median node by subtree size.
    CountBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Balances the whole tree in place.
///
/// Intended to run once per build: a second pass is not guaranteed to leave
/// the tree unchanged.
pub fn balance(tree: &mut Tree) {
    if tree.root().is_none() {
        return;
    }
    set_counts(tree);

    let mut work = vec![(Procedure::FrequencyPromote, Slot::Root)];
    while let Some((procedure, slot)) = work.pop() {
        let Some(root) = tree.get(slot) else {
            continue;
        };
        let root = match procedure {
            Procedure::FrequencyPromote => {
                let head = link_level_by_frequency(tree, root);
                promote_to_root(tree, root, head)
            }
            Procedure::CountBalance => {
                let median = tree[root].count / 2;
                divide(tree, root, median)
            }
        };
        tree.set(slot, Some(root));

        work.push((Procedure::FrequencyPromote, Slot::Center(root)));
        work.push((Procedure::CountBalance, Slot::Right(root)));
        work.push((Procedure::CountBalance, Slot::Left(root)));
    }
}

/// Computes `count = count(left) + count(right) + 1` for every node.
///
/// Center subtrees are counted on their own and never add to their parent.
pub(crate) fn set_counts(tree: &mut Tree) {
    let Some(root) = tree.root() else {
        return;
    };

    // Pre-order puts every node before its children, so walking it backwards
    // sees children first.
    let mut order = Vec::with_capacity(tree.len());
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        order.push(id);
        let node = &tree[id];
        stack.extend(node.right);
        stack.extend(node.center);
        stack.extend(node.left);
    }

    for &id in order.iter().rev() {
        let count = tree.count_of(tree[id].left) + tree.count_of(tree[id].right) + 1;
        tree[id].count = count;
    }
}

/// Sorts the level rooted at `root` by descending frequency (ties by
/// ascending code unit), relinks `next`/`prev` in that order and returns the
/// head of the chain.
fn link_level_by_frequency(tree: &mut Tree, root: NodeId) -> NodeId {
    let mut level = tree.level(root);
    level.sort_by(|&a, &b| by_frequency(tree, a, b));

    let mut prev = None;
    for (i, &id) in level.iter().enumerate() {
        let node = &mut tree[id];
        node.prev = prev;
        node.next = level.get(i + 1).copied();
        prev = Some(id);
    }

    level[0]
}

fn by_frequency(tree: &Tree, a: NodeId, b: NodeId) -> Ordering {
    let (a, b) = (&tree[a], &tree[b]);
    b.frequency
        .total_cmp(&a.frequency)
        .then_with(|| a.unit.cmp(&b.unit))
}

/// Rotates `target` up to the root of the level subtree at `root`,
/// preserving code unit order.
fn promote_to_root(tree: &mut Tree, root: NodeId, target: NodeId) -> NodeId {
    let unit = tree[target].unit;
    let mut path = Vec::new();
    let mut cur = root;
    while cur != target {
        let node = &tree[cur];
        let (side, child) = if unit < node.unit {
            (Side::Left, node.left)
        } else {
            (Side::Right, node.right)
        };
        let Some(child) = child else {
            debug_assert!(false, "promoted node is not part of the level");
            return root;
        };
        path.push((cur, side));
        cur = child;
    }
    lift(tree, path, target)
}

/// Rotates the node of in-order rank `rank` up to the root of the level
/// subtree at `root`. Relies on up-to-date `count` fields.
fn divide(tree: &mut Tree, root: NodeId, mut rank: u32) -> NodeId {
    let mut path = Vec::new();
    let mut cur = root;
    loop {
        let node = &tree[cur];
        let left_count = tree.count_of(node.left);
        let (side, child) = match rank.cmp(&left_count) {
            Ordering::Less => (Side::Left, node.left),
            Ordering::Greater => {
                rank -= left_count + 1;
                (Side::Right, node.right)
            }
            Ordering::Equal => break,
        };
        let Some(child) = child else {
            debug_assert!(false, "rank exceeds level size");
            break;
        };
        path.push((cur, side));
        cur = child;
    }
    lift(tree, path, cur)
}

/// Walks a descent path back up, rotating `sub` above each recorded
/// ancestor. Returns the new subtree root.
fn lift(tree: &mut Tree, mut path: Vec<(NodeId, Side)>, mut sub: NodeId) -> NodeId {
    while let Some((parent, side)) = path.pop() {
        sub = match side {
            Side::Left => {
                tree[parent].left = Some(sub);
                rotate_right(tree, parent)
            }
            Side::Right => {
                tree[parent].right = Some(sub);
                rotate_left(tree, parent)
            }
        };
    }
    sub
}

/// Makes the left child of `id` the subtree root. Returns the new root.
fn rotate_right(tree: &mut Tree, id: NodeId) -> NodeId {
    let Some(pivot) = tree[id].left else {
        return id;
    };
    tree[id].left = tree[pivot].right;
    tree[pivot].right = Some(id);
    recount(tree, id);
    recount(tree, pivot);
    pivot
}

/// Makes the right child of `id` the subtree root. Returns the new root.
fn rotate_left(tree: &mut Tree, id: NodeId) -> NodeId {
    let Some(pivot) = tree[id].right else {
        return id;
    };
    tree[id].right = tree[pivot].left;
    tree[pivot].left = Some(id);
    recount(tree, id);
    recount(tree, pivot);
    pivot
}

#[inline]
fn recount(tree: &mut Tree, id: NodeId) {
    tree[id].count = tree.count_of(tree[id].left) + tree.count_of(tree[id].right) + 1;
}
