// Human-readable listing of node records in blob order.

use std::fmt::Write;

use wordtree_core::{character, frequency};

use crate::layout::Layout;
use crate::node::Tree;

/// Renders one line per record:
/// `[offset] { ch: a, f: 16, next: 42 }`. The `next` part is omitted for
/// records without one.
pub fn dump(tree: &Tree, layout: &Layout) -> String {
    let mut out = String::new();
    for &id in layout.order() {
        let node = &tree[id];
        let _ = write!(
            out,
            "[{}] {{ ch: {}, f: {}",
            layout.offset(id),
            character::label(node.unit),
            frequency::quantize(node.frequency)
        );
        if let Some(next) = node.next {
            let _ = write!(out, ", next: {}", layout.offset(next));
        }
        out.push_str(" }\n");
    }
    out
}
