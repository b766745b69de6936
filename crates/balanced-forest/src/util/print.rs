//! Box-drawing tree dump.

use std::fmt::Display;

use crate::arena::Arena;
use crate::types::KvNode;

/// Renders the subtree under `node`; `describe` supplies the metadata shown
/// after each entry.
///
/// Children hang off `├─` / `└─` branches indented by `tab`. A missing left
/// child of a node that has a right child prints as `├─ ∅`, so the side of
/// the remaining child stays readable.
pub fn print_node<K, V, N, D>(arena: &Arena<N>, node: u32, tab: &str, describe: &D) -> String
where
    K: Display,
    V: Display,
    N: KvNode<K, V>,
    D: Fn(&N) -> String,
{
    let mut out = String::new();
    // (node or empty slot, text before it, indentation for its children)
    let mut stack: Vec<(Option<u32>, String, String)> =
        vec![(Some(node), String::new(), tab.to_string())];

    while let Some((slot, prefix, child_tab)) = stack.pop() {
        out.push_str(&prefix);
        let Some(i) = slot else {
            out.push('∅');
            continue;
        };

        let n = &arena[i];
        let meta = describe(n);
        if meta.is_empty() {
            out.push_str(&format!("{} = {}", n.key(), n.value()));
        } else {
            out.push_str(&format!("{} = {} [{meta}]", n.key(), n.value()));
        }

        let children = [n.l(), n.r()];
        let Some(last) = children.iter().rposition(Option::is_some) else {
            continue;
        };
        // Pushed right to left so the left child is rendered first.
        for (pos, child) in children.into_iter().enumerate().take(last + 1).rev() {
            let is_last = pos == last;
            let branch = if is_last { "└─ " } else { "├─ " };
            let indent = if is_last { " " } else { "│" };
            stack.push((
                child,
                format!("\n{child_tab}{branch}"),
                format!("{child_tab}{indent}  "),
            ));
        }
    }

    out
}
