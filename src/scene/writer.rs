//! Deterministic markup serialization for scene-graph fragments.
//!
//! Attribute order is insertion order, child order is append order,
//! childless elements self-close. The same tree always serializes to
//! the same bytes, which downstream snapshot tests rely on.

use std::fmt::Write as _;

use crate::scene::SceneNode;

const INDENT: &str = "  ";

pub(crate) fn to_markup(node: &SceneNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0, true);
    out
}

pub(crate) fn to_markup_compact(node: &SceneNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0, false);
    out
}

fn write_node(out: &mut String, node: &SceneNode, depth: usize, pretty: bool) {
    if pretty {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
    }

    out.push('<');
    out.push_str(node.tag());
    for (name, value) in node.attributes() {
        let _ = write!(out, " {name}=\"");
        push_escaped(out, value);
        out.push('"');
    }

    if node.is_leaf() {
        out.push_str("/>");
    } else {
        out.push('>');
        if pretty {
            out.push('\n');
        }
        for child in node.children() {
            write_node(out, child, depth + 1, pretty);
        }
        if pretty {
            for _ in 0..depth {
                out.push_str(INDENT);
            }
        }
        let _ = write!(out, "</{}>", node.tag());
    }

    if pretty {
        out.push('\n');
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
