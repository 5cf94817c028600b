//! HTML serialization of live nodes.
//!
//! Live properties (`value`, `checked`, ...) and listeners are not part of the
//! markup, exactly as in a browser's `outerHTML`.

use crate::error::DomError;
use super::document::{attributes, child_nodes, node_kind, node_value, tag_name, NodeId, NodeKind};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Markup for `node` itself and its subtree. A fragment serializes as its
/// children.
pub fn outer_html(node: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

/// Markup for the children of `node`.
pub fn inner_html(node: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    for child in child_nodes(node)? {
        write_node(child, &mut out)?;
    }
    Ok(out)
}

fn write_node(node: NodeId, out: &mut String) -> Result<(), DomError> {
    match node_kind(node)? {
        NodeKind::Text => {
            out.push_str(&escape_text(&node_value(node)?.unwrap_or_default()));
        }
        NodeKind::Fragment => {
            for child in child_nodes(node)? {
                write_node(child, out)?;
            }
        }
        NodeKind::Element => {
            let tag = tag_name(node)?;
            out.push('<');
            out.push_str(&tag);
            for (name, value) in attributes(node)? {
                out.push(' ');
                out.push_str(&name);
                out.push_str("=\"");
                out.push_str(&escape_attr(&value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return Ok(());
            }

            for child in child_nodes(node)? {
                write_node(child, out)?;
            }
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
    }
    Ok(())
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{append_child, create_element, create_text_node, reset_document, set_attribute};

    #[test]
    fn test_outer_html() {
        reset_document();

        let div = create_element("div").unwrap();
        set_attribute(div, "class", "a \"b\"").unwrap();
        set_attribute(div, "hidden", "").unwrap();
        let text = create_text_node("1 < 2 & 3");
        append_child(div, text).unwrap();
        let input = create_element("input").unwrap();
        append_child(div, input).unwrap();

        assert_eq!(
            outer_html(div).unwrap(),
            "<div class=\"a &quot;b&quot;\" hidden=\"\">1 &lt; 2 &amp; 3<input></div>"
        );
        assert_eq!(inner_html(div).unwrap(), "1 &lt; 2 &amp; 3<input>");
    }
}
