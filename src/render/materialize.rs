//! Materializer - Depth-first conversion of VNodes into live nodes.

use crate::dom::{self, NodeId, NodeKind};
use crate::error::Result;
use crate::hooks::enter_component;
use crate::vnode::{Child, NodeType, VNode};

use super::props::apply_props;

/// Materialize a VNode tree.
///
/// Returns one live node: an element, a text node, or a document fragment
/// holding the materialized children of a `Fragment` VNode (a component
/// returning `None` also yields an empty fragment). Appending a fragment
/// moves its children into the parent; use [`append_rendered`] to also
/// release the emptied fragment.
///
/// Component functions run during this call and may read or write hook
/// slots. A panic in a component aborts the pass and propagates.
pub fn render_to_dom(vnode: &VNode) -> Result<NodeId> {
    let mut path = Vec::new();
    render_vnode(vnode, &mut path)
}

/// Materialize one child: primitives become text nodes.
pub fn render_child(child: &Child) -> Result<NodeId> {
    let mut path = Vec::new();
    render_child_at(child, &mut path)
}

/// Append a materialized node, releasing it afterwards if it was a
/// (now empty) fragment.
pub fn append_rendered(parent: NodeId, node: NodeId) -> Result<()> {
    dom::append_child(parent, node)?;
    if dom::node_kind(node)? == NodeKind::Fragment {
        dom::release_node(node)?;
    }
    Ok(())
}

fn render_child_at(child: &Child, path: &mut Vec<usize>) -> Result<NodeId> {
    match child {
        Child::Node(vnode) => render_vnode(vnode, path),
        Child::Text(_) | Child::Number(_) => {
            Ok(dom::create_text_node(child.as_text().unwrap_or_default()))
        }
    }
}

fn render_vnode(vnode: &VNode, path: &mut Vec<usize>) -> Result<NodeId> {
    match vnode.node_type() {
        NodeType::Fragment => {
            let fragment = dom::create_document_fragment();
            append_children(fragment, vnode.children(), path)?;
            Ok(fragment)
        }

        NodeType::Component(component) => {
            let _scope = enter_component(path, component.type_id());
            tracing::trace!(component = component.name(), ?path, "invoke component");

            match component.call(vnode.props()) {
                Some(output) => {
                    path.push(0);
                    let result = render_vnode(&output, path);
                    path.pop();
                    result
                }
                None => Ok(dom::create_document_fragment()),
            }
        }

        NodeType::Element(tag) => {
            let el = dom::create_element(tag)?;
            // Props first: refs must see the element before its children
            if let Err(err) = apply_props(el, vnode.props()) {
                discard(el);
                return Err(err.into());
            }
            append_children(el, vnode.children(), path)?;
            Ok(el)
        }
    }
}

fn append_children(parent: NodeId, children: &[Child], path: &mut Vec<usize>) -> Result<()> {
    for (i, child) in children.iter().enumerate() {
        path.push(i);
        let rendered = render_child_at(child, path);
        path.pop();

        match rendered {
            Ok(node) => append_rendered(parent, node)?,
            Err(err) => {
                // Free the partial subtree; the parent is the caller's
                discard(parent);
                return Err(err);
            }
        }
    }
    Ok(())
}

/// Release a partially built subtree after a failure. The original error
/// is what the caller sees; a failed release is only logged.
fn discard(node: NodeId) {
    if let Err(err) = dom::release_node(node) {
        tracing::warn!(%node, %err, "failed to release partial subtree");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::dom::{child_nodes, outer_html, reset_document, tag_name, text_content};
    use crate::error::{DomError, RenderError};
    use crate::hooks::{reset_hooks, slot_count, use_state};
    use crate::vnode::{component, create_element, create_fragment, ChildArg, Props};

    fn setup() {
        reset_document();
        reset_hooks();
    }

    #[test]
    fn test_primitive_children_become_text() {
        setup();

        let node = render_child(&Child::Number(42.0)).unwrap();
        assert_eq!(text_content(node).unwrap(), "42");

        let node = render_child(&Child::Text("hi".into())).unwrap();
        assert_eq!(outer_html(node).unwrap(), "hi");
    }

    #[test]
    fn test_element_tree() {
        setup();

        let tree = create_element(
            "ul",
            Some(Props::new().with("className", "list")),
            children![
                create_element("li", None, "one"),
                create_element("li", None, children![2, ChildArg::Null]),
            ],
        );
        let ul = render_to_dom(&tree).unwrap();

        assert_eq!(
            outer_html(ul).unwrap(),
            "<ul class=\"list\"><li>one</li><li>2</li></ul>"
        );
    }

    #[test]
    fn test_fragment_emits_no_host_node() {
        setup();

        let tree = create_element(
            "div",
            None,
            create_fragment(None, children!["a", create_element("b", None, "c")]),
        );
        let div = render_to_dom(&tree).unwrap();

        assert_eq!(outer_html(div).unwrap(), "<div>a<b>c</b></div>");
        assert_eq!(child_nodes(div).unwrap().len(), 2);
        // div, "a", b, "c"; the emptied fragment was released
        assert_eq!(dom::node_count(), 4);
    }

    #[test]
    fn test_component_invoked_with_props_and_children() {
        setup();

        let card = component(|props: &Props| {
            Some(create_element(
                "section",
                Some(Props::new().with("title", props.get_str("title").unwrap_or_default())),
                props.children().to_vec(),
            ))
        });
        let tree = create_element(
            card,
            Some(Props::new().with("title", "Mood")),
            create_element("p", None, "ok"),
        );
        let node = render_to_dom(&tree).unwrap();

        assert_eq!(outer_html(node).unwrap(), "<section title=\"Mood\"><p>ok</p></section>");
    }

    #[test]
    fn test_component_returning_none() {
        setup();

        let nothing = component(|_: &Props| None);
        let tree = create_element("div", None, children!["x", create_element(nothing, None, ()), "y"]);
        let div = render_to_dom(&tree).unwrap();

        assert_eq!(outer_html(div).unwrap(), "<div>xy</div>");
        assert_eq!(child_nodes(div).unwrap().len(), 2);
    }

    #[test]
    fn test_components_reinvoked_fresh_each_pass() {
        setup();

        let stateful = component(|_: &Props| {
            let (n, _) = use_state(1);
            Some(create_element("i", None, n.get()))
        });
        let tree = create_element("div", None, children![
            create_element(stateful.clone(), None, ()),
            create_element(stateful, None, ()),
        ]);

        render_to_dom(&tree).unwrap();
        assert_eq!(slot_count(), 2);
    }

    #[test]
    fn test_ref_runs_before_children_attached() {
        setup();

        let children_at_ref = std::rc::Rc::new(std::cell::Cell::new(usize::MAX));
        let seen = children_at_ref.clone();
        let tree = create_element(
            "div",
            Some(Props::new().with_ref(move |node| {
                seen.set(child_nodes(node).unwrap().len());
            })),
            children!["a", "b"],
        );
        let div = render_to_dom(&tree).unwrap();

        assert_eq!(children_at_ref.get(), 0);
        assert_eq!(tag_name(div).unwrap(), "div");
    }

    #[test]
    fn test_invalid_tag_fails_and_frees_partial_tree() {
        setup();

        let tree = create_element("div", None, create_element("bad tag", None, "x"));
        let err = render_to_dom(&tree).unwrap_err();

        assert_eq!(err, RenderError::Dom(DomError::InvalidTagName("bad tag".into())));
        assert_eq!(dom::node_count(), 0);
    }

    #[test]
    fn test_failed_cleanup_keeps_original_error() {
        setup();

        // The ref frees the element, so the next prop and the cleanup both fail
        let props = Props::new()
            .with_ref(|node| dom::release_node(node).unwrap())
            .with("id", "gone");
        let err = render_to_dom(&create_element("div", Some(props), ())).unwrap_err();

        assert!(matches!(err, RenderError::Dom(DomError::NodeNotFound(_))));
        assert_eq!(dom::node_count(), 0);
    }

    #[test]
    fn test_structurally_equivalent_renders() {
        setup();

        let tree = create_element(
            "form",
            Some(Props::new().with("id", "f").with("novalidate", true)),
            children![
                create_element("input", Some(Props::new().with("name", "q")), ()),
                create_fragment(None, children!["t", 1]),
            ],
        );
        let first = render_to_dom(&tree).unwrap();
        let second = render_to_dom(&tree).unwrap();

        assert_ne!(first, second);
        assert_eq!(outer_html(first).unwrap(), outer_html(second).unwrap());
    }
}
