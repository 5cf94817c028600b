//! Element Factory - Build normalized VNodes from caller arguments.

use super::node::{Child, ChildArg, NodeType, VNode};
use super::props::Props;

/// Build a VNode.
///
/// `children` may nest lists to any depth. They are flattened depth-first,
/// `Null` and `Bool(false)` entries are dropped, and the survivors keep their
/// relative order. `Bool(true)` survives as the text `"true"`.
///
/// # Example
///
/// ```ignore
/// use spark_vdom::{children, create_element, ChildArg};
///
/// let list = create_element("ul", None, children![1, ChildArg::Null, children![2, false, 3]]);
/// assert_eq!(list.children().len(), 3);
/// ```
pub fn create_element(
    node_type: impl Into<NodeType>,
    props: Option<Props>,
    children: impl Into<ChildArg>,
) -> VNode {
    let mut props = props.unwrap_or_default();
    props.set_children(flatten_children(children.into()));
    VNode {
        node_type: node_type.into(),
        props,
    }
}

/// Build a fragment VNode: `create_element(FRAGMENT, props, children)`.
pub fn create_fragment(props: Option<Props>, children: impl Into<ChildArg>) -> VNode {
    create_element(NodeType::Fragment, props, children)
}

/// Host element shorthand with props given directly.
pub fn h(tag: &str, props: Props, children: impl Into<ChildArg>) -> VNode {
    create_element(tag, Some(props), children)
}

/// Flatten a child argument into the child list of a VNode.
///
/// Uses an explicit stack, so nesting depth is bounded by memory, not by the
/// call stack.
pub fn flatten_children(arg: ChildArg) -> Vec<Child> {
    let mut out = Vec::new();
    let mut stack = vec![vec![arg].into_iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            None => {
                stack.pop();
            }
            Some(ChildArg::List(items)) => stack.push(items.into_iter()),
            Some(ChildArg::Null | ChildArg::Bool(false)) => {}
            Some(ChildArg::Bool(true)) => out.push(Child::Text("true".to_string())),
            Some(ChildArg::Text(s)) => out.push(Child::Text(s)),
            Some(ChildArg::Number(n)) => out.push(Child::Number(n)),
            Some(ChildArg::Node(v)) => out.push(Child::Node(v)),
        }
    }

    out
}

/// Build a [`ChildArg::List`] from heterogeneous items.
///
/// ```ignore
/// children!["Count: ", count, show_badge.then(|| badge())]
/// ```
#[macro_export]
macro_rules! children {
    () => {
        $crate::vnode::ChildArg::List(::std::vec::Vec::new())
    };
    ($($child:expr),+ $(,)?) => {
        $crate::vnode::ChildArg::List(::std::vec![$($crate::vnode::ChildArg::from($child)),+])
    };
}
