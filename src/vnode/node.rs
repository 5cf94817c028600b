//! VNode - the description of a piece of display tree.

use std::any::TypeId;
use std::fmt;
use std::rc::Rc;

use super::props::{format_number, Props};

// =============================================================================
// Component
// =============================================================================

/// Signature of a component function.
pub type ComponentFn = dyn Fn(&Props) -> Option<VNode>;

/// A component: a plain function from props to at most one VNode.
///
/// Components are re-invoked on every render pass; nothing about them
/// persists between passes except the hook slots they touch.
#[derive(Clone)]
pub struct Component {
    render: Rc<ComponentFn>,
    type_id: TypeId,
    name: &'static str,
}

impl Component {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Props) -> Option<VNode> + 'static,
    {
        Self {
            render: Rc::new(f),
            type_id: TypeId::of::<F>(),
            name: std::any::type_name::<F>(),
        }
    }

    /// Invoke the component.
    pub fn call(&self, props: &Props) -> Option<VNode> {
        (self.render)(props)
    }

    /// Identity of the function's type.
    ///
    /// Every `fn` item and every closure expression has its own type, so
    /// two `Component`s built from the same function on different render
    /// passes share an identity even though they are distinct allocations.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Type name of the wrapped function (for logs).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

/// Shorthand for [`Component::new`].
pub fn component<F>(f: F) -> Component
where
    F: Fn(&Props) -> Option<VNode> + 'static,
{
    Component::new(f)
}

// =============================================================================
// Node Type
// =============================================================================

/// What a VNode describes. The materializer dispatches on this alone.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    /// Host element with the given tag.
    Element(String),
    /// Function component.
    Component(Component),
    /// Pure grouping: no host node of its own.
    Fragment,
}

/// The fragment marker.
pub const FRAGMENT: NodeType = NodeType::Fragment;

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        NodeType::Element(tag.to_string())
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        NodeType::Element(tag)
    }
}

impl From<Component> for NodeType {
    fn from(c: Component) -> Self {
        NodeType::Component(c)
    }
}

// =============================================================================
// VNode
// =============================================================================

/// In-memory description of a display-tree fragment.
///
/// `children` is not a separate field: it is the `children` entry of the
/// props, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct VNode {
    pub(crate) node_type: NodeType,
    pub(crate) props: Props,
}

impl VNode {
    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Flattened, filtered children.
    pub fn children(&self) -> &[Child] {
        self.props.children()
    }

    /// Tag for host elements.
    pub fn tag(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Element(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.node_type, NodeType::Fragment)
    }

    pub fn is_component(&self) -> bool {
        matches!(self.node_type, NodeType::Component(_))
    }
}

// =============================================================================
// Children
// =============================================================================

/// One surviving child after flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(VNode),
    Text(String),
    Number(f64),
}

impl Child {
    /// Text a primitive child renders as; `None` for VNodes.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Child::Node(_) => None,
            Child::Text(s) => Some(s.clone()),
            Child::Number(n) => Some(format_number(*n)),
        }
    }
}

/// A child argument as passed to the factory: any nesting of lists, with
/// `Null` and `Bool(false)` entries that vanish during flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildArg {
    Null,
    Bool(bool),
    Text(String),
    Number(f64),
    Node(VNode),
    List(Vec<ChildArg>),
}

impl From<()> for ChildArg {
    fn from(_: ()) -> Self {
        ChildArg::List(Vec::new())
    }
}

impl From<&str> for ChildArg {
    fn from(value: &str) -> Self {
        ChildArg::Text(value.to_string())
    }
}

impl From<String> for ChildArg {
    fn from(value: String) -> Self {
        ChildArg::Text(value)
    }
}

impl From<&String> for ChildArg {
    fn from(value: &String) -> Self {
        ChildArg::Text(value.clone())
    }
}

impl From<bool> for ChildArg {
    fn from(value: bool) -> Self {
        ChildArg::Bool(value)
    }
}

impl From<VNode> for ChildArg {
    fn from(value: VNode) -> Self {
        ChildArg::Node(value)
    }
}

impl From<Child> for ChildArg {
    fn from(value: Child) -> Self {
        match value {
            Child::Node(v) => ChildArg::Node(v),
            Child::Text(s) => ChildArg::Text(s),
            Child::Number(n) => ChildArg::Number(n),
        }
    }
}

impl<T: Into<ChildArg>> From<Option<T>> for ChildArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(ChildArg::Null, Into::into)
    }
}

impl<T: Into<ChildArg>> From<Vec<T>> for ChildArg {
    fn from(value: Vec<T>) -> Self {
        ChildArg::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ChildArg>, const N: usize> From<[T; N]> for ChildArg {
    fn from(value: [T; N]) -> Self {
        ChildArg::List(value.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_number_child {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ChildArg {
                fn from(value: $t) -> Self {
                    ChildArg::Number(value as f64)
                }
            }
        )*
    };
}

impl_number_child!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
