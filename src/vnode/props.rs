//! Prop types - Values a VNode carries for its element or component.

use std::fmt;
use std::rc::Rc;

use crate::dom::{Event, NodeId};
use super::node::Child;

// =============================================================================
// Callback Types
// =============================================================================

/// Event handler (Rc so one handler can be attached on every render pass).
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// Ref callback, invoked with the freshly created element before its
/// children are attached.
pub type RefCallback = Rc<dyn Fn(NodeId)>;

// =============================================================================
// Prop Value
// =============================================================================

/// The `style` prop: raw text or a list of property assignments.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Map(Vec<(String, String)>),
}

impl StyleValue {
    /// Build a map style from `(name, value)` pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        StyleValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single prop value.
#[derive(Clone)]
pub enum PropValue {
    /// Absent value (`null` / `undefined`): never rendered.
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Style(StyleValue),
    Handler(EventHandler),
    Ref(RefCallback),
}

impl PropValue {
    /// Wrap a closure as an event handler.
    pub fn handler(f: impl Fn(&Event) + 'static) -> Self {
        PropValue::Handler(Rc::new(f))
    }

    /// Wrap a closure as a ref callback.
    pub fn node_ref(f: impl Fn(NodeId) + 'static) -> Self {
        PropValue::Ref(Rc::new(f))
    }

    /// String form used for attributes and class names.
    ///
    /// `None` for values with no string form (null, callbacks). Map styles
    /// serialize as declaration text.
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            PropValue::Null | PropValue::Handler(_) | PropValue::Ref(_) => None,
            PropValue::Bool(b) => Some(b.to_string()),
            PropValue::Number(n) => Some(format_number(*n)),
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Style(StyleValue::Text(s)) => Some(s.clone()),
            PropValue::Style(StyleValue::Map(entries)) => Some(
                entries
                    .iter()
                    .map(|(k, v)| format!("{}: {v};", crate::dom::to_kebab_case(k)))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => write!(f, "Null"),
            PropValue::Bool(b) => write!(f, "Bool({b})"),
            PropValue::Number(n) => write!(f, "Number({n})"),
            PropValue::Str(s) => write!(f, "Str({s:?})"),
            PropValue::Style(s) => write!(f, "Style({s:?})"),
            PropValue::Handler(_) => write!(f, "Handler(..)"),
            PropValue::Ref(_) => write!(f, "Ref(..)"),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Null, PropValue::Null) => true,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Style(a), PropValue::Style(b)) => a == b,
            (PropValue::Handler(a), PropValue::Handler(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            (PropValue::Ref(a), PropValue::Ref(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        PropValue::Str(value.clone())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<StyleValue> for PropValue {
    fn from(value: StyleValue) -> Self {
        PropValue::Style(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

macro_rules! impl_number_prop {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PropValue {
                fn from(value: $t) -> Self {
                    PropValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_number_prop!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Number formatting for attribute and text output, matching JavaScript's
/// `String(n)`: integral values have no fractional part (`3`, not `3.0`),
/// and magnitudes outside `[1e-6, 1e21)` use exponent form (`1e+21`,
/// `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    // Shortest round-trip mantissa; positive exponents carry an explicit sign
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

// =============================================================================
// Props
// =============================================================================

/// Prop map of a VNode: ordered `(key, value)` entries plus the children.
///
/// Entry order is authoring order; the materializer applies props in this
/// order. Children are never stored as an entry: they live in their own
/// list, mirrored from [`VNode::children`](super::VNode::children).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
    children: Vec<Child>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Props::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Attach an event handler: `on("click", ..)` sets the `onClick` prop.
    pub fn on(self, event: &str, handler: impl Fn(&Event) + 'static) -> Self {
        let mut chars = event.chars();
        let key = match chars.next() {
            Some(first) => format!("on{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => "on".to_string(),
        };
        self.with(key, PropValue::handler(handler))
    }

    /// Attach a ref callback.
    pub fn with_ref(self, f: impl Fn(NodeId) + 'static) -> Self {
        self.with("ref", PropValue::node_ref(f))
    }

    /// Set a prop, replacing an existing entry in place. The `children` key
    /// is reserved and ignored here; children come from the factory.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        if key == "children" {
            tracing::trace!("ignoring explicit children prop");
            return;
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// String prop shortcut.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Number prop shortcut.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in authoring order, excluding children.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries, excluding children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `children` entry.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub(crate) fn set_children(&mut self, children: Vec<Child>) {
        self.children = children;
    }
}
