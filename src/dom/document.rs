//! Document - Live node arena.
//!
//! Manages the lifecycle of live display nodes:
//! - Index allocation with a free pool for O(1) reuse
//! - Generation counters so a stale [`NodeId`] never aliases a reused slot
//! - Parent links and ordered child lists
//! - Recursive release of whole subtrees
//!
//! Nodes are NOT objects handed to the caller. A [`NodeId`] is a copyable
//! handle into a thread-local arena, and every operation is a free function
//! taking that handle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::error::DomError;
use super::events::{Event, EventListener};
use super::style::StyleDeclaration;

type Result<T> = std::result::Result<T, DomError>;

// =============================================================================
// Handles & Kinds
// =============================================================================

/// Handle to a live node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Arena slot of this node.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// What a live node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Grouping node. Appending it moves its children into the new parent
    /// and leaves it empty.
    Fragment,
}

/// Value of a live element property (`value`, `checked`, `selected`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomProperty {
    Str(String),
    Bool(bool),
}

impl DomProperty {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DomProperty::Str(s) => Some(s),
            DomProperty::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DomProperty::Bool(b) => Some(*b),
            DomProperty::Str(_) => None,
        }
    }
}

// =============================================================================
// Arena State
// =============================================================================

struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    style: StyleDeclaration,
    properties: HashMap<String, DomProperty>,
    listeners: Vec<(String, EventListener)>,
}

enum NodeContent {
    Element(ElementData),
    Text(String),
    Fragment,
}

struct NodeData {
    content: NodeContent,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

#[derive(Default)]
struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Document {
    fn allocate(&mut self, content: NodeContent) -> NodeId {
        let node = NodeData {
            content,
            parent: None,
            children: Vec::new(),
        };
        self.live += 1;

        // Reuse free index or allocate new
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn get(&self, id: NodeId) -> Result<&NodeData> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(DomError::NodeNotFound(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(DomError::NodeNotFound(id))
    }

    fn element(&self, id: NodeId) -> Result<&ElementData> {
        match &self.get(id)?.content {
            NodeContent::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        match &mut self.get_mut(id)?.content {
            NodeContent::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).ok().and_then(|n| n.parent);
        }
        false
    }

    fn detach(&mut self, child: NodeId) -> Result<()> {
        let parent = self.get_mut(child)?.parent.take();
        if let Some(parent) = parent {
            if let Ok(p) = self.get_mut(parent) {
                p.children.retain(|&c| c != child);
            }
        }
        Ok(())
    }

    /// Free `id` and every descendant. The caller detaches `id` first.
    fn release_subtree(&mut self, id: NodeId) {
        let Ok(node) = self.get_mut(id) else { return };
        let children = std::mem::take(&mut node.children);

        // FIRST: release children (recursive!)
        for child in children {
            self.release_subtree(child);
        }

        let slot = &mut self.slots[id.index()];
        slot.node = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
    }
}

thread_local! {
    static DOCUMENT: RefCell<Document> = RefCell::new(Document::default());
}

fn with_doc<R>(f: impl FnOnce(&Document) -> R) -> R {
    DOCUMENT.with(|doc| f(&doc.borrow()))
}

fn with_doc_mut<R>(f: impl FnOnce(&mut Document) -> R) -> R {
    DOCUMENT.with(|doc| f(&mut doc.borrow_mut()))
}

// =============================================================================
// Node Creation
// =============================================================================

/// Create an element. The tag is lower-cased.
pub fn create_element(tag: &str) -> Result<NodeId> {
    if !is_valid_tag_name(tag) {
        return Err(DomError::InvalidTagName(tag.to_string()));
    }
    let data = ElementData {
        tag: tag.to_ascii_lowercase(),
        attributes: Vec::new(),
        style: StyleDeclaration::new(),
        properties: HashMap::new(),
        listeners: Vec::new(),
    };
    Ok(with_doc_mut(|doc| doc.allocate(NodeContent::Element(data))))
}

/// Create a text node.
pub fn create_text_node(text: impl Into<String>) -> NodeId {
    let text = text.into();
    with_doc_mut(|doc| doc.allocate(NodeContent::Text(text)))
}

/// Create an empty document fragment.
pub fn create_document_fragment() -> NodeId {
    with_doc_mut(|doc| doc.allocate(NodeContent::Fragment))
}

fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '=' | '"' | '\''))
}

// =============================================================================
// Tree Structure
// =============================================================================

/// Append `child` as the last child of `parent`.
///
/// A child that already has a parent is moved. A fragment child contributes
/// its children (in order) and is left empty.
pub fn append_child(parent: NodeId, child: NodeId) -> Result<()> {
    with_doc_mut(|doc| {
        if matches!(doc.get(parent)?.content, NodeContent::Text(_)) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if doc.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        let is_fragment = matches!(doc.get(child)?.content, NodeContent::Fragment);
        let moved = if is_fragment {
            std::mem::take(&mut doc.get_mut(child)?.children)
        } else {
            doc.detach(child)?;
            vec![child]
        };

        for &node in &moved {
            doc.get_mut(node)?.parent = Some(parent);
        }
        doc.get_mut(parent)?.children.extend(moved);
        Ok(())
    })
}

/// Detach `child` from `parent`. The child stays alive.
pub fn remove_child(parent: NodeId, child: NodeId) -> Result<()> {
    with_doc_mut(|doc| {
        if doc.get(child)?.parent != Some(parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        doc.detach(child)
    })
}

/// Detach `node` from its parent and free it along with its whole subtree.
///
/// Any [`NodeId`] into the released subtree reports
/// [`DomError::NodeNotFound`] afterwards.
pub fn release_node(node: NodeId) -> Result<()> {
    with_doc_mut(|doc| {
        doc.detach(node)?;
        doc.release_subtree(node);
        Ok(())
    })
}

/// Release every child of `parent`, leaving it empty.
pub fn clear_children(parent: NodeId) -> Result<()> {
    with_doc_mut(|doc| {
        let children = std::mem::take(&mut doc.get_mut(parent)?.children);
        for child in children {
            if let Ok(node) = doc.get_mut(child) {
                node.parent = None;
            }
            doc.release_subtree(child);
        }
        Ok(())
    })
}

pub fn parent_node(node: NodeId) -> Result<Option<NodeId>> {
    with_doc(|doc| Ok(doc.get(node)?.parent))
}

pub fn child_nodes(node: NodeId) -> Result<Vec<NodeId>> {
    with_doc(|doc| Ok(doc.get(node)?.children.clone()))
}

pub fn first_child(node: NodeId) -> Result<Option<NodeId>> {
    with_doc(|doc| Ok(doc.get(node)?.children.first().copied()))
}

pub fn node_kind(node: NodeId) -> Result<NodeKind> {
    with_doc(|doc| {
        Ok(match doc.get(node)?.content {
            NodeContent::Element(_) => NodeKind::Element,
            NodeContent::Text(_) => NodeKind::Text,
            NodeContent::Fragment => NodeKind::Fragment,
        })
    })
}

/// Check whether `node` is still alive.
pub fn is_alive(node: NodeId) -> bool {
    with_doc(|doc| doc.get(node).is_ok())
}

/// Lower-case tag of an element.
pub fn tag_name(node: NodeId) -> Result<String> {
    with_doc(|doc| Ok(doc.element(node)?.tag.clone()))
}

/// Data of a text node, `None` for elements and fragments.
pub fn node_value(node: NodeId) -> Result<Option<String>> {
    with_doc(|doc| {
        Ok(match &doc.get(node)?.content {
            NodeContent::Text(text) => Some(text.clone()),
            _ => None,
        })
    })
}

/// Concatenated text of `node` and all its descendants.
pub fn text_content(node: NodeId) -> Result<String> {
    fn collect(doc: &Document, id: NodeId, out: &mut String) -> Result<()> {
        let node = doc.get(id)?;
        if let NodeContent::Text(text) = &node.content {
            out.push_str(text);
        }
        for &child in &node.children {
            collect(doc, child, out)?;
        }
        Ok(())
    }

    with_doc(|doc| {
        let mut out = String::new();
        collect(doc, node, &mut out)?;
        Ok(out)
    })
}

// =============================================================================
// Attributes
// =============================================================================

/// Set an attribute. Setting `style` replaces the inline style declaration
/// with the parsed text.
pub fn set_attribute(node: NodeId, name: &str, value: &str) -> Result<()> {
    with_doc_mut(|doc| {
        let el = doc.element_mut(node)?;
        if name == "style" {
            el.style.set_css_text(value);
        }
        match el.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(attr) => attr.1 = value.to_string(),
            None => el.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    })
}

pub fn get_attribute(node: NodeId, name: &str) -> Result<Option<String>> {
    with_doc(|doc| {
        Ok(doc
            .element(node)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone()))
    })
}

pub fn has_attribute(node: NodeId, name: &str) -> Result<bool> {
    Ok(get_attribute(node, name)?.is_some())
}

pub fn remove_attribute(node: NodeId, name: &str) -> Result<()> {
    with_doc_mut(|doc| {
        let el = doc.element_mut(node)?;
        if name == "style" {
            el.style = StyleDeclaration::new();
        }
        el.attributes.retain(|(n, _)| n != name);
        Ok(())
    })
}

/// All attributes in the order they were first set.
pub fn attributes(node: NodeId) -> Result<Vec<(String, String)>> {
    with_doc(|doc| Ok(doc.element(node)?.attributes.clone()))
}

pub fn set_class_name(node: NodeId, class: &str) -> Result<()> {
    set_attribute(node, "class", class)
}

/// Class string of an element (empty when unset).
pub fn class_name(node: NodeId) -> Result<String> {
    Ok(get_attribute(node, "class")?.unwrap_or_default())
}

// =============================================================================
// Inline Style
// =============================================================================

/// Set one property on the live style declaration and reflect it into the
/// `style` attribute.
pub fn style_set_property(node: NodeId, name: &str, value: &str) -> Result<()> {
    with_doc_mut(|doc| {
        let el = doc.element_mut(node)?;
        el.style.set_property(name, value);
        let css = el.style.css_text();
        match el.attributes.iter_mut().find(|(n, _)| n == "style") {
            Some(attr) => attr.1 = css,
            None => el.attributes.push(("style".to_string(), css)),
        }
        Ok(())
    })
}

/// Replace the whole declaration. The `style` attribute receives the
/// normalized text, not the input.
pub fn style_set_css_text(node: NodeId, css: &str) -> Result<()> {
    with_doc_mut(|doc| {
        let el = doc.element_mut(node)?;
        el.style.set_css_text(css);
        let css = el.style.css_text();
        match el.attributes.iter_mut().find(|(n, _)| n == "style") {
            Some(attr) => attr.1 = css,
            None => el.attributes.push(("style".to_string(), css)),
        }
        Ok(())
    })
}

pub fn style_get_property(node: NodeId, name: &str) -> Result<Option<String>> {
    with_doc(|doc| Ok(doc.element(node)?.style.get_property(name).map(str::to_string)))
}

/// Serialized live style declaration.
pub fn style_css_text(node: NodeId) -> Result<String> {
    with_doc(|doc| Ok(doc.element(node)?.style.css_text()))
}

// =============================================================================
// Live Properties
// =============================================================================

/// Set a live element property. Properties are not attributes: they are not
/// serialized and do not show up in [`attributes`].
pub fn set_property(node: NodeId, name: &str, value: DomProperty) -> Result<()> {
    with_doc_mut(|doc| {
        doc.element_mut(node)?
            .properties
            .insert(name.to_string(), value);
        Ok(())
    })
}

pub fn get_property(node: NodeId, name: &str) -> Result<Option<DomProperty>> {
    with_doc(|doc| Ok(doc.element(node)?.properties.get(name).cloned()))
}

// =============================================================================
// Events
// =============================================================================

/// Register a listener for `event_type` (compared lower-case).
pub fn add_event_listener(node: NodeId, event_type: &str, listener: EventListener) -> Result<()> {
    with_doc_mut(|doc| {
        doc.element_mut(node)?
            .listeners
            .push((event_type.to_ascii_lowercase(), listener));
        Ok(())
    })
}

/// Number of listeners registered on `node` for `event_type`.
pub fn listener_count(node: NodeId, event_type: &str) -> Result<usize> {
    let event_type = event_type.to_ascii_lowercase();
    with_doc(|doc| {
        Ok(doc
            .element(node)?
            .listeners
            .iter()
            .filter(|(t, _)| *t == event_type)
            .count())
    })
}

/// Dispatch `event` at `target`, bubbling to its ancestors.
///
/// The propagation path is fixed before the first listener runs. Listeners
/// are cloned out of the arena before they are invoked, so they may freely
/// mutate the document, including releasing nodes on the path; released
/// nodes are skipped. Returns `false` if a listener called
/// [`Event::prevent_default`].
pub fn dispatch_event(target: NodeId, event: &Event) -> Result<bool> {
    let path = with_doc(|doc| -> Result<Vec<NodeId>> {
        doc.get(target)?;
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(id) = current {
            path.push(id);
            current = doc.get(id).ok().and_then(|n| n.parent);
        }
        Ok(path)
    })?;

    event.begin_dispatch(target);
    tracing::trace!(event = event.event_type(), %target, depth = path.len(), "dispatch");

    for node in path {
        let listeners: Vec<EventListener> = with_doc(|doc| match doc.element(node) {
            Ok(el) => el
                .listeners
                .iter()
                .filter(|(t, _)| t == event.event_type())
                .map(|(_, l)| l.clone())
                .collect(),
            Err(_) => Vec::new(),
        });

        event.set_current_target(Some(node));
        for listener in listeners {
            listener(event);
        }

        if event.is_propagation_stopped() {
            break;
        }
    }
    event.set_current_target(None);

    Ok(!event.is_default_prevented())
}

// =============================================================================
// Reset & Stats
// =============================================================================

/// Number of live nodes in the document.
pub fn node_count() -> usize {
    with_doc(|doc| doc.live)
}

/// Drop every node (for testing).
pub fn reset_document() {
    with_doc_mut(|doc| *doc = Document::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_document();
    }

    #[test]
    fn test_create_and_append() {
        setup();

        let ul = create_element("UL").unwrap();
        let li = create_element("li").unwrap();
        let text = create_text_node("one");

        append_child(li, text).unwrap();
        append_child(ul, li).unwrap();

        assert_eq!(tag_name(ul).unwrap(), "ul");
        assert_eq!(child_nodes(ul).unwrap(), vec![li]);
        assert_eq!(parent_node(li).unwrap(), Some(ul));
        assert_eq!(text_content(ul).unwrap(), "one");
        assert_eq!(node_count(), 3);
    }

    #[test]
    fn test_invalid_tag() {
        setup();

        assert_eq!(create_element(""), Err(DomError::InvalidTagName(String::new())));
        assert!(create_element("di v").is_err());
        assert!(create_element("<div>").is_err());
        assert!(create_element("my-widget").is_ok());
    }

    #[test]
    fn test_fragment_moves_children() {
        setup();

        let div = create_element("div").unwrap();
        let frag = create_document_fragment();
        let a = create_text_node("a");
        let b = create_text_node("b");
        append_child(frag, a).unwrap();
        append_child(frag, b).unwrap();

        append_child(div, frag).unwrap();

        assert_eq!(child_nodes(div).unwrap(), vec![a, b]);
        assert!(child_nodes(frag).unwrap().is_empty());
        assert_eq!(parent_node(a).unwrap(), Some(div));
    }

    #[test]
    fn test_append_moves_between_parents() {
        setup();

        let first = create_element("div").unwrap();
        let second = create_element("div").unwrap();
        let child = create_element("span").unwrap();

        append_child(first, child).unwrap();
        append_child(second, child).unwrap();

        assert!(child_nodes(first).unwrap().is_empty());
        assert_eq!(child_nodes(second).unwrap(), vec![child]);
    }

    #[test]
    fn test_hierarchy_errors() {
        setup();

        let outer = create_element("div").unwrap();
        let inner = create_element("div").unwrap();
        let text = create_text_node("x");
        append_child(outer, inner).unwrap();

        assert_eq!(
            append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
        assert!(append_child(outer, outer).is_err());
        assert!(append_child(text, inner).is_err());
        assert!(remove_child(inner, outer).is_err());
    }

    #[test]
    fn test_release_and_stale_ids() {
        setup();

        let div = create_element("div").unwrap();
        let span = create_element("span").unwrap();
        append_child(div, span).unwrap();

        release_node(div).unwrap();
        assert!(!is_alive(div));
        assert!(!is_alive(span));
        assert_eq!(node_count(), 0);
        assert_eq!(tag_name(span), Err(DomError::NodeNotFound(span)));

        // Reuses a freed slot but with a new generation
        let reused = create_element("p").unwrap();
        assert!(reused.index() == div.index() || reused.index() == span.index());
        assert_ne!(reused, div);
        assert_ne!(reused, span);
        assert!(!is_alive(div) && !is_alive(span));
    }

    #[test]
    fn test_clear_children() {
        setup();

        let container = create_element("div").unwrap();
        for i in 0..3 {
            let child = create_text_node(i.to_string());
            append_child(container, child).unwrap();
        }
        assert_eq!(node_count(), 4);

        clear_children(container).unwrap();
        assert!(child_nodes(container).unwrap().is_empty());
        assert_eq!(node_count(), 1);
    }

    #[test]
    fn test_attributes_and_style() {
        setup();

        let div = create_element("div").unwrap();
        set_attribute(div, "id", "main").unwrap();
        set_class_name(div, "card wide").unwrap();
        set_attribute(div, "style", "color: red").unwrap();

        assert_eq!(get_attribute(div, "id").unwrap(), Some("main".to_string()));
        assert_eq!(class_name(div).unwrap(), "card wide");
        assert_eq!(style_get_property(div, "color").unwrap(), Some("red".to_string()));
        // Raw text is kept until the declaration is touched
        assert_eq!(get_attribute(div, "style").unwrap(), Some("color: red".to_string()));

        style_set_property(div, "fontSize", "12px").unwrap();
        assert_eq!(
            get_attribute(div, "style").unwrap(),
            Some("color: red; font-size: 12px;".to_string())
        );

        remove_attribute(div, "style").unwrap();
        assert_eq!(style_css_text(div).unwrap(), "");
        assert!(!has_attribute(div, "style").unwrap());

        style_set_css_text(div, "margin:0;  color : blue").unwrap();
        assert_eq!(style_get_property(div, "color").unwrap(), Some("blue".to_string()));
        assert_eq!(
            get_attribute(div, "style").unwrap(),
            Some("margin: 0; color: blue;".to_string())
        );
    }

    #[test]
    fn test_text_nodes_have_no_attributes() {
        setup();

        let text = create_text_node("hi");
        assert_eq!(node_value(text).unwrap(), Some("hi".to_string()));
        assert_eq!(set_attribute(text, "id", "x"), Err(DomError::NotAnElement(text)));
    }

    #[test]
    fn test_properties_are_not_attributes() {
        setup();

        let input = create_element("input").unwrap();
        set_property(input, "value", DomProperty::Str("abc".into())).unwrap();
        set_property(input, "checked", DomProperty::Bool(true)).unwrap();

        assert_eq!(
            get_property(input, "value").unwrap(),
            Some(DomProperty::Str("abc".into()))
        );
        assert_eq!(get_property(input, "checked").unwrap().and_then(|p| p.as_bool()), Some(true));
        assert!(attributes(input).unwrap().is_empty());
    }

    #[test]
    fn test_dispatch_bubbles() {
        setup();

        let outer = create_element("div").unwrap();
        let button = create_element("button").unwrap();
        append_child(outer, button).unwrap();

        let log = Rc::new(RefCell::new(Vec::new()));
        let log_inner = log.clone();
        add_event_listener(button, "click", Rc::new(move |e: &Event| {
            log_inner.borrow_mut().push(("button", e.current_target()));
        }))
        .unwrap();
        let log_outer = log.clone();
        add_event_listener(outer, "click", Rc::new(move |e: &Event| {
            log_outer.borrow_mut().push(("outer", e.current_target()));
        }))
        .unwrap();

        let event = Event::new("click");
        assert!(dispatch_event(button, &event).unwrap());
        assert_eq!(
            *log.borrow(),
            vec![("button", Some(button)), ("outer", Some(outer))]
        );
        assert_eq!(event.target(), Some(button));
    }

    #[test]
    fn test_stop_propagation_and_prevent_default() {
        setup();

        let outer = create_element("div").unwrap();
        let button = create_element("button").unwrap();
        append_child(outer, button).unwrap();

        let outer_hits = Rc::new(RefCell::new(0));
        add_event_listener(button, "click", Rc::new(|e: &Event| {
            e.stop_propagation();
            e.prevent_default();
        }))
        .unwrap();
        let hits = outer_hits.clone();
        add_event_listener(outer, "click", Rc::new(move |_: &Event| {
            *hits.borrow_mut() += 1;
        }))
        .unwrap();

        assert!(!dispatch_event(button, &Event::new("click")).unwrap());
        assert_eq!(*outer_hits.borrow(), 0);
    }

    #[test]
    fn test_listener_may_release_its_own_node() {
        setup();

        let container = create_element("div").unwrap();
        let button = create_element("button").unwrap();
        append_child(container, button).unwrap();

        add_event_listener(button, "click", Rc::new(move |_: &Event| {
            clear_children(container).unwrap();
        }))
        .unwrap();

        dispatch_event(button, &Event::new("click")).unwrap();
        assert!(!is_alive(button));
        assert!(child_nodes(container).unwrap().is_empty());
        assert_eq!(listener_count(container, "click").unwrap(), 0);
    }
}
