//! Property Reconciliation - Apply VNode props to a fresh element.
//!
//! Runs once per element, before any child is materialized:
//!
//! | prop | effect |
//! |---|---|
//! | `ref` (callback) | called with the element, children not yet attached |
//! | `className` | class string |
//! | `style` | text: raw style attribute; map: each entry onto the live style |
//! | `on<Event>` (handler) | listener for the lower-cased event name |
//! | `value`, `checked`, `selected` | live properties, not attributes |
//! | `true` | attribute present with empty value |
//! | `false`, null | attribute omitted |
//! | anything else | string attribute |

use crate::dom::{self, event_name_from_prop, DomProperty, NodeId};
use crate::error::DomError;
use crate::vnode::{PropValue, Props, StyleValue};

/// Apply every prop (children excluded) to `el`, in authoring order.
pub fn apply_props(el: NodeId, props: &Props) -> Result<(), DomError> {
    for (key, value) in props.iter() {
        apply_prop(el, key, value)?;
    }
    Ok(())
}

fn apply_prop(el: NodeId, key: &str, value: &PropValue) -> Result<(), DomError> {
    match (key, value) {
        // No keyed reconciliation: the key only exists for authoring parity.
        ("children" | "key", _) => {}

        ("ref", PropValue::Ref(callback)) => callback(el),

        ("className", value) => {
            if let Some(class) = value.to_attr_string() {
                dom::set_class_name(el, &class)?;
            }
        }

        ("style", PropValue::Style(StyleValue::Map(entries))) => {
            for (name, val) in entries {
                dom::style_set_property(el, name, val)?;
            }
        }
        ("style", PropValue::Style(StyleValue::Text(text)) | PropValue::Str(text)) => {
            dom::set_attribute(el, "style", text)?;
        }

        (key, PropValue::Handler(handler)) if event_name_from_prop(key).is_some() => {
            if let Some(event) = event_name_from_prop(key) {
                dom::add_event_listener(el, &event, handler.clone())?;
            }
        }

        ("value", value) => {
            if let Some(text) = value.to_attr_string() {
                dom::set_property(el, "value", DomProperty::Str(text))?;
            }
        }
        ("checked" | "selected", value) => {
            if !value.is_null() {
                dom::set_property(el, key, DomProperty::Bool(is_truthy(value)))?;
            }
        }

        (key, PropValue::Bool(true)) => dom::set_attribute(el, key, "")?,
        (_, PropValue::Bool(false) | PropValue::Null) => {}

        // A callback under a key that takes none has no string form.
        (key, PropValue::Handler(_) | PropValue::Ref(_)) => {
            tracing::trace!(key, "ignoring inert callback prop");
        }

        (key, value) => {
            if let Some(text) = value.to_attr_string() {
                dom::set_attribute(el, key, &text)?;
            }
        }
    }
    Ok(())
}

fn is_truthy(value: &PropValue) -> bool {
    match value {
        PropValue::Null => false,
        PropValue::Bool(b) => *b,
        PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
        PropValue::Str(s) => !s.is_empty(),
        PropValue::Style(_) | PropValue::Handler(_) | PropValue::Ref(_) => true,
    }
}
