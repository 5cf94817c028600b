//! Property tests for the factory and the materializer.

use proptest::prelude::*;

use spark_vdom::dom;
use spark_vdom::vnode::flatten_children;
use spark_vdom::{create_element, render_to_dom, Child, ChildArg, PropValue, Props};

fn child_arg() -> impl Strategy<Value = ChildArg> {
    let leaf = prop_oneof![
        Just(ChildArg::Null),
        any::<bool>().prop_map(ChildArg::Bool),
        "[a-z]{1,6}".prop_map(ChildArg::Text),
        (-1000i32..1000).prop_map(|n| ChildArg::Number(f64::from(n))),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(ChildArg::List)
    })
}

/// Reference flattening: depth-first, recursive.
fn survivors(arg: &ChildArg, out: &mut Vec<Child>) {
    match arg {
        ChildArg::Null | ChildArg::Bool(false) => {}
        ChildArg::Bool(true) => out.push(Child::Text("true".to_string())),
        ChildArg::Text(s) => out.push(Child::Text(s.clone())),
        ChildArg::Number(n) => out.push(Child::Number(*n)),
        ChildArg::Node(v) => out.push(Child::Node(v.clone())),
        ChildArg::List(items) => items.iter().for_each(|item| survivors(item, out)),
    }
}

/// Attribute names that fall through to the plain attribute rule.
fn plain_attr_name() -> impl Strategy<Value = String> {
    "[a-z][a-z-]{0,8}".prop_filter("reserved prop name", |name| {
        !name.starts_with("on")
            && !matches!(
                name.as_str(),
                "children" | "key" | "ref" | "style" | "value" | "checked" | "selected"
            )
    })
}

proptest! {
    #[test]
    fn flattening_keeps_order_and_drops_holes(arg in child_arg()) {
        let mut expected = Vec::new();
        survivors(&arg, &mut expected);

        let node = create_element("div", None, arg);
        prop_assert_eq!(node.children(), expected.as_slice());
    }

    #[test]
    fn flattening_is_idempotent(arg in child_arg()) {
        let once = flatten_children(arg);
        let again = flatten_children(ChildArg::from(once.clone()));
        prop_assert_eq!(once, again);
    }

    #[test]
    fn text_content_concatenates_survivors(arg in child_arg()) {
        dom::reset_document();

        let mut expected = Vec::new();
        survivors(&arg, &mut expected);
        let text: String = expected.iter().filter_map(Child::as_text).collect();

        let el = render_to_dom(&create_element("p", None, arg)).unwrap();
        prop_assert_eq!(dom::text_content(el).unwrap(), text);
        prop_assert_eq!(dom::child_nodes(el).unwrap().len(), expected.len());
    }

    #[test]
    fn boolean_attributes_are_present_or_absent(name in plain_attr_name(), on in any::<bool>()) {
        dom::reset_document();

        let props = Props::new().with(name.clone(), PropValue::Bool(on));
        let el = render_to_dom(&create_element("input", Some(props), ())).unwrap();

        prop_assert_eq!(dom::has_attribute(el, &name).unwrap(), on);
        if on {
            prop_assert_eq!(dom::get_attribute(el, &name).unwrap(), Some(String::new()));
        }
    }

    #[test]
    fn two_materializations_are_equivalent(arg in child_arg()) {
        dom::reset_document();

        let tree = create_element("section", Some(Props::new().with("id", "s")), arg);
        let first = render_to_dom(&tree).unwrap();
        let second = render_to_dom(&tree).unwrap();

        prop_assert_ne!(first, second);
        prop_assert_eq!(dom::outer_html(first).unwrap(), dom::outer_html(second).unwrap());
    }
}
