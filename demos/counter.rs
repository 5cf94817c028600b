//! Counter Example - State, events and the re-render loop
//!
//! Builds a small counter app, mounts it on an in-memory container, then
//! clicks its buttons and prints the document after each pass.
//!
//! Run with: RUST_LOG=spark_vdom=debug cargo run --example counter

use spark_vdom::dom::{self, Event, Modifiers, NodeId};
use spark_vdom::{
    children, component, create_element, create_fragment, create_root, use_state, Component,
    Props, StyleValue,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn counter() -> Component {
    component(|props: &Props| {
        let step = props.get_number("step").unwrap_or(1.0) as i64;
        let (count, set_count) = use_state(0_i64);
        let dec = set_count.clone();

        let color = if count.get() < 0 { "crimson" } else { "seagreen" };

        Some(create_element(
            "div",
            Some(Props::new().with("className", "counter")),
            children![
                create_element(
                    "span",
                    Some(Props::new().with(
                        "style",
                        StyleValue::map([("fontWeight", "bold"), ("color", color)]),
                    )),
                    format!("Count: {}", count.get()),
                ),
                create_element(
                    "button",
                    Some(Props::new().with("id", "inc").on("click", move |e: &Event| {
                        // Shift-click takes ten steps at once
                        let step = if e.modifiers().contains(Modifiers::SHIFT) { step * 10 } else { step };
                        set_count.update(move |n| n + step);
                    })),
                    "+",
                ),
                create_element(
                    "button",
                    Some(Props::new().with("id", "dec").on("click", move |_| {
                        dec.update(move |n| n - step);
                    })),
                    "-",
                ),
                (count.get() >= 10).then(|| create_element("em", None, "that's a lot")),
            ],
        ))
    })
}

fn find_by_id(root: NodeId, id: &str) -> Option<NodeId> {
    if dom::get_attribute(root, "id").ok().flatten().as_deref() == Some(id) {
        return Some(root);
    }
    dom::child_nodes(root)
        .ok()?
        .into_iter()
        .find_map(|child| find_by_id(child, id))
}

fn click(container: NodeId, id: &str, modifiers: Modifiers) -> spark_vdom::Result<()> {
    if let Some(button) = find_by_id(container, id) {
        dom::dispatch_event(button, &Event::with_modifiers("click", modifiers))?;
    }
    Ok(())
}

fn main() -> spark_vdom::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().compact().without_time())
        .init();

    println!("=== spark-vdom Counter Example ===\n");

    let container = dom::create_element("div")?;
    dom::set_attribute(container, "id", "app")?;

    let app = counter();
    let root = create_root(container, move || {
        create_fragment(
            None,
            children![
                create_element("h1", None, "Counter"),
                create_element(app.clone(), Some(Props::new().with("step", 5)), ()),
            ],
        )
    })?;

    println!("initial:\n  {}\n", dom::outer_html(container)?);

    click(container, "inc", Modifiers::empty())?;
    click(container, "inc", Modifiers::empty())?;
    println!("after two clicks on +:\n  {}\n", dom::outer_html(container)?);

    click(container, "inc", Modifiers::SHIFT)?;
    println!("after a shift-click on +:\n  {}\n", dom::outer_html(container)?);

    for _ in 0..5 {
        click(container, "dec", Modifiers::empty())?;
    }
    println!("after five clicks on -:\n  {}\n", dom::outer_html(container)?);

    println!("render passes: {}", root.render_count());
    println!("live nodes:    {}", dom::node_count());

    root.unmount()?;
    Ok(())
}
