//! Small wrappers over the `web-sys` calls the handlers repeat.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element matching `selector`; empty when the selector is invalid.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(collect_elements)
        .unwrap_or_default()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(collect_elements).unwrap_or_default()
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Writes inline style properties. An empty value removes the property.
pub fn set_styles<'a, V, I>(el: &Element, styles: I)
where
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a str, V)>,
{
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    for (prop, value) in styles {
        let _ = style.set_property(prop, value.as_ref());
    }
}

pub fn event_element(event: &Event) -> Option<Element> {
    event.current_target()?.dyn_into::<Element>().ok()
}

pub fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::wrap(Box::new(move |e: Event| {
        handler(e.unchecked_into::<E>());
    }) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    callback.forget();
}
