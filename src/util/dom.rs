//! `web-sys` lookups and listener wiring shared by the pages.
//!
//! Every lookup returns `Option`/`Vec`: a selector that matches nothing on
//! the current page is an explicit no-op for the caller, which lets handlers
//! be wired on every page without per-page branching.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|doc| doc.query_selector(selector).unwrap_or_default())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

/// Descendants of `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap_or_default()
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for the lifetime of the page.
///
/// Pages are one-shot loads; the closure is leaked with `forget` and lives
/// until the next navigation.
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event}: {err:?}");
        return;
    }
    closure.forget();
}

/// Wire `handler` to every element matching `selector`, passing the element.
pub fn on_each(selector: &str, event: &str, handler: impl Fn(&Element, Event) + Clone + 'static) {
    for element in query_all(selector) {
        let handler = handler.clone();
        let target = element.clone();
        listen(&element, event, move |ev| handler(&target, ev));
    }
}

/// Wire `handler` to the first element matching `selector`, if any.
pub fn on_first(selector: &str, event: &str, handler: impl FnMut(Event) + 'static) {
    if let Some(element) = query(selector) {
        listen(&element, event, handler);
    }
}

pub fn input_value(element: &Element) -> Option<String> {
    element.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
}

pub fn input_value_by_id(id: &str) -> String {
    by_id(id).and_then(|el| input_value(&el)).unwrap_or_default()
}

/// Values of checked `<input name=...>` boxes.
pub fn checked_values(name: &str) -> Vec<String> {
    query_all(&format!("input[name=\"{name}\"]:checked"))
        .iter()
        .filter_map(input_value)
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("could not set {property}: {err:?}");
        }
    }
}

pub fn style_value(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| html.style().get_property_value(property).unwrap_or_default())
        .unwrap_or_default()
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        log::warn!("could not add class {class}: {err:?}");
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().remove_1(class) {
        log::warn!("could not remove class {class}: {err:?}");
    }
}

/// Make `active` the only element in `group` carrying the `active` class.
pub fn activate_one(group: &str, active: Option<&Element>) {
    for element in query_all(group) {
        remove_class(&element, "active");
    }
    if let Some(element) = active {
        add_class(element, "active");
    }
}
