//! Homepage: search redirect and category shortcuts.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::{SharedStorefront, with_storefront};
use crate::util::dom;

pub(super) fn init(storefront: &SharedStorefront) {
    wire_search(storefront);
    wire_category_icons(storefront);
    wire_shortcuts(storefront);
}

fn wire_search(storefront: &SharedStorefront) {
    let (Some(input), Some(button)) = (dom::query(".search-input"), dom::query(".search-button")) else {
        return;
    };

    let submit = {
        let storefront = Rc::clone(storefront);
        let input = input.clone();
        Rc::new(move || {
            let query = dom::input_value(&input).unwrap_or_default();
            with_storefront(&storefront, |s| s.search(&query));
        })
    };

    let on_click = Rc::clone(&submit);
    dom::listen(&button, "click", move |_| on_click());
    dom::listen(&input, "keypress", move |ev| {
        if ev.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Enter") {
            submit();
        }
    });
}

/// Each icon names its category in `data-category`; the value is bound into
/// the handler once, here.
fn wire_category_icons(storefront: &SharedStorefront) {
    for item in dom::query_all(".category-icon-item") {
        let Some(category) = item.get_attribute("data-category") else {
            log::debug!("category icon without data-category");
            continue;
        };
        let storefront = Rc::clone(storefront);
        dom::listen(&item, "click", move |_| {
            with_storefront(&storefront, |s| s.navigate_to_category(&category));
        });
    }
}

fn wire_shortcuts(storefront: &SharedStorefront) {
    let guided = Rc::clone(storefront);
    dom::on_first(".guided-filters-btn", "click", move |_| {
        with_storefront(&guided, |s| s.navigate_to_guided_filters());
    });
}
