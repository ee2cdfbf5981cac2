//! Cart page: quantities, removal, and checkout shortcuts.

use std::rc::Rc;

use web_sys::Element;

use super::{SharedStorefront, with_storefront};
use crate::util::dom;
use crate::util::input::{adjust_quantity, parse_quantity};

pub(super) fn init(storefront: &SharedStorefront) {
    for item in dom::query_all(".cart-item") {
        let Some(id) = item.get_attribute("data-product") else {
            continue;
        };
        wire_item(storefront, &item, Rc::from(id));
    }

    let clear = Rc::clone(storefront);
    dom::on_first(".clear-cart", "click", move |_| {
        if with_storefront(&clear, |s| s.clear_cart()).unwrap_or(false) {
            for item in dom::query_all(".cart-item") {
                item.remove();
            }
        }
    });

    let shopping = Rc::clone(storefront);
    dom::on_first(".continue-shopping", "click", move |_| {
        with_storefront(&shopping, |s| s.continue_shopping());
    });

    let delivery = Rc::clone(storefront);
    dom::on_first(".proceed-delivery", "click", move |_| {
        with_storefront(&delivery, |s| s.proceed_to_delivery());
    });

    // The cart badge is redrawn by the global initializer.
    storefront.borrow().refresh_compare();
}

fn wire_item(storefront: &SharedStorefront, item: &Element, id: Rc<str>) {
    for (selector, delta) in [(".quantity-minus", -1), (".quantity-plus", 1)] {
        let Some(button) = dom::query_within(item, selector) else {
            continue;
        };
        let item = item.clone();
        dom::listen(&button, "click", move |_| step_quantity(&item, delta));
    }

    if let Some(button) = dom::query_within(item, ".remove-item") {
        let storefront = Rc::clone(storefront);
        let item = item.clone();
        dom::listen(&button, "click", move |_| {
            if with_storefront(&storefront, |s| s.remove_from_cart(&id)).unwrap_or(false) {
                item.remove();
            }
        });
    }
}

/// Display-only: the new quantity is not persisted.
fn step_quantity(item: &Element, delta: i32) {
    let Some(value) = dom::query_within(item, ".quantity-value") else {
        return;
    };
    let current = parse_quantity(&value.text_content().unwrap_or_default());
    value.set_text_content(Some(&adjust_quantity(current, delta).to_string()));
}
