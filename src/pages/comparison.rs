//! Comparison page: category tabs and removal of compared products.

use std::rc::Rc;

use super::{SharedStorefront, with_storefront};
use crate::util::dom;

pub(super) fn init(storefront: &SharedStorefront) {
    for tab in dom::query_all(".category-tab") {
        let Some(category) = tab.get_attribute("data-category") else {
            continue;
        };
        let target = tab.clone();
        dom::listen(&tab, "click", move |_| show_category(&category, &target));
    }

    // Each `.remove-compare` sits inside the column for its product.
    for button in dom::query_all(".remove-compare") {
        let Some(id) = button.get_attribute("data-product") else {
            continue;
        };
        let storefront = Rc::clone(storefront);
        let target = button.clone();
        dom::listen(&button, "click", move |_| {
            if with_storefront(&storefront, |s| s.remove_from_compare(&id)).unwrap_or(false) {
                remove_column(&target);
            }
        });
    }

    storefront.borrow().refresh_compare();
}

fn remove_column(button: &web_sys::Element) {
    match button.closest(".compare-product") {
        Ok(Some(column)) => column.remove(),
        Ok(None) => button.remove(),
        Err(err) => log::warn!("could not find compare column: {err:?}"),
    }
}

fn show_category(category: &str, tab: &web_sys::Element) {
    for panel in dom::query_all(".comparison-category") {
        dom::remove_class(&panel, "active");
    }
    if let Some(panel) = dom::by_id(category) {
        dom::add_class(&panel, "active");
    }
    dom::activate_one(".category-tab", Some(tab));
}
