//! Behavior shared by every page: in-page anchors, the compare button, and
//! the cart badge.

use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::{SharedStorefront, with_storefront};
use crate::util::dom;

pub(super) fn init(storefront: &SharedStorefront) {
    dom::on_each("a[href^=\"#\"]", "click", |anchor, ev| {
        let Some(target) = anchor.get_attribute("href").and_then(|href| anchor_target(&href)) else {
            return;
        };
        ev.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });

    for button in dom::query_all(".compare-btn") {
        let storefront = Rc::clone(storefront);
        dom::listen(&button, "click", move |_| {
            with_storefront(&storefront, |s| s.navigate_to_comparison());
        });
    }

    storefront.borrow().refresh_cart();
}

fn anchor_target(href: &str) -> Option<web_sys::Element> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    dom::by_id(id)
}
