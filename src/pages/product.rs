//! Product detail page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use super::{SharedStorefront, with_storefront};
use crate::catalog::{CatalogSource, StaticCatalog};
use crate::util::dom;

pub(super) fn init(storefront: &SharedStorefront) {
    let selected = storefront.borrow().selected_product();
    if let Some(id) = selected {
        show_selected(&id);
        wire_actions(storefront, id);
    }

    dom::on_each(".thumbnail", "click", |thumbnail, _| change_image(thumbnail));
    dom::on_first(".specs-toggle", "click", |_| toggle_all_specs());

    storefront.borrow().refresh_compare();
}

/// Fill the detail markup from the product the catalog handed over.
fn show_selected(id: &str) {
    let Some(product) = StaticCatalog.find(id) else {
        log::debug!("selected product {id} is not in the catalog");
        return;
    };
    let fields = [
        (".product-title", product.title.to_owned()),
        (".product-spec", product.spec.to_owned()),
        (".product-price", product.price_label()),
    ];
    for (selector, text) in fields {
        if let Some(element) = dom::query(selector) {
            element.set_text_content(Some(&text));
        }
    }
    if let Some(image) = main_image() {
        image.set_src(product.image_url);
        image.set_alt(product.title);
    }
}

fn wire_actions(storefront: &SharedStorefront, id: String) {
    let id = Rc::<str>::from(id);

    let (compare, compare_id) = (Rc::clone(storefront), Rc::clone(&id));
    dom::on_first(".add-to-compare", "click", move |_| {
        with_storefront(&compare, |s| s.add_to_compare(&compare_id));
    });

    let (cart, cart_id) = (Rc::clone(storefront), Rc::clone(&id));
    dom::on_first(".add-to-cart", "click", move |_| {
        with_storefront(&cart, |s| s.add_to_cart(&cart_id));
    });

    let (favorites, favorite_id) = (Rc::clone(storefront), id);
    dom::on_first(".add-to-favorites", "click", move |_| {
        with_storefront(&favorites, |s| s.add_to_favorites(&favorite_id));
    });
}

fn main_image() -> Option<HtmlImageElement> {
    dom::by_id("mainImage").and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned())
}

fn change_image(thumbnail: &Element) {
    let source = dom::query_within(thumbnail, "img")
        .and_then(|img| img.dyn_ref::<HtmlImageElement>().cloned())
        .map(|img| img.src());
    if let (Some(main), Some(source)) = (main_image(), source) {
        main.set_src(&source);
    }
    dom::activate_one(".thumbnail", Some(thumbnail));
}

fn toggle_all_specs() {
    let (Some(specs), Some(button)) = (dom::by_id("allSpecs"), dom::query(".specs-toggle")) else {
        return;
    };
    if dom::style_value(&specs, "display") == "none" {
        dom::set_style(&specs, "display", "block");
        button.set_text_content(Some("Hide All Specifications"));
    } else {
        dom::set_style(&specs, "display", "none");
        button.set_text_content(Some("View All Specifications"));
    }
}
