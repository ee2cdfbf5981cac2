//! Profile page: section navigation, favorites, and account forms.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTextAreaElement};

use super::{SharedStorefront, with_storefront};
use crate::ui::{NotificationKind, Ui};
use crate::util::dom;
use crate::util::input::{section_id, validate_required};

pub(super) fn init(storefront: &SharedStorefront) {
    for button in dom::query_all(".profile-nav-btn") {
        let section = section_id(&button.text_content().unwrap_or_default());
        let target = button.clone();
        dom::listen(&button, "click", move |_| show_section(&section, &target));
    }

    for item in dom::query_all(".favorite-item") {
        let (Some(id), Some(button)) = (item.get_attribute("data-product"), dom::query_within(&item, ".remove-favorite"))
        else {
            continue;
        };
        let storefront = Rc::clone(storefront);
        let item = item.clone();
        dom::listen(&button, "click", move |_| {
            if with_storefront(&storefront, |s| s.remove_favorite(&id)).unwrap_or(false) {
                item.remove();
            }
        });
    }

    let clear = Rc::clone(storefront);
    dom::on_first(".clear-favorites", "click", move |_| {
        if with_storefront(&clear, |s| s.clear_favorites()).unwrap_or(false) {
            for item in dom::query_all(".favorite-item") {
                item.remove();
            }
        }
    });

    wire_forms(storefront);
    storefront.borrow().refresh_compare();
}

fn show_section(section: &str, button: &Element) {
    for panel in dom::query_all(".profile-section") {
        dom::remove_class(&panel, "active");
    }
    if let Some(panel) = dom::by_id(section) {
        dom::add_class(&panel, "active");
    }
    dom::activate_one(".profile-nav-btn", Some(button));
}

/// Profile forms only submit when every required field has a value;
/// blank fields get a red border.
fn wire_forms(storefront: &SharedStorefront) {
    for form in dom::query_all(".profile-form") {
        let storefront = Rc::clone(storefront);
        let target = form.clone();
        dom::listen(&form, "submit", move |ev| {
            ev.prevent_default();
            if validate_form(&target) {
                with_storefront(&storefront, |s| s.ui().notify("Profile saved!", NotificationKind::Success));
            } else {
                with_storefront(&storefront, |s| {
                    s.ui().notify("Please fill in all required fields.", NotificationKind::Error);
                });
            }
        });
    }
}

fn validate_form(form: &Element) -> bool {
    let fields = dom::query_all_within(form, "input[required], textarea[required]");

    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let value = dom::input_value(&field)
            .or_else(|| field.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
            .unwrap_or_default();
        let border = if validate_required([value.as_str()]) { "#e5e7eb" } else { "#ef4444" };
        dom::set_style(&field, "border-color", border);
        values.push(value);
    }
    validate_required(values.iter().map(String::as_str))
}
