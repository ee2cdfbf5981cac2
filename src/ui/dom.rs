//! [`Ui`] backed by the live document.

use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;

use super::{CART_BADGE_STYLE, NotificationKind, Ui, compare_button_label};
use crate::components::notification;
use crate::router::CART_PAGE;
use crate::util::dom;

pub struct DomUi {
    notification_ms: u32,
}

impl DomUi {
    pub fn new(notification_ms: u32) -> Self {
        Self { notification_ms }
    }
}

impl Ui for DomUi {
    fn notify(&self, message: &str, kind: NotificationKind) {
        notification::show(message, kind, self.notification_ms);
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::warn!("navigation to {url} failed: {err:?}");
        }
    }

    fn render_compare_count(&self, count: usize) {
        let label = compare_button_label(count);
        for button in dom::query_all(".compare-btn") {
            button.set_text_content(Some(&label));
            if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(count == 0);
            }
        }
    }

    fn render_cart_count(&self, count: usize) {
        let Some(doc) = dom::document() else {
            return;
        };
        for link in dom::query_all(&format!("a[href=\"{CART_PAGE}\"]")) {
            if let Some(existing) = dom::query_within(&link, ".cart-badge") {
                existing.remove();
            }
            if count == 0 {
                continue;
            }
            let badge = match doc.create_element("span") {
                Ok(badge) => badge,
                Err(err) => {
                    log::warn!("could not create cart badge: {err:?}");
                    return;
                }
            };
            badge.set_class_name("cart-badge");
            if let Err(err) = badge.set_attribute("style", CART_BADGE_STYLE) {
                log::warn!("could not style cart badge: {err:?}");
            }
            badge.set_text_content(Some(&count.to_string()));
            dom::set_style(&link, "position", "relative");
            if let Err(err) = link.append_child(&badge) {
                log::warn!("could not attach cart badge: {err:?}");
            }
        }
    }
}
