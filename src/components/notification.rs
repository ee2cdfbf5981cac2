//! Transient notification toast.
//!
//! The static pages carry no stylesheet rule for `.notification`, so the
//! toast positions and colours itself inline. It slides in from the right
//! edge shortly after mounting and slides back out before it is removed.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use leptos::prelude::*;

use crate::ui::NotificationKind;

/// Delay before the toast slides into view.
pub const SLIDE_IN_DELAY_MS: u32 = 100;
/// Length of the slide-out transition before the node is dropped.
pub const SLIDE_OUT_MS: u32 = 300;

/// Inline style for a toast of `kind`; `shown` picks the on-screen position.
pub fn toast_style(kind: NotificationKind, shown: bool) -> String {
    let offset = if shown { "0" } else { "100%" };
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; border-radius: 0.5rem; \
         color: white; font-weight: 500; z-index: 1000; transform: translateX({offset}); \
         transition: transform 0.3s ease; max-width: 300px; overflow-wrap: break-word; \
         background-color: {};",
        kind.color()
    )
}

#[component]
pub fn Toast(message: String, kind: NotificationKind, shown: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class=kind.class_name() style=move || toast_style(kind, shown.get()) role="status" aria-live="polite">
            {message}
        </div>
    }
}

/// Mount a toast on `<body>`, slide it in, and remove it after
/// `duration_ms` plus the slide-out.
#[cfg(feature = "csr")]
pub fn show(message: &str, kind: NotificationKind, duration_ms: u32) {
    use gloo_timers::callback::Timeout;

    let Some(body) = crate::util::dom::document().and_then(|doc| doc.body()) else {
        log::debug!("no <body>; dropping notification {message:?}");
        return;
    };
    let message = message.to_owned();
    let shown = RwSignal::new(false);
    let handle = leptos::mount::mount_to(body, move || view! { <Toast message=message kind=kind shown=shown/> });

    Timeout::new(SLIDE_IN_DELAY_MS, move || shown.set(true)).forget();
    Timeout::new(duration_ms, move || shown.set(false)).forget();
    Timeout::new(duration_ms.saturating_add(SLIDE_OUT_MS), move || {
        drop(handle);
        shown.dispose();
    })
    .forget();
}
