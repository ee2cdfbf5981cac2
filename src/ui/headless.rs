use std::cell::{Cell, RefCell};

use super::{NotificationKind, Ui};

/// Everything a [`HeadlessUi`] was asked to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Notified { message: String, kind: NotificationKind },
    Alerted(String),
    Confirmed { message: String, accepted: bool },
    Navigated(String),
    CompareCount(usize),
    CartCount(usize),
}

/// [`Ui`] without a document: records every request and answers
/// confirmations with a fixed reply. Used off the browser and in tests.
#[derive(Debug)]
pub struct HeadlessUi {
    events: RefCell<Vec<UiEvent>>,
    confirm_reply: Cell<bool>,
}

impl Default for HeadlessUi {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessUi {
    /// Accepts every confirmation.
    pub fn new() -> Self {
        Self { events: RefCell::new(Vec::new()), confirm_reply: Cell::new(true) }
    }

    /// Declines every confirmation.
    pub fn declining() -> Self {
        let ui = Self::new();
        ui.set_confirm_reply(false);
        ui
    }

    pub fn set_confirm_reply(&self, accepted: bool) {
        self.confirm_reply.set(accepted);
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    /// Drain recorded events.
    pub fn take_events(&self) -> Vec<UiEvent> {
        self.events.take()
    }

    pub fn notifications(&self) -> Vec<(String, NotificationKind)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Notified { message, kind } => Some((message.clone(), *kind)),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Alerted(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            UiEvent::Navigated(url) => Some(url.clone()),
            _ => None,
        })
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Ui for HeadlessUi {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.record(UiEvent::Notified { message: message.to_owned(), kind });
    }

    fn alert(&self, message: &str) {
        self.record(UiEvent::Alerted(message.to_owned()));
    }

    fn confirm(&self, message: &str) -> bool {
        let accepted = self.confirm_reply.get();
        self.record(UiEvent::Confirmed { message: message.to_owned(), accepted });
        accepted
    }

    fn navigate(&self, url: &str) {
        self.record(UiEvent::Navigated(url.to_owned()));
    }

    fn render_compare_count(&self, count: usize) {
        self.record(UiEvent::CompareCount(count));
    }

    fn render_cart_count(&self, count: usize) {
        self.record(UiEvent::CartCount(count));
    }
}
