//! UI feedback surface used by the list mutators.
//!
//! DESIGN
//! ======
//! Mutators never return structured results to page code. Every outcome the
//! shopper sees goes through [`Ui`]: transient notifications, blocking
//! warnings, confirmations before destructive actions, navigation, and the
//! count refreshes after a list changes.


#[cfg(feature = "csr")]
pub mod dom;
mod headless;

pub use headless::{HeadlessUi, UiEvent};

use serde::{Deserialize, Serialize};

/// Notification flavour; drives the CSS modifier and background colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Warning => "#f59e0b",
            Self::Info => "#3b82f6",
        }
    }

    /// CSS classes for a notification element of this kind.
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Inline style of the `.cart-badge` counter: a small red circle pinned to
/// the top-right corner of its (relatively positioned) cart link.
pub const CART_BADGE_STYLE: &str = "position: absolute; top: -8px; right: -8px; background: #ef4444; \
     color: white; border-radius: 50%; width: 20px; height: 20px; font-size: 12px; display: flex; \
     align-items: center; justify-content: center; font-weight: 600;";

/// Label of every `.compare-btn`.
pub fn compare_button_label(count: usize) -> String {
    format!("Compare Products ({count})")
}

pub trait Ui {
    /// Transient, non-blocking acknowledgment that dismisses itself.
    fn notify(&self, message: &str, kind: NotificationKind);

    /// Blocking warning the shopper has to dismiss.
    fn alert(&self, message: &str);

    /// Ask before a destructive action. `false` means leave state alone.
    fn confirm(&self, message: &str) -> bool;

    fn navigate(&self, url: &str);

    fn render_compare_count(&self, count: usize);

    fn render_cart_count(&self, count: usize);
}
