//! Page initializers for the static storefront pages.
//!
//! ARCHITECTURE
//! ============
//! [`boot`] builds the page's single [`Storefront`], names the page from the
//! location, and hands [`BrowserPages`] to [`router::dispatch`]. Each page
//! module only wires listeners; every state change goes back through the
//! shared controller.

mod cart;
mod catalog;
mod comparison;
mod global;
mod home;
mod product;
mod profile;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{CONFIG_ELEMENT_ID, StorefrontConfig};
use crate::router::{self, CatalogQuery, PageIdentity, PageInitializers};
use crate::store::LocalStorage;
use crate::storefront::Storefront;
use crate::ui::dom::DomUi;
use crate::util::dom;

/// The page's controller, shared by every registered listener.
pub type SharedStorefront = Rc<RefCell<Storefront<LocalStorage, DomUi>>>;

pub struct BrowserPages {
    storefront: SharedStorefront,
    query: CatalogQuery,
}

impl PageInitializers for BrowserPages {
    fn home(&mut self) {
        home::init(&self.storefront);
    }

    fn catalog(&mut self) {
        catalog::init(&self.storefront, &self.query);
    }

    fn product(&mut self) {
        product::init(&self.storefront);
    }

    fn comparison(&mut self) {
        comparison::init(&self.storefront);
    }

    fn cart(&mut self) {
        cart::init(&self.storefront);
    }

    fn profile(&mut self) {
        profile::init(&self.storefront);
    }

    fn global(&mut self) {
        global::init(&self.storefront);
    }
}

/// Load state and run the current page's initializers.
pub fn boot() {
    let raw_config = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let config = StorefrontConfig::from_json_or_default(raw_config.as_deref());
    let ui = DomUi::new(config.notification_ms);
    let storefront = Rc::new(RefCell::new(Storefront::load(config, LocalStorage::open(), ui)));

    let (path, search) = web_sys::window()
        .map(|w| {
            let location = w.location();
            (location.pathname().unwrap_or_default(), location.search().unwrap_or_default())
        })
        .unwrap_or_default();

    let page = PageIdentity::from_path(&path);
    log::info!("techmarket booting page {}", page.as_str());

    let mut pages = BrowserPages { storefront, query: CatalogQuery::parse(&search) };
    router::dispatch(&page, &mut pages);
}

/// Borrow the controller mutably for one handler invocation.
///
/// Handlers run to completion one at a time on the UI thread, so the borrow
/// is only contended if a mutator re-enters page code, which none do.
pub(crate) fn with_storefront<R>(
    storefront: &SharedStorefront,
    f: impl FnOnce(&mut Storefront<LocalStorage, DomUi>) -> R,
) -> Option<R> {
    match storefront.try_borrow_mut() {
        Ok(mut guard) => Some(f(&mut guard)),
        Err(err) => {
            log::warn!("storefront busy, dropping event: {err}");
            None
        }
    }
}
