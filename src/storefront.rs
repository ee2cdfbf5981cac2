//! Storefront controller: shopper lists, their persistence, and feedback.
//!
//! ARCHITECTURE
//! ============
//! One [`Storefront`] is built per page load. It owns the in-memory
//! [`Collections`], the [`PersistentStore`] they mirror, and the [`Ui`] that
//! reports outcomes. Page code only ever calls the mutators below.
//!
//! Every mutator runs validate -> mutate memory -> persist -> refresh UI.
//! Persisting happens before feedback, so once a mutator returns the store
//! holds exactly what memory holds.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use crate::catalog::query::search_products;
use crate::catalog::{Category, CatalogSource, Product, catalog_title};
use crate::config::StorefrontConfig;
use crate::router::{self, CatalogQuery, CATALOG_PAGE, COMPARISON_PAGE, PRODUCT_PAGE};
use crate::state::Collections;
use crate::store::{KeyValueStore, PersistentStore};
use crate::ui::{NotificationKind, Ui};

pub const COMPARE_ADDED: &str = "Product added to comparison!";
pub const COMPARE_REMOVED: &str = "Product removed from comparison!";
pub const COMPARE_EMPTY: &str = "Please add products to compare first!";
pub const CART_ADDED: &str = "Product added to cart!";
pub const CART_REMOVE_PROMPT: &str = "Are you sure you want to remove this item from your cart?";
pub const CART_REMOVED: &str = "Item removed from cart!";
pub const CART_CLEAR_PROMPT: &str = "Are you sure you want to clear your entire cart?";
pub const CART_CLEARED: &str = "Cart cleared!";
pub const FAVORITE_ADDED: &str = "Added to favorites!";
pub const FAVORITE_REMOVE_PROMPT: &str = "Remove from favorites?";
pub const FAVORITE_REMOVED: &str = "Removed from favorites!";
pub const FAVORITES_CLEAR_PROMPT: &str = "Clear all favorites?";
pub const FAVORITES_CLEARED: &str = "Favorites cleared!";
pub const DELIVERY_NEXT: &str = "Proceeding to delivery information...";

/// Heading and starting products for one catalog page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogView {
    pub title: &'static str,
    pub products: Vec<Product>,
}

pub struct Storefront<S, U> {
    config: StorefrontConfig,
    store: PersistentStore<S>,
    ui: U,
    collections: Collections,
}

impl<S: KeyValueStore, U: Ui> Storefront<S, U> {
    /// Load the shopper's lists from `backend`.
    pub fn load(config: StorefrontConfig, backend: S, ui: U) -> Self {
        let store = PersistentStore::new(backend, config.keys.clone());
        let collections = store.load(config.compare_limit);
        log::debug!(
            "loaded lists: compare={} cart={} favorites={}",
            collections.compare().len(),
            collections.cart().len(),
            collections.favorites().len()
        );
        Self { config, store, ui, collections }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    pub fn store(&self) -> &PersistentStore<S> {
        &self.store
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Redraw both counters from memory.
    pub fn refresh(&self) {
        self.refresh_compare();
        self.refresh_cart();
    }

    pub fn refresh_compare(&self) {
        self.ui.render_compare_count(self.collections.compare().len());
    }

    pub fn refresh_cart(&self) {
        self.ui.render_cart_count(self.collections.cart().len());
    }

    fn persist(&self) {
        self.store.save(&self.collections);
    }

    // =========================================================================
    // COMPARE
    // =========================================================================

    /// Returns whether the product was added. Duplicates and a full list are
    /// reported with a blocking warning and leave the list unchanged.
    pub fn add_to_compare(&mut self, id: &str) -> bool {
        if let Err(err) = self.collections.add_to_compare(id, self.config.compare_limit) {
            log::info!("compare add of {id} rejected: {err}");
            self.ui.alert(&err.to_string());
            return false;
        }
        self.persist();
        self.refresh_compare();
        self.ui.notify(COMPARE_ADDED, NotificationKind::Success);
        true
    }

    /// Removing an id that is not listed does nothing, silently.
    pub fn remove_from_compare(&mut self, id: &str) -> bool {
        if !self.collections.remove_from_compare(id) {
            return false;
        }
        self.persist();
        self.refresh_compare();
        self.ui.notify(COMPARE_REMOVED, NotificationKind::Info);
        true
    }

    // =========================================================================
    // CART
    // =========================================================================

    pub fn add_to_cart(&mut self, id: &str) {
        self.collections.add_to_cart(id);
        self.persist();
        self.refresh_cart();
        self.ui.notify(CART_ADDED, NotificationKind::Success);
    }

    /// Asks first. Returns `true` when the shopper confirmed, in which case
    /// the rendered item should go too, whether or not `id` was stored.
    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        if !self.ui.confirm(CART_REMOVE_PROMPT) {
            return false;
        }
        if !self.collections.remove_from_cart(id) {
            log::debug!("{id} was not in the stored cart");
        }
        self.persist();
        self.refresh_cart();
        self.ui.notify(CART_REMOVED, NotificationKind::Info);
        true
    }

    /// Asks first. Returns `true` when the cart was cleared.
    pub fn clear_cart(&mut self) -> bool {
        if !self.ui.confirm(CART_CLEAR_PROMPT) {
            return false;
        }
        self.collections.clear_cart();
        self.persist();
        self.refresh_cart();
        self.ui.notify(CART_CLEARED, NotificationKind::Info);
        true
    }

    // =========================================================================
    // FAVORITES
    // =========================================================================

    pub fn add_to_favorites(&mut self, id: &str) {
        self.collections.add_to_favorites(id);
        self.persist();
        self.ui.notify(FAVORITE_ADDED, NotificationKind::Success);
    }

    /// Asks first. Same return contract as [`Self::remove_from_cart`].
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        if !self.ui.confirm(FAVORITE_REMOVE_PROMPT) {
            return false;
        }
        if !self.collections.remove_favorite(id) {
            log::debug!("{id} was not in the stored favorites");
        }
        self.persist();
        self.ui.notify(FAVORITE_REMOVED, NotificationKind::Info);
        true
    }

    pub fn clear_favorites(&mut self) -> bool {
        if !self.ui.confirm(FAVORITES_CLEAR_PROMPT) {
            return false;
        }
        self.collections.clear_favorites();
        self.persist();
        self.ui.notify(FAVORITES_CLEARED, NotificationKind::Info);
        true
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Send a non-blank query to the catalog. Returns whether it navigated.
    pub fn search(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.ui.navigate(&router::catalog_search_url(query));
        true
    }

    pub fn navigate_to_category(&self, category: &str) {
        self.store.set_selected_category(category);
        self.ui.navigate(&router::catalog_category_url(category));
    }

    pub fn navigate_to_guided_filters(&self) {
        self.ui.navigate(&router::guided_filters_url());
    }

    /// The comparison page is only useful with something to compare.
    pub fn navigate_to_comparison(&self) -> bool {
        if self.collections.compare().is_empty() {
            self.ui.alert(COMPARE_EMPTY);
            return false;
        }
        self.ui.navigate(COMPARISON_PAGE);
        true
    }

    pub fn view_product(&self, id: &str) {
        self.store.set_selected_product(id);
        self.ui.navigate(PRODUCT_PAGE);
    }

    pub fn continue_shopping(&self) {
        self.ui.navigate(CATALOG_PAGE);
    }

    pub fn proceed_to_delivery(&self) {
        self.ui.notify(DELIVERY_NEXT, NotificationKind::Info);
    }

    // =========================================================================
    // HAND-OFFS
    // =========================================================================

    /// Category for the catalog page: the URL parameter wins, then the
    /// category saved by the page that navigated here, then the default.
    /// Returned raw so an unknown category can still be titled.
    pub fn catalog_category(&self, from_url: Option<&str>) -> String {
        from_url
            .map(str::to_owned)
            .or_else(|| self.store.selected_category())
            .unwrap_or_else(|| self.config.default_category.as_str().to_owned())
    }

    /// Category whose products the catalog grid shows for `raw`.
    pub fn grid_category(&self, raw: &str) -> Category {
        Category::parse(raw).unwrap_or(self.config.default_category)
    }

    /// What the catalog page opens with. A search without a category spans
    /// the whole catalog under the generic title; otherwise the search, if
    /// any, narrows the chosen category.
    pub fn catalog_view<C: CatalogSource>(&self, catalog: &C, query: &CatalogQuery) -> CatalogView {
        if let (Some(term), None) = (query.search.as_deref(), query.category.as_deref()) {
            return CatalogView { title: catalog_title(""), products: search_products(&catalog.all(), term) };
        }
        let raw = self.catalog_category(query.category.as_deref());
        let products = catalog.products(self.grid_category(&raw));
        let products = match query.search.as_deref() {
            Some(term) => search_products(products, term),
            None => products.to_vec(),
        };
        CatalogView { title: catalog_title(&raw), products }
    }

    pub fn selected_product(&self) -> Option<String> {
        self.store.selected_product()
    }
}
