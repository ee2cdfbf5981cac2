use super::*;
use crate::catalog::StaticCatalog;
use crate::store::MemoryStore;
use crate::ui::{HeadlessUi, UiEvent};

type TestStorefront = Storefront<MemoryStore, HeadlessUi>;

fn storefront() -> TestStorefront {
    Storefront::load(StorefrontConfig::default(), MemoryStore::new(), HeadlessUi::new())
}

fn storefront_with(entries: &[(&str, &str)]) -> TestStorefront {
    Storefront::load(StorefrontConfig::default(), MemoryStore::with_entries(entries.iter().copied()), HeadlessUi::new())
}

/// What a fresh page load would read back.
fn reloaded(storefront: &TestStorefront) -> Collections {
    storefront.store().load(storefront.config().compare_limit)
}

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|id| (*id).to_owned()).collect()
}

// =============================================================
// load
// =============================================================

#[test]
fn load_picks_up_persisted_lists() {
    let storefront = storefront_with(&[("techmarket_compare", r#"["a","b"]"#), ("techmarket_cart", "not json")]);
    assert_eq!(storefront.collections().compare(), ids(&["a", "b"]).as_slice());
    assert!(storefront.collections().cart().is_empty());
    assert!(storefront.ui().events().is_empty());
}

#[test]
fn refresh_renders_both_counts() {
    let storefront = storefront_with(&[("techmarket_cart", r#"["x","y"]"#)]);
    storefront.refresh();
    assert_eq!(storefront.ui().events(), vec![UiEvent::CompareCount(0), UiEvent::CartCount(2)]);
}

// =============================================================
// Compare
// =============================================================

#[test]
fn add_to_compare_persists_refreshes_and_notifies() {
    let mut storefront = storefront();
    assert!(storefront.add_to_compare("macbook-pro"));
    assert_eq!(storefront.collections().compare(), ids(&["macbook-pro"]).as_slice());
    assert_eq!(reloaded(&storefront), *storefront.collections());
    assert_eq!(
        storefront.ui().events(),
        vec![
            UiEvent::CompareCount(1),
            UiEvent::Notified { message: COMPARE_ADDED.to_owned(), kind: NotificationKind::Success },
        ]
    );
}

#[test]
fn duplicate_compare_warns_without_persisting() {
    let mut storefront = storefront();
    storefront.add_to_compare("macbook-pro");
    storefront.ui().take_events();

    assert!(!storefront.add_to_compare("macbook-pro"));
    assert_eq!(storefront.ui().alerts(), vec!["Product is already in comparison list!".to_owned()]);
    assert!(storefront.ui().notifications().is_empty());
    assert_eq!(reloaded(&storefront).compare(), ids(&["macbook-pro"]).as_slice());
}

#[test]
fn full_compare_list_warns_with_limit() {
    let mut storefront = storefront();
    for id in ["a", "b", "c", "d"] {
        assert!(storefront.add_to_compare(id));
    }
    storefront.ui().take_events();
    assert!(!storefront.add_to_compare("e"));
    assert_eq!(storefront.ui().alerts(), vec!["You can compare up to 4 products at once!".to_owned()]);
    assert_eq!(storefront.collections().compare().len(), 4);
}

#[test]
fn configured_compare_limit_applies() {
    let config = StorefrontConfig { compare_limit: 2, ..StorefrontConfig::default() };
    let mut storefront = Storefront::load(config, MemoryStore::new(), HeadlessUi::new());
    assert!(storefront.add_to_compare("a"));
    assert!(storefront.add_to_compare("b"));
    assert!(!storefront.add_to_compare("c"));
    assert_eq!(storefront.ui().alerts(), vec!["You can compare up to 2 products at once!".to_owned()]);
}

#[test]
fn remove_from_compare_round_trips() {
    let mut storefront = storefront();
    storefront.add_to_compare("a");
    let before = storefront.collections().clone();
    storefront.add_to_compare("b");
    assert!(storefront.remove_from_compare("b"));
    assert_eq!(*storefront.collections(), before);
    assert_eq!(reloaded(&storefront), before);
    assert_eq!(
        storefront.ui().notifications().last(),
        Some(&(COMPARE_REMOVED.to_owned(), NotificationKind::Info))
    );
}

#[test]
fn remove_missing_compare_entry_is_silent() {
    let mut storefront = storefront();
    storefront.add_to_compare("a");
    storefront.ui().take_events();
    assert!(!storefront.remove_from_compare("zzz"));
    assert_eq!(storefront.collections().compare(), ids(&["a"]).as_slice());
    assert!(storefront.ui().events().is_empty());
}

// =============================================================
// Cart
// =============================================================

#[test]
fn add_to_cart_updates_badge_and_storage() {
    let mut storefront = storefront();
    storefront.add_to_cart("dell-xps");
    storefront.add_to_cart("dell-xps");
    assert_eq!(reloaded(&storefront).cart(), ids(&["dell-xps", "dell-xps"]).as_slice());
    assert!(storefront.ui().events().contains(&UiEvent::CartCount(2)));
}

#[test]
fn remove_from_cart_requires_confirmation() {
    let mut storefront = storefront_with(&[("techmarket_cart", r#"["a","b"]"#)]);
    storefront.ui().set_confirm_reply(false);
    assert!(!storefront.remove_from_cart("a"));
    assert_eq!(storefront.collections().cart(), ids(&["a", "b"]).as_slice());
    assert_eq!(
        storefront.ui().take_events(),
        vec![UiEvent::Confirmed { message: CART_REMOVE_PROMPT.to_owned(), accepted: false }]
    );

    storefront.ui().set_confirm_reply(true);
    assert!(storefront.remove_from_cart("a"));
    assert_eq!(reloaded(&storefront).cart(), ids(&["b"]).as_slice());
    assert_eq!(storefront.ui().notifications(), vec![(CART_REMOVED.to_owned(), NotificationKind::Info)]);
}

#[test]
fn confirmed_removal_of_unstored_item_still_reports() {
    let mut storefront = storefront();
    assert!(storefront.remove_from_cart("static-markup-item"));
    assert_eq!(storefront.ui().notifications(), vec![(CART_REMOVED.to_owned(), NotificationKind::Info)]);
}

#[test]
fn clear_cart_declined_changes_nothing() {
    let mut storefront = storefront_with(&[("techmarket_cart", r#"["a"]"#)]);
    storefront.ui().set_confirm_reply(false);
    assert!(!storefront.clear_cart());
    assert_eq!(reloaded(&storefront).cart(), ids(&["a"]).as_slice());
    assert!(storefront.ui().notifications().is_empty());
}

#[test]
fn clear_cart_confirmed_empties_storage() {
    let mut storefront = storefront_with(&[("techmarket_cart", r#"["a","b"]"#)]);
    assert!(storefront.clear_cart());
    assert!(reloaded(&storefront).cart().is_empty());
    assert!(storefront.ui().events().contains(&UiEvent::CartCount(0)));
    assert_eq!(storefront.ui().notifications(), vec![(CART_CLEARED.to_owned(), NotificationKind::Info)]);
}

// =============================================================
// Favorites
// =============================================================

#[test]
fn favorites_add_remove_clear_persist() {
    let mut storefront = storefront();
    storefront.add_to_favorites("a");
    storefront.add_to_favorites("b");
    assert_eq!(reloaded(&storefront).favorites(), ids(&["a", "b"]).as_slice());

    assert!(storefront.remove_favorite("a"));
    assert_eq!(reloaded(&storefront).favorites(), ids(&["b"]).as_slice());

    assert!(storefront.clear_favorites());
    assert!(reloaded(&storefront).favorites().is_empty());
    assert_eq!(
        storefront.ui().notifications().last(),
        Some(&(FAVORITES_CLEARED.to_owned(), NotificationKind::Info))
    );
}

#[test]
fn declined_favorite_removal_is_silent() {
    let mut storefront = storefront();
    storefront.add_to_favorites("a");
    storefront.ui().set_confirm_reply(false);
    storefront.ui().take_events();
    assert!(!storefront.remove_favorite("a"));
    assert!(!storefront.clear_favorites());
    assert!(storefront.ui().notifications().is_empty());
    assert_eq!(storefront.collections().favorites(), ids(&["a"]).as_slice());
}

// =============================================================
// Memory mirrors storage
// =============================================================

#[test]
fn every_mutator_leaves_storage_equal_to_memory() {
    let mut storefront = storefront();
    storefront.add_to_compare("a");
    assert_eq!(reloaded(&storefront), *storefront.collections());
    storefront.add_to_cart("b");
    assert_eq!(reloaded(&storefront), *storefront.collections());
    storefront.add_to_favorites("c");
    assert_eq!(reloaded(&storefront), *storefront.collections());
    storefront.remove_from_compare("a");
    assert_eq!(reloaded(&storefront), *storefront.collections());
    storefront.remove_from_cart("b");
    assert_eq!(reloaded(&storefront), *storefront.collections());
    storefront.clear_favorites();
    assert_eq!(reloaded(&storefront), *storefront.collections());
}

#[test]
fn next_page_load_sees_changes() {
    let backend = MemoryStore::new();
    let mut first = Storefront::load(StorefrontConfig::default(), backend.clone(), HeadlessUi::new());
    first.add_to_compare("a");
    first.add_to_cart("b");

    let second = Storefront::load(StorefrontConfig::default(), backend, HeadlessUi::new());
    assert_eq!(second.collections(), first.collections());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn search_trims_and_encodes() {
    let storefront = storefront();
    assert!(storefront.search("  galaxy s24 "));
    assert_eq!(storefront.ui().last_navigation().as_deref(), Some("catalog.html?search=galaxy+s24"));
}

#[test]
fn blank_search_does_not_navigate() {
    let storefront = storefront();
    assert!(!storefront.search("   "));
    assert!(storefront.ui().events().is_empty());
}

#[test]
fn navigate_to_category_saves_hand_off() {
    let storefront = storefront();
    storefront.navigate_to_category("tvs");
    assert_eq!(storefront.store().selected_category().as_deref(), Some("tvs"));
    assert_eq!(storefront.ui().last_navigation().as_deref(), Some("catalog.html?category=tvs"));
}

#[test]
fn guided_filters_and_continue_shopping_targets() {
    let storefront = storefront();
    storefront.navigate_to_guided_filters();
    assert_eq!(storefront.ui().last_navigation().as_deref(), Some("catalog.html?guided=true"));
    storefront.continue_shopping();
    assert_eq!(storefront.ui().last_navigation().as_deref(), Some("catalog.html"));
}

#[test]
fn comparison_needs_a_product() {
    let mut storefront = storefront();
    assert!(!storefront.navigate_to_comparison());
    assert_eq!(storefront.ui().alerts(), vec![COMPARE_EMPTY.to_owned()]);
    assert_eq!(storefront.ui().last_navigation(), None);

    storefront.add_to_compare("a");
    assert!(storefront.navigate_to_comparison());
    assert_eq!(storefront.ui().last_navigation().as_deref(), Some("comparison.html"));
}

#[test]
fn view_product_saves_hand_off() {
    let storefront = storefront();
    storefront.view_product("pixel-8-pro");
    assert_eq!(storefront.selected_product().as_deref(), Some("pixel-8-pro"));
    assert_eq!(storefront.ui().last_navigation().as_deref(), Some("product.html"));
}

#[test]
fn proceed_to_delivery_only_notifies() {
    let storefront = storefront();
    storefront.proceed_to_delivery();
    assert_eq!(storefront.ui().notifications(), vec![(DELIVERY_NEXT.to_owned(), NotificationKind::Info)]);
}

// =============================================================
// Catalog hand-off
// =============================================================

#[test]
fn catalog_category_prefers_url_then_saved_then_default() {
    let storefront = storefront();
    assert_eq!(storefront.catalog_category(None), "laptops");
    storefront.store().set_selected_category("appliances");
    assert_eq!(storefront.catalog_category(None), "appliances");
    assert_eq!(storefront.catalog_category(Some("tvs")), "tvs");
}

fn product_ids(view: &CatalogView) -> Vec<&'static str> {
    view.products.iter().map(|product| product.id).collect()
}

#[test]
fn search_without_category_spans_every_category() {
    let storefront = storefront();
    storefront.store().set_selected_category("tvs");
    let query = CatalogQuery { search: Some("iPhone".to_owned()), ..CatalogQuery::default() };
    let view = storefront.catalog_view(&StaticCatalog, &query);
    assert_eq!(view.title, "Products");
    assert_eq!(product_ids(&view), vec!["iphone-15-pro"]);

    let query = CatalogQuery { search: Some("smart tv".to_owned()), ..CatalogQuery::default() };
    assert_eq!(storefront.catalog_view(&StaticCatalog, &query).products.len(), 6);
}

#[test]
fn search_with_category_stays_in_that_category() {
    let storefront = storefront();
    let query = CatalogQuery {
        search: Some("snapdragon".to_owned()),
        category: Some("laptops".to_owned()),
        ..CatalogQuery::default()
    };
    let view = storefront.catalog_view(&StaticCatalog, &query);
    assert_eq!(view.title, "Laptops");
    assert!(view.products.is_empty());
}

#[test]
fn catalog_view_without_search_lists_the_handed_off_category() {
    let storefront = storefront();
    storefront.store().set_selected_category("appliances");
    let view = storefront.catalog_view(&StaticCatalog, &CatalogQuery::default());
    assert_eq!(view.title, "Appliances");
    assert_eq!(view.products, StaticCatalog.products(Category::Appliances).to_vec());
}

#[test]
fn grid_category_falls_back_to_default() {
    let storefront = storefront();
    assert_eq!(storefront.grid_category("smartphones"), Category::Smartphones);
    assert_eq!(storefront.grid_category("cameras"), Category::Laptops);
}
