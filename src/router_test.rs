use super::*;

/// Records which initializers ran, in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

impl PageInitializers for Recorder {
    fn home(&mut self) {
        self.calls.push("home");
    }
    fn catalog(&mut self) {
        self.calls.push("catalog");
    }
    fn product(&mut self) {
        self.calls.push("product");
    }
    fn comparison(&mut self) {
        self.calls.push("comparison");
    }
    fn cart(&mut self) {
        self.calls.push("cart");
    }
    fn profile(&mut self) {
        self.calls.push("profile");
    }
    fn global(&mut self) {
        self.calls.push("global");
    }
}

fn dispatched(page: PageIdentity) -> Vec<&'static str> {
    let mut recorder = Recorder::default();
    dispatch(&page, &mut recorder);
    recorder.calls
}

// =============================================================
// PageIdentity
// =============================================================

#[test]
fn from_path_strips_directories_and_extension() {
    assert_eq!(PageIdentity::from_path("/shop/catalog.html"), PageIdentity::Catalog);
    assert_eq!(PageIdentity::from_path("/cart.html"), PageIdentity::Cart);
    assert_eq!(PageIdentity::from_path("profile"), PageIdentity::Profile);
    assert_eq!(PageIdentity::from_path("/a/b/comparison.htm"), PageIdentity::Comparison);
    assert_eq!(PageIdentity::from_path("product.html"), PageIdentity::Product);
}

#[test]
fn empty_path_and_index_are_home() {
    assert_eq!(PageIdentity::from_path(""), PageIdentity::Home);
    assert_eq!(PageIdentity::from_path("/"), PageIdentity::Home);
    assert_eq!(PageIdentity::from_path("/shop/"), PageIdentity::Home);
    assert_eq!(PageIdentity::from_path("/index.html"), PageIdentity::Home);
}

#[test]
fn unknown_page_keeps_its_token() {
    assert_eq!(PageIdentity::from_path("/about.html"), PageIdentity::Other("about".to_owned()));
    assert_eq!(PageIdentity::Other("about".to_owned()).as_str(), "about");
}

#[test]
fn page_tokens_round_trip() {
    for page in [
        PageIdentity::Home,
        PageIdentity::Catalog,
        PageIdentity::Product,
        PageIdentity::Comparison,
        PageIdentity::Cart,
        PageIdentity::Profile,
    ] {
        assert_eq!(PageIdentity::from_token(page.as_str()), page);
    }
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn dispatch_catalog_runs_only_catalog_then_global() {
    assert_eq!(dispatched(PageIdentity::Catalog), vec!["catalog", "global"]);
}

#[test]
fn dispatch_runs_exactly_one_page_initializer() {
    assert_eq!(dispatched(PageIdentity::Home), vec!["home", "global"]);
    assert_eq!(dispatched(PageIdentity::Product), vec!["product", "global"]);
    assert_eq!(dispatched(PageIdentity::Comparison), vec!["comparison", "global"]);
    assert_eq!(dispatched(PageIdentity::Cart), vec!["cart", "global"]);
    assert_eq!(dispatched(PageIdentity::Profile), vec!["profile", "global"]);
}

#[test]
fn dispatch_unknown_page_still_runs_global() {
    assert_eq!(dispatched(PageIdentity::from_path("/unknown-page.html")), vec!["global"]);
}

// =============================================================
// CatalogQuery
// =============================================================

#[test]
fn catalog_query_parses_all_parameters() {
    let query = CatalogQuery::parse("?search=macbook+pro&category=tvs&guided=true");
    assert_eq!(query.search.as_deref(), Some("macbook pro"));
    assert_eq!(query.category.as_deref(), Some("tvs"));
    assert!(query.guided);
}

#[test]
fn catalog_query_decodes_percent_escapes() {
    let query = CatalogQuery::parse("search=4K%20%26%20HDR");
    assert_eq!(query.search.as_deref(), Some("4K & HDR"));
}

#[test]
fn catalog_query_treats_blank_values_as_absent() {
    let query = CatalogQuery::parse("?search=%20%20&category=");
    assert_eq!(query, CatalogQuery::default());
}

#[test]
fn catalog_query_guided_is_boolean_ish() {
    assert!(CatalogQuery::parse("guided=1").guided);
    assert!(CatalogQuery::parse("guided=YES").guided);
    assert!(!CatalogQuery::parse("guided=false").guided);
    assert!(!CatalogQuery::parse("").guided);
}

// =============================================================
// URLs
// =============================================================

#[test]
fn search_url_encodes_query() {
    assert_eq!(catalog_search_url("macbook pro & co"), "catalog.html?search=macbook+pro+%26+co");
}

#[test]
fn search_url_round_trips_through_catalog_query() {
    let url = catalog_search_url("50\" TV / 4K?");
    let (_, query) = url.split_once('?').expect("query string");
    assert_eq!(CatalogQuery::parse(query).search.as_deref(), Some("50\" TV / 4K?"));
}

#[test]
fn category_and_guided_urls() {
    assert_eq!(catalog_category_url("smartphones"), "catalog.html?category=smartphones");
    assert_eq!(guided_filters_url(), "catalog.html?guided=true");
}
