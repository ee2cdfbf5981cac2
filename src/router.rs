//! Page identity, one-shot page dispatch, and storefront URLs.
//!
//! ARCHITECTURE
//! ============
//! Every page is a fresh load of a static HTML file, so routing happens once:
//! [`PageIdentity::from_path`] names the page and [`dispatch`] runs that
//! page's initializer followed by the global one. There are no transitions
//! after that; anything that must survive navigation goes through the store.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use url::form_urlencoded;

pub const CATALOG_PAGE: &str = "catalog.html";
pub const PRODUCT_PAGE: &str = "product.html";
pub const COMPARISON_PAGE: &str = "comparison.html";
pub const CART_PAGE: &str = "cart.html";

/// Which page is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageIdentity {
    Home,
    Catalog,
    Product,
    Comparison,
    Cart,
    Profile,
    /// A page with no initializer of its own.
    Other(String),
}

impl PageIdentity {
    /// Name the page from a location path: the final segment with its
    /// extension stripped. An empty segment is the home page.
    pub fn from_path(path: &str) -> Self {
        let segment = path.rsplit('/').next().unwrap_or_default();
        let token = segment.split('.').next().unwrap_or_default();
        Self::from_token(token)
    }

    pub fn from_token(token: &str) -> Self {
        match token {
            "" | "index" => Self::Home,
            "catalog" => Self::Catalog,
            "product" => Self::Product,
            "comparison" => Self::Comparison,
            "cart" => Self::Cart,
            "profile" => Self::Profile,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "index",
            Self::Catalog => "catalog",
            Self::Product => "product",
            Self::Comparison => "comparison",
            Self::Cart => "cart",
            Self::Profile => "profile",
            Self::Other(token) => token,
        }
    }
}

/// Per-page setup routines plus the page-independent one.
pub trait PageInitializers {
    fn home(&mut self);
    fn catalog(&mut self);
    fn product(&mut self);
    fn comparison(&mut self);
    fn cart(&mut self);
    fn profile(&mut self);
    fn global(&mut self);
}

/// Run exactly one page initializer (none for [`PageIdentity::Other`]),
/// then the global initializer.
pub fn dispatch<P: PageInitializers + ?Sized>(page: &PageIdentity, pages: &mut P) {
    log::debug!("dispatching page {}", page.as_str());
    match page {
        PageIdentity::Home => pages.home(),
        PageIdentity::Catalog => pages.catalog(),
        PageIdentity::Product => pages.product(),
        PageIdentity::Comparison => pages.comparison(),
        PageIdentity::Cart => pages.cart(),
        PageIdentity::Profile => pages.profile(),
        PageIdentity::Other(token) => log::debug!("no initializer for page {token:?}"),
    }
    pages.global();
}

// =============================================================================
// CATALOG QUERY
// =============================================================================

/// Query parameters understood by the catalog page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub guided: bool,
}

impl CatalogQuery {
    /// Parse `location.search`, with or without the leading `?`.
    /// Blank values count as absent; the last occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let value = value.trim();
            match &*key {
                "search" => parsed.search = non_blank(value),
                "category" => parsed.category = non_blank(value),
                "guided" => parsed.guided = is_truthy(value),
                _ => {}
            }
        }
        parsed
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

// =============================================================================
// URLS
// =============================================================================

fn catalog_url_with(key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new()).append_pair(key, value).finish();
    format!("{CATALOG_PAGE}?{query}")
}

pub fn catalog_search_url(query: &str) -> String {
    catalog_url_with("search", query)
}

pub fn catalog_category_url(category: &str) -> String {
    catalog_url_with("category", category)
}

pub fn guided_filters_url() -> String {
    catalog_url_with("guided", "true")
}
