//! Catalog filtering, sorting and search.
//!
//! [`CatalogListing`] holds the products the catalog page started from plus
//! the shopper's current filters and sort order; [`CatalogListing::visible`]
//! recomputes the grid contents from scratch each time.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use super::{Product, parse_price};

/// Filter criteria collected from the catalog sidebar.
///
/// Empty criteria match every product.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub ram: Vec<String>,
    pub storage: Vec<String>,
    pub brand: Vec<String>,
}

impl FilterSet {
    /// Build from raw sidebar values. Unparsable price inputs are ignored.
    pub fn from_inputs(min_price: &str, max_price: &str, ram: Vec<String>, storage: Vec<String>, brand: Vec<String>) -> Self {
        Self {
            min_price: parse_price(min_price),
            max_price: parse_price(max_price),
            ram,
            storage,
            brand,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if !self.ram.is_empty() && !self.ram.iter().any(|ram| has_size(product, ram_size, ram)) {
            return false;
        }
        if !self.storage.is_empty() && !self.storage.iter().any(|storage| has_size(product, storage_size, storage)) {
            return false;
        }
        if !self.brand.is_empty() && !self.brand.iter().any(|brand| brand.eq_ignore_ascii_case(product.brand())) {
            return false;
        }
        true
    }
}

/// Whether one of the `•`-separated spec segments names `wanted` as the
/// size `extract` reads from it. Sizes compare as whole tokens, so `8GB`
/// never matches `128GB`.
fn has_size(product: &Product, extract: fn(&str) -> Option<&str>, wanted: &str) -> bool {
    let wanted = wanted.trim();
    !wanted.is_empty()
        && product.spec.split('•').filter_map(|segment| extract(segment.trim())).any(|size| size.eq_ignore_ascii_case(wanted))
}

/// `"16GB RAM"` -> `16GB`.
fn ram_size(segment: &str) -> Option<&str> {
    let mut words = segment.split_whitespace();
    let size = words.next()?;
    words.next().filter(|word| word.eq_ignore_ascii_case("ram")).map(|_| size)
}

/// `"512GB SSD"` or `"128GB"` -> the leading size; RAM segments are skipped.
fn storage_size(segment: &str) -> Option<&str> {
    if ram_size(segment).is_some() {
        return None;
    }
    let size = segment.split_whitespace().next()?;
    let upper = size.to_ascii_uppercase();
    let is_size = size.starts_with(|c: char| c.is_ascii_digit()) && (upper.ends_with("GB") || upper.ends_with("TB"));
    is_size.then_some(size)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sort choices offered by the catalog `<select>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Newest,
    Popular,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "newest" => Self::Newest,
            "popular" => Self::Popular,
            _ => Self::Featured,
        }
    }
}

pub fn filter_products(products: &[Product], filters: &FilterSet) -> Vec<Product> {
    products.iter().filter(|product| filters.matches(product)).copied().collect()
}

/// Stable sort. The catalog carries no release dates or ratings, so
/// `Newest` and `Popular` keep catalog order like `Featured`.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::PriceLow => products.sort_by_key(|product| product.price),
        SortOrder::PriceHigh => products.sort_by_key(|product| std::cmp::Reverse(product.price)),
        SortOrder::Featured | SortOrder::Newest | SortOrder::Popular => {}
    }
}

/// Case-insensitive match on title or spec. A blank query matches everything.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    if query.trim().is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| contains_ignore_case(product.title, query) || contains_ignore_case(product.spec, query))
        .copied()
        .collect()
}

/// What the catalog grid currently shows.
#[derive(Clone, Debug, Default)]
pub struct CatalogListing {
    base: Vec<Product>,
    filters: FilterSet,
    order: SortOrder,
}

impl CatalogListing {
    pub fn new(base: Vec<Product>) -> Self {
        Self { base, ..Self::default() }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSet::default();
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    pub fn visible(&self) -> Vec<Product> {
        let mut products = filter_products(&self.base, &self.filters);
        sort_products(&mut products, self.order);
        products
    }
}
